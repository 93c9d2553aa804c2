//! Text helpers around generation calls

use tenk_domain::FinancialDataSet;

/// Render a data set as one `name: value` line per metric
///
/// Numbers use two decimals with thousands separators.
pub fn format_financial_data(data: &FinancialDataSet) -> String {
    if data.is_empty() {
        return "No financial data provided.".to_string();
    }

    data.iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pull bullet items out of a generated answer
///
/// Lines starting with `-`, `•` or `*` become items. When no line is a
/// bullet, the whole trimmed response becomes a single item.
pub fn parse_bullet_questions(response: &str) -> Vec<String> {
    let items: Vec<String> = response
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(['-', '•', '*']))
        .map(|line| line.trim_start_matches(['-', '•', '*', ' ']).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        let whole = response.trim();
        if whole.is_empty() {
            return Vec::new();
        }
        return vec![whole.to_string()];
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data() {
        assert_eq!(
            format_financial_data(&FinancialDataSet::new()),
            "No financial data provided."
        );
    }

    #[test]
    fn test_mixed_data() {
        let mut data = FinancialDataSet::new();
        data.insert("Revenue", 1_200_000_000.0);
        data.insert("Outlook", "stable");
        assert_eq!(
            format_financial_data(&data),
            "Revenue: 1,200,000,000.00\nOutlook: stable"
        );
    }

    #[test]
    fn test_bullets() {
        let response = "Here are the questions:\n- What was total revenue?\n• What was net income?\n  * Cash from operations?";
        assert_eq!(
            parse_bullet_questions(response),
            vec![
                "What was total revenue?",
                "What was net income?",
                "Cash from operations?"
            ]
        );
    }

    #[test]
    fn test_no_bullets_single_item() {
        assert_eq!(
            parse_bullet_questions("  What was revenue?  "),
            vec!["What was revenue?"]
        );
        assert!(parse_bullet_questions("   ").is_empty());
    }
}
