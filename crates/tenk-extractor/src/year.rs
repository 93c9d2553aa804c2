//! Fiscal-year column resolution for multi-year tables

use once_cell::sync::Lazy;
use regex::Regex;

static FOUR_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));

/// First data column after the label column
const DEFAULT_COLUMN: usize = 1;

/// Pick the column index holding the requested fiscal year
///
/// The first header mentioning the target year wins (as a bare substring or
/// as `fy <year>`, `fy<year>`, `fiscal year <year>`). When no header does,
/// the column with the most recent year is used, earliest column on ties.
/// Everything else resolves to column 1.
///
/// The returned index is not bounds-checked against any row.
///
/// # Examples
///
/// ```
/// use tenk_extractor::resolve_year_column;
///
/// let headers = ["Metric", "FY 2023", "FY 2024"];
/// assert_eq!(resolve_year_column(&headers, Some("2024")), 2);
/// assert_eq!(resolve_year_column(&headers, Some("2025")), 2);
/// assert_eq!(resolve_year_column(&headers, None), 1);
/// ```
pub fn resolve_year_column<S: AsRef<str>>(headers: &[S], fiscal_year: Option<&str>) -> usize {
    if headers.len() < 2 {
        return DEFAULT_COLUMN;
    }
    let Some(fiscal_year) = fiscal_year.filter(|fy| !fy.is_empty()) else {
        return DEFAULT_COLUMN;
    };
    let Some(target) = FOUR_DIGITS.find(fiscal_year).map(|m| m.as_str()) else {
        return DEFAULT_COLUMN;
    };

    let aliases = [
        format!("fy {}", target),
        format!("fy{}", target),
        format!("fiscal year {}", target),
    ];
    let matched = headers.iter().position(|header| {
        let header = header.as_ref();
        if header.contains(target) {
            return true;
        }
        let lowered = header.to_lowercase();
        aliases.iter().any(|alias| lowered.contains(alias.as_str()))
    });

    matched
        .or_else(|| most_recent_year_column(headers))
        .unwrap_or(DEFAULT_COLUMN)
}

/// Index of the header carrying the largest 4-digit year
fn most_recent_year_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, header) in headers.iter().enumerate() {
        for found in FOUR_DIGITS.find_iter(header.as_ref()) {
            let Ok(year) = found.as_str().parse::<u32>() else {
                continue;
            };
            if best.map_or(true, |(_, best_year)| year > best_year) {
                best = Some((index, year));
            }
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_two_headers() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_year_column(&empty, Some("2024")), 1);
        assert_eq!(resolve_year_column(&["2024"], Some("2024")), 1);
    }

    #[test]
    fn test_missing_or_yearless_fiscal_year() {
        let headers = ["Metric", "FY 2023", "FY 2024"];
        assert_eq!(resolve_year_column(&headers, None), 1);
        assert_eq!(resolve_year_column(&headers, Some("")), 1);
        assert_eq!(resolve_year_column(&headers, Some("latest")), 1);
    }

    #[test]
    fn test_exact_and_alias_matches() {
        let headers = ["Metric", "FY 2023", "FY 2024"];
        assert_eq!(resolve_year_column(&headers, Some("2024")), 2);
        assert_eq!(resolve_year_column(&headers, Some("FY 2023")), 1);
        assert_eq!(resolve_year_column(&["Item", "Fiscal Year 2022", "2021"], Some("fy2022")), 1);
    }

    #[test]
    fn test_first_match_wins() {
        let headers = ["Metric", "FY 2024 (restated)", "2024 Actual"];
        assert_eq!(resolve_year_column(&headers, Some("2024")), 1);
    }

    #[test]
    fn test_falls_back_to_most_recent_year() {
        let headers = ["Metric", "FY 2023", "FY 2024"];
        assert_eq!(resolve_year_column(&headers, Some("2025")), 2);

        let headers = ["Metric", "2022", "2021 vs 2020"];
        assert_eq!(resolve_year_column(&headers, Some("2030")), 1);
    }

    #[test]
    fn test_most_recent_tie_takes_first_column() {
        let headers = ["Metric", "Q4 2023", "Full 2023", "2019"];
        assert_eq!(resolve_year_column(&headers, Some("2025")), 1);
    }

    #[test]
    fn test_no_years_in_headers() {
        let headers = ["Metric", "Current", "Prior"];
        assert_eq!(resolve_year_column(&headers, Some("2024")), 1);
    }
}
