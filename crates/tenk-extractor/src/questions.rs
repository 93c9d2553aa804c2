//! Data-request prompt shown to users when figures are missing

use std::fmt::Write;

/// Render missing items as a numbered request for data
///
/// Returns an empty string when nothing is missing.
pub fn format_questions<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::from("To complete the MD&A section, I need the following information:\n\n");
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, item.as_ref());
    }
    out.push_str("\nYou can provide this data in any format:\n");
    out.push_str("- Standalone numbers (e.g., 'Revenue: $50B')\n");
    out.push_str("- Markdown tables\n");
    out.push_str("- HTML tables\n");
    out.push_str("- Natural language descriptions\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let none: Vec<String> = Vec::new();
        assert_eq!(format_questions(&none), "");
    }

    #[test]
    fn test_numbered_items_with_hints() {
        let text = format_questions(&["Total revenue", "Operating income"]);
        assert!(text.starts_with("To complete the MD&A section"));
        assert!(text.contains("1. Total revenue\n2. Operating income\n"));
        assert!(text.contains("'Revenue: $50B'"));
        assert!(text.ends_with("- Natural language descriptions\n"));
    }
}
