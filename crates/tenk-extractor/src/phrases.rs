//! Phrase rules: `Label: amount` pairs and `<label> growth of N%` changes

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tenk_domain::FinancialDataSet;

use crate::normalize::parse_finite;

/// `<label> <sep> <amount> <unit>` for each separator, in evaluation order
static KEY_VALUE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const AMOUNT: &str = r"[$€£¥]?([\d,\.]+)[ \t]*((?:billion|million|thousand|bn|mm|[bmk])\b)?";
    [r"([A-Za-z \t]+):\s*", r"([A-Za-z \t]+)=\s*", r"([A-Za-z \t]+)\s+of\s+"]
        .iter()
        .map(|prefix| {
            Regex::new(&format!("(?i){}{}", prefix, AMOUNT)).expect("key-value pattern is valid")
        })
        .collect()
});

static CONTEXTUAL_CHANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([A-Za-z \t]+)\s+(?:growth|change|increase|decrease)\s+(?:of|by)?\s*([\d,\.\-]+)\s*%")
        .expect("contextual change pattern is valid")
});

/// Key-value phrases such as `Revenue: $50B` or `Net income of 1.2 million`
///
/// The multiplier comes from the unit after the amount, or from the words
/// billion, million, or thousand anywhere in the matched text, so
/// `Revenue in millions: 50` is read as 50 million. Amounts that do not
/// parse are skipped.
pub(crate) fn key_value_records(text: &str) -> FinancialDataSet {
    let mut records = FinancialDataSet::new();
    for pattern in KEY_VALUE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some((label, value)) = key_value_pair(&caps) {
                records.insert(label, value);
            }
        }
    }
    records
}

fn key_value_pair(caps: &Captures<'_>) -> Option<(String, f64)> {
    let label = caps.get(1)?.as_str().trim();
    let amount = parse_finite(&caps.get(2)?.as_str().replace(',', ""))?;

    let unit = caps
        .get(3)
        .map(|unit| unit.as_str().to_lowercase())
        .unwrap_or_default();
    let span = caps.get(0)?.as_str().to_lowercase();

    let multiplier = if matches!(unit.as_str(), "b" | "bn") || span.contains("billion") {
        1e9
    } else if matches!(unit.as_str(), "m" | "mm") || span.contains("million") {
        1e6
    } else if unit == "k" || span.contains("thousand") {
        1e3
    } else {
        1.0
    };

    Some((label.to_string(), amount * multiplier)).filter(|(_, value)| value.is_finite())
}

/// Percentage changes such as `Revenue growth of 12.5%`
///
/// Stored as `"<label> YoY Change (%)"` with the signed percentage as-is.
pub(crate) fn contextual_change_records(text: &str) -> FinancialDataSet {
    let mut records = FinancialDataSet::new();
    for caps in CONTEXTUAL_CHANGE.captures_iter(text) {
        let label = caps[1].trim();
        if label.is_empty() {
            continue;
        }
        if let Some(change) = parse_finite(&caps[2].replace(',', "")) {
            records.insert(format!("{} YoY Change (%)", label), change);
        }
    }
    records
}
