//! Value normalization for individual tokens

use once_cell::sync::Lazy;
use regex::Regex;
use tenk_domain::MetricValue;

static UNIT_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)billion|million|thousand|bn").expect("unit word pattern is valid")
});

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// Normalize one raw value token into a [`MetricValue`]
///
/// Currency symbols, commas, and whitespace are stripped. Percentages keep
/// their bare number (`"12.5%"` is `12.5`). Otherwise a unit letter or word
/// picks the multiplier, checked in the order billion, million, thousand,
/// and is removed before the number is parsed.
///
/// Anything that does not end up as a finite number comes back as the
/// original trimmed token.
///
/// # Examples
///
/// ```
/// use tenk_extractor::normalize_value;
/// use tenk_domain::MetricValue;
///
/// assert_eq!(normalize_value("$1,200M"), MetricValue::Number(1_200_000_000.0));
/// assert_eq!(normalize_value("15%"), MetricValue::Number(15.0));
/// assert_eq!(normalize_value("n/a"), MetricValue::Text("n/a".to_string()));
/// ```
pub fn normalize_value(token: &str) -> MetricValue {
    let original = token.trim();
    let cleaned: String = original
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',') && !c.is_whitespace())
        .collect();

    if original.contains('%') {
        return match parse_finite(&cleaned.replace('%', "")) {
            Some(n) => MetricValue::Number(n),
            None => MetricValue::Text(original.to_string()),
        };
    }

    let numeric = UNIT_WORDS.replace_all(&cleaned, "");
    let numeric: String = numeric
        .chars()
        .filter(|c| !matches!(c, 'b' | 'B' | 'm' | 'M' | 'k' | 'K'))
        .collect();

    match parse_finite(&numeric).map(|n| n * unit_multiplier(original)) {
        Some(n) if n.is_finite() => MetricValue::Number(n),
        _ => MetricValue::Text(original.to_string()),
    }
}

/// Multiplier implied by a unit letter or word anywhere in the token
fn unit_multiplier(token: &str) -> f64 {
    let lowered = token.to_lowercase();
    if lowered.contains('b') || lowered.contains("billion") {
        BILLION
    } else if lowered.contains('m') || lowered.contains("million") {
        MILLION
    } else if lowered.contains('k') || lowered.contains("thousand") {
        THOUSAND
    } else {
        1.0
    }
}

/// Parse a float, refusing NaN and infinities
pub(crate) fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
