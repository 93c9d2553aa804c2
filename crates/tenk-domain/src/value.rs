//! Metric values - what a parsed financial figure turns into

use std::fmt;

/// The value recorded for one financial metric.
///
/// Numbers are stored with their unit multiplier already applied, so
/// `"$1.2B"` becomes `Number(1_200_000_000.0)`. When a token cannot be
/// normalized the original trimmed text is kept as `Text`, and consumers
/// have to decide what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// A finite, multiplier-adjusted number
    Number(f64),

    /// The original token, kept because it could not be normalized
    Text(String),
}

impl MetricValue {
    /// Get the numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(_) => None,
        }
    }

    /// Get the raw text, if normalization failed
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Number(_) => None,
            MetricValue::Text(s) => Some(s),
        }
    }

    /// Check whether this value is numeric
    pub fn is_number(&self) -> bool {
        matches!(self, MetricValue::Number(_))
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        MetricValue::Number(n)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

impl fmt::Display for MetricValue {
    /// Numbers render as `1,234,567.89`; text renders verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => f.write_str(&group_thousands(*n)),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// Format a number with two decimals and comma thousands separators
fn group_thousands(n: f64) -> String {
    let formatted = format!("{:.2}", n.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if n < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}
