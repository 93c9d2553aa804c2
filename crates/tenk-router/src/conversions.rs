//! Conversions between JSON bodies and domain data sets

use serde_json::{Map, Number, Value};
use tenk_domain::{FinancialDataSet, MetricValue};

/// Build a data set from a JSON object
///
/// JSON numbers become `Number`; strings are kept verbatim and any other
/// JSON value is kept as its serialized text. Forbidden metric names are
/// dropped.
pub fn data_set_from_json(object: &Map<String, Value>) -> FinancialDataSet {
    object
        .iter()
        .map(|(name, value)| (name.as_str(), metric_from_json(value)))
        .collect()
}

fn metric_from_json(value: &Value) -> MetricValue {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => MetricValue::Number(f),
            _ => MetricValue::Text(n.to_string()),
        },
        Value::String(s) => MetricValue::Text(s.clone()),
        other => MetricValue::Text(other.to_string()),
    }
}

/// Render a data set as a JSON object, keeping entry order
pub fn data_set_to_json(data: &FinancialDataSet) -> Map<String, Value> {
    data.iter()
        .map(|(name, value)| (name.to_string(), metric_to_json(value)))
        .collect()
}

fn metric_to_json(value: &MetricValue) -> Value {
    match value {
        MetricValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        MetricValue::Text(s) => Value::String(s.clone()),
    }
}
