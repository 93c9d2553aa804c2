//! FinancialDataSet - the metrics collected during one drafting session

use std::collections::HashMap;

use crate::value::MetricValue;

/// Header placeholders that are never accepted as metric names
const FORBIDDEN_METRIC_NAMES: [&str; 3] = ["", "metric", "item"];

/// Check whether a metric name is blank or a table-header placeholder
///
/// # Examples
///
/// ```
/// use tenk_domain::is_forbidden_metric_name;
///
/// assert!(is_forbidden_metric_name("  "));
/// assert!(is_forbidden_metric_name("Metric"));
/// assert!(is_forbidden_metric_name("ITEM"));
/// assert!(!is_forbidden_metric_name("Revenue"));
/// ```
pub fn is_forbidden_metric_name(name: &str) -> bool {
    let lowered = name.trim().to_lowercase();
    FORBIDDEN_METRIC_NAMES.contains(&lowered.as_str())
}

/// Mapping of metric name to value with last-write-wins semantics
///
/// Keys are unique. Entries keep the order in which a key was first seen,
/// which makes rendering stable, but consumers should treat the set as a
/// plain mapping.
#[derive(Debug, Clone, Default)]
pub struct FinancialDataSet {
    entries: Vec<(String, MetricValue)>,
    /// Position of each name in `entries`
    positions: HashMap<String, usize>,
}

impl FinancialDataSet {
    /// Create an empty data set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the same name
    ///
    /// Returns `false` (and stores nothing) when the name is blank or a
    /// header placeholder.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<MetricValue>) -> bool {
        let name = name.into();
        if is_forbidden_metric_name(&name) {
            return false;
        }

        let value = value.into();
        match self.positions.get(&name) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
        true
    }

    /// Get the value for a metric
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.positions
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    /// Check whether a metric is present
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no metrics have been collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Metric names in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Layer every entry of `other` on top of this set
    pub fn extend_from(&mut self, other: FinancialDataSet) {
        self.entries.reserve(other.entries.len());
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Merge two sets into a new one; `incoming` wins on collision
    ///
    /// Neither input is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenk_domain::{FinancialDataSet, MetricValue};
    ///
    /// let mut existing = FinancialDataSet::new();
    /// existing.insert("A", 1.0);
    ///
    /// let mut incoming = FinancialDataSet::new();
    /// incoming.insert("A", 2.0);
    /// incoming.insert("B", 3.0);
    ///
    /// let merged = FinancialDataSet::merge(&existing, &incoming);
    /// assert_eq!(merged.get("A"), Some(&MetricValue::Number(2.0)));
    /// assert_eq!(merged.get("B"), Some(&MetricValue::Number(3.0)));
    /// assert_eq!(existing.get("A"), Some(&MetricValue::Number(1.0)));
    /// ```
    pub fn merge(existing: &FinancialDataSet, incoming: &FinancialDataSet) -> FinancialDataSet {
        let mut merged = existing.clone();
        merged.extend_from(incoming.clone());
        merged
    }
}

impl PartialEq for FinancialDataSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> FromIterator<(K, V)> for FinancialDataSet
where
    K: Into<String>,
    V: Into<MetricValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FinancialDataSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl IntoIterator for FinancialDataSet {
    type Item = (String, MetricValue);
    type IntoIter = std::vec::IntoIter<(String, MetricValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = FinancialDataSet::new();
        assert!(set.insert("Revenue", 120.0));
        assert_eq!(set.get("Revenue"), Some(&MetricValue::Number(120.0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut set = FinancialDataSet::new();
        set.insert("Revenue", 100.0);
        set.insert("Net Income", 10.0);
        set.insert("Revenue", "restated");

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Revenue"), Some(&MetricValue::from("restated")));
        // First-seen order is kept
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["Revenue", "Net Income"]);
    }

    #[test]
    fn test_forbidden_names_rejected() {
        let mut set = FinancialDataSet::new();
        assert!(!set.insert("", 1.0));
        assert!(!set.insert("   ", 1.0));
        assert!(!set.insert("Metric", 1.0));
        assert!(!set.insert("item", 1.0));
        assert!(!set.insert(" ITEM ", 1.0));
        assert!(set.is_empty());
    }

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let existing: FinancialDataSet = vec![("A", 1.0)].into_iter().collect();
        let incoming: FinancialDataSet = vec![("A", 2.0), ("B", 3.0)].into_iter().collect();

        let merged = FinancialDataSet::merge(&existing, &incoming);
        let expected: FinancialDataSet = vec![("A", 2.0), ("B", 3.0)].into_iter().collect();
        assert_eq!(merged, expected);

        // Inputs untouched
        assert_eq!(existing.len(), 1);
        assert_eq!(incoming.len(), 2);
    }

    #[test]
    fn test_merge_with_empty() {
        let existing: FinancialDataSet = vec![("Cash", 5.0)].into_iter().collect();
        let merged = FinancialDataSet::merge(&existing, &FinancialDataSet::new());
        assert_eq!(merged, existing);

        let merged = FinancialDataSet::merge(&FinancialDataSet::new(), &existing);
        assert_eq!(merged, existing);
    }

    #[test]
    fn test_many_distinct_keys_stay_ordered() {
        let mut set = FinancialDataSet::new();
        for i in 0..30_000 {
            set.insert(format!("metric {i} total"), i as f64);
        }
        for i in (0..30_000).step_by(2) {
            set.insert(format!("metric {i} total"), -1.0);
        }

        assert_eq!(set.len(), 30_000);
        assert_eq!(set.keys().next(), Some("metric 0 total"));
        assert_eq!(set.keys().last(), Some("metric 29999 total"));
        assert_eq!(set.get("metric 2 total"), Some(&MetricValue::Number(-1.0)));
        assert_eq!(set.get("metric 3 total"), Some(&MetricValue::Number(3.0)));

        let merged = FinancialDataSet::merge(&set, &set);
        assert_eq!(merged, set);
    }

    fn metric_name() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,8}"
    }

    proptest! {
        #[test]
        fn prop_merge_incoming_always_wins(
            existing in proptest::collection::vec((metric_name(), -1e6f64..1e6), 0..12),
            incoming in proptest::collection::vec((metric_name(), -1e6f64..1e6), 0..12),
        ) {
            let existing: FinancialDataSet = existing.into_iter().collect();
            let incoming: FinancialDataSet = incoming.into_iter().collect();
            let merged = FinancialDataSet::merge(&existing, &incoming);

            for (name, value) in incoming.iter() {
                prop_assert_eq!(merged.get(name), Some(value));
            }
            for (name, value) in existing.iter() {
                if !incoming.contains(name) {
                    prop_assert_eq!(merged.get(name), Some(value));
                }
            }
            for name in merged.keys() {
                prop_assert!(existing.contains(name) || incoming.contains(name));
            }
        }

        #[test]
        fn prop_keys_unique_and_never_placeholders(
            names in proptest::collection::vec("(metric|item|Item|[A-Za-z ]{0,6})", 0..20),
        ) {
            let set: FinancialDataSet = names.into_iter().map(|n| (n, 1.0)).collect();
            let keys: Vec<&str> = set.keys().collect();
            let mut deduped = keys.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), keys.len());
            for key in keys {
                prop_assert!(!is_forbidden_metric_name(key));
            }
        }
    }
}
