//! Table parsing: pipe-delimited markdown tables and HTML markup tables

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tenk_domain::{is_forbidden_metric_name, FinancialDataSet};
use tracing::warn;

use crate::normalize::normalize_value;
use crate::year::resolve_year_column;

static SEPARATOR_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|[\s\-:]+\|").expect("separator pattern is valid"));

/// Label used for single-cell rows when the table has no headers
const SINGLE_CELL_LABEL: &str = "Value";

/// A parsed table: header labels plus the cells of every data row
///
/// Built from one input and consumed right away; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    /// Header labels, label column first
    pub headers: Vec<String>,

    /// Data rows, each a list of trimmed cell texts
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Parse a pipe-delimited markdown table
    ///
    /// Only lines containing `|` take part, and there must be at least two
    /// of them. Separator rows such as `|---|:--:|` are dropped, the first
    /// remaining line supplies the headers.
    pub fn from_markdown(text: &str) -> Option<TableModel> {
        if !text.contains('|') {
            return None;
        }

        let lines: Vec<&str> = text
            .lines()
            .filter(|line| line.contains('|'))
            .map(str::trim)
            .collect();
        if lines.len() < 2 {
            return None;
        }

        let mut data_lines = lines
            .into_iter()
            .filter(|line| !SEPARATOR_ROW.is_match(line));
        let headers = split_pipe_row(data_lines.next()?);
        let rows = data_lines.map(split_pipe_row).collect();

        Some(TableModel { headers, rows })
    }

    /// Parse every `<table>` in an HTML fragment
    ///
    /// The first `<tr>` of each table is its header row; `th` and `td`
    /// both count as cells. Returns no tables when the markup cannot be
    /// queried.
    pub fn from_markup(text: &str) -> Vec<TableModel> {
        if !text.to_lowercase().contains("<table") {
            return Vec::new();
        }

        let selectors = (
            Selector::parse("table"),
            Selector::parse("tr"),
            Selector::parse("th, td"),
        );
        let (table_sel, row_sel, cell_sel) = match selectors {
            (Ok(table), Ok(row), Ok(cell)) => (table, row, cell),
            _ => {
                warn!("Failed to build table selectors; skipping markup tables");
                return Vec::new();
            }
        };

        let document = Html::parse_document(text);
        document
            .select(&table_sel)
            .filter_map(|table| {
                let mut rows = table
                    .select(&row_sel)
                    .map(|row| row.select(&cell_sel).map(cell_text).collect::<Vec<_>>());
                let headers = rows.next()?;
                Some(TableModel {
                    headers,
                    rows: rows.collect(),
                })
            })
            .collect()
    }

    /// Records from a markdown table
    ///
    /// Rows with one cell are filed under the first header (or `"Value"`).
    /// Rows with an empty value, or a blank or placeholder label, are skipped.
    pub fn markdown_records(&self, fiscal_year: Option<&str>) -> FinancialDataSet {
        let column = resolve_year_column(&self.headers, fiscal_year);
        let mut records = FinancialDataSet::new();

        for cells in &self.rows {
            let (key, value) = match cells.as_slice() {
                [] => continue,
                [only] => (
                    self.headers
                        .first()
                        .map(String::as_str)
                        .unwrap_or(SINGLE_CELL_LABEL),
                    only.as_str(),
                ),
                [label, first, ..] => (
                    label.as_str(),
                    cells.get(column).unwrap_or(first).as_str(),
                ),
            };

            if value.is_empty() || is_forbidden_metric_name(key) {
                continue;
            }
            records.insert(key, normalize_value(value));
        }
        records
    }

    /// Records from a markup table
    ///
    /// Rows with fewer than two cells are skipped, as are rows with a blank
    /// or placeholder label or an empty value.
    pub fn markup_records(&self, fiscal_year: Option<&str>) -> FinancialDataSet {
        let column = resolve_year_column(&self.headers, fiscal_year);
        let mut records = FinancialDataSet::new();

        for cells in &self.rows {
            let [label, first, ..] = cells.as_slice() else {
                continue;
            };
            if is_forbidden_metric_name(label) {
                continue;
            }
            let value = cells.get(column).unwrap_or(first);
            if value.is_empty() {
                continue;
            }
            records.insert(label.as_str(), normalize_value(value));
        }
        records
    }
}

/// Split `| a | b |` into `["a", "b"]`, dropping the two outer pieces
fn split_pipe_row(line: &str) -> Vec<String> {
    let pieces: Vec<&str> = line.split('|').collect();
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces[1..pieces.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenk_domain::MetricValue;

    const MULTI_YEAR: &str = "| Metric | FY2023 | FY2024 |\n|---|---|---|\n| Revenue | 100 | 120 |";

    #[test]
    fn test_markdown_structure() {
        let table = TableModel::from_markdown(MULTI_YEAR).unwrap();
        assert_eq!(table.headers, vec!["Metric", "FY2023", "FY2024"]);
        assert_eq!(table.rows, vec![vec!["Revenue", "100", "120"]]);
    }

    #[test]
    fn test_markdown_needs_two_pipe_lines() {
        assert!(TableModel::from_markdown("no table here").is_none());
        assert!(TableModel::from_markdown("| lonely | row |").is_none());
    }

    #[test]
    fn test_markdown_separator_variants_dropped() {
        let text = "| Metric | 2024 |\n| :--- | ---: |\n| Cash | $5M |";
        let table = TableModel::from_markdown(text).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.markdown_records(None).get("Cash"),
            Some(&MetricValue::Number(5_000_000.0))
        );
    }

    #[test]
    fn test_markdown_year_column_selected() {
        let table = TableModel::from_markdown(MULTI_YEAR).unwrap();
        let records = table.markdown_records(Some("2024"));
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("Revenue"), Some(&MetricValue::Number(120.0)));

        let records = table.markdown_records(Some("2023"));
        assert_eq!(records.get("Revenue"), Some(&MetricValue::Number(100.0)));
    }

    #[test]
    fn test_markdown_out_of_range_column_falls_back() {
        let text = "| Metric | 2022 | 2023 | 2024 |\n|---|---|---|---|\n| Revenue | 90 |";
        let table = TableModel::from_markdown(text).unwrap();
        let records = table.markdown_records(Some("2024"));
        assert_eq!(records.get("Revenue"), Some(&MetricValue::Number(90.0)));
    }

    #[test]
    fn test_markdown_single_cell_rows() {
        let text = "| Backlog |\n| 4.2B |";
        let table = TableModel::from_markdown(text).unwrap();
        let records = table.markdown_records(None);
        assert_eq!(records.get("Backlog"), Some(&MetricValue::Number(4_200_000_000.0)));
    }

    #[test]
    fn test_markdown_skips_placeholders_and_empty_values() {
        let text = "| Metric | 2024 |\n|---|---|\n| Item | 5 |\n| | 7 |\n| Margin | |\n| Units | n/a |";
        let table = TableModel::from_markdown(text).unwrap();
        let records = table.markdown_records(None);
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("Units"), Some(&MetricValue::Text("n/a".to_string())));
    }

    #[test]
    fn test_markup_tables() {
        let html = "<table>\
            <tr><th>Metric</th><th>2023</th><th>2024</th></tr>\
            <tr><td>Revenue</td><td>$100M</td><td>$120M</td></tr>\
            <tr><td>Gross margin</td><td>40%</td><td>42.5%</td></tr>\
            <tr><td>lonely</td></tr>\
            </table>";
        let tables = TableModel::from_markup(html);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, vec!["Metric", "2023", "2024"]);

        let records = tables[0].markup_records(Some("FY 2024"));
        assert_eq!(records.len(), 2);
        assert_eq!(records.get("Revenue"), Some(&MetricValue::Number(120_000_000.0)));
        assert_eq!(records.get("Gross margin"), Some(&MetricValue::Number(42.5)));
    }

    #[test]
    fn test_markup_skips_placeholder_labels() {
        let html = "<TABLE><tr><td>Item</td><td>Value</td></tr>\
            <tr><td>Metric</td><td>1</td></tr>\
            <tr><td>Cash</td><td></td></tr>\
            <tr><td>Debt</td><td>2K</td></tr></TABLE>";
        let tables = TableModel::from_markup(html);
        let records = tables[0].markup_records(None);
        assert_eq!(records.len(), 1);
        assert_eq!(records.get("Debt"), Some(&MetricValue::Number(2_000.0)));
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let tables = TableModel::from_markup("<table><tr><td>Revenue<td>");
        let records: usize = tables.iter().map(|t| t.markup_records(None).len()).sum();
        assert_eq!(records, 0);
        assert!(TableModel::from_markup("plain text").is_empty());
    }
}
