//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tenk_domain::{FilingSections, FinancialDataSet};
use tenk_router::conversions::data_set_to_json;

const RULE_WIDTH: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format parsed financial data.
    pub fn format_data_set(&self, data: &FinancialDataSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&data_set_to_json(data))?),
            OutputFormat::Table => Ok(self.format_data_set_table(data)),
        }
    }

    fn format_data_set_table(&self, data: &FinancialDataSet) -> String {
        if data.is_empty() {
            return self.colorize("No financial data parsed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        for (name, value) in data.iter() {
            builder.push_record([name.to_string(), value.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format the sections found in a filing.
    pub fn format_sections(&self, sections: &FilingSections) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = sections
                    .names()
                    .map(|name| {
                        let chars = sections.get(name).map_or(0, |t| t.chars().count());
                        (name.to_string(), serde_json::Value::from(chars))
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Section", "Characters"]);
                for name in sections.names() {
                    let chars = sections.get(name).map_or(0, |t| t.chars().count());
                    builder.push_record([name.to_string(), chars.to_string()]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Banner framed by `=` rules.
    pub fn banner(&self, lines: &[&str]) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let body = lines.join("\n");
        format!("{rule}\n{}\n{rule}", self.colorize(&body, "cyan"))
    }

    /// Titled block framed by `-` rules.
    pub fn section(&self, title: &str, body: &str) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        format!("{}\n{rule}\n{body}\n{rule}", self.colorize(title, "magenta"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> FinancialDataSet {
        let mut data = FinancialDataSet::new();
        data.insert("Revenue", 50_000_000_000.0);
        data.insert("Outlook", "stable");
        data
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_data_set(&sample_data()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["Revenue"], serde_json::json!(50_000_000_000.0));
        assert_eq!(value["Outlook"], "stable");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_data_set(&sample_data()).unwrap();
        assert!(output.contains("Metric"));
        assert!(output.contains("50,000,000,000.00"));
        assert!(output.contains("stable"));
    }

    #[test]
    fn test_empty_data() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_data_set(&FinancialDataSet::new()).unwrap();
        assert!(output.contains("No financial data parsed"));
    }

    #[test]
    fn test_sections_table() {
        let mut sections = FilingSections::new();
        sections.insert(FilingSections::ITEM_1_BUSINESS, "abc");
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sections(&sections).unwrap();
        assert!(output.contains("Item 1. Business"));
        assert!(output.contains('3'));
    }

    #[test]
    fn test_section_block() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let block = formatter.section("Item 1. Business", "Text");
        assert_eq!(
            block,
            format!("Item 1. Business\n{0}\nText\n{0}", "-".repeat(60))
        );
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
