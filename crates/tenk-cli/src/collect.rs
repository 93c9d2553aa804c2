//! Interactive financial data collection.
//!
//! Each line the user enters runs through the extractor and is merged into
//! the session's data set. Table rows (markdown pipes or HTML markup) are
//! held until a blank line so the whole table is parsed at once. `done` or
//! `skip` ends collection.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tenk_domain::FinancialDataSet;
use tenk_extractor::FinancialDataExtractor;
use tracing::debug;

const RETRY_HINT: &str = "Could not parse data. Please try again or type 'done'/'skip'.";

/// What happened to one submitted line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// `done` or `skip`
    Finished,
    /// Blank line, nothing to do
    Empty,
    /// Table row held until the table is complete
    Buffered,
    /// Records were parsed and merged
    Parsed(FinancialDataSet),
    /// Nothing could be parsed
    Unparsed,
}

/// Accumulates parsed data across submitted lines.
pub struct DataCollection<'a> {
    extractor: &'a FinancialDataExtractor,
    fiscal_year: Option<String>,
    data: FinancialDataSet,
    pending: Vec<String>,
}

fn is_table_line(line: &str) -> bool {
    line.contains('|') || line.starts_with('<')
}

impl<'a> DataCollection<'a> {
    /// Start an empty collection.
    pub fn new(extractor: &'a FinancialDataExtractor, fiscal_year: Option<&str>) -> Self {
        Self {
            extractor,
            fiscal_year: fiscal_year.map(str::to_string),
            data: FinancialDataSet::new(),
            pending: Vec::new(),
        }
    }

    /// Process one line of user input.
    ///
    /// A blank line completes a buffered table. `done` and `skip` parse any
    /// buffered table before finishing.
    pub fn submit(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.eq_ignore_ascii_case("done") || line.eq_ignore_ascii_case("skip") {
            self.flush();
            return LineOutcome::Finished;
        }
        if line.is_empty() {
            return self.flush().unwrap_or(LineOutcome::Empty);
        }
        if !self.pending.is_empty() || is_table_line(line) {
            self.pending.push(line.to_string());
            return LineOutcome::Buffered;
        }

        self.apply(line)
    }

    /// Whether table rows are waiting for a blank line.
    pub fn is_buffering(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Parse any buffered table rows as one block.
    pub fn flush(&mut self) -> Option<LineOutcome> {
        if self.pending.is_empty() {
            return None;
        }
        let block = self.pending.join("\n");
        self.pending.clear();
        Some(self.apply(&block))
    }

    fn apply(&mut self, text: &str) -> LineOutcome {
        let parsed = self.extractor.extract(text, self.fiscal_year.as_deref());
        if parsed.is_empty() {
            return LineOutcome::Unparsed;
        }

        self.data = FinancialDataSet::merge(&self.data, &parsed);
        debug!(parsed = parsed.len(), total = self.data.len(), "Merged user input");
        LineOutcome::Parsed(parsed)
    }

    /// Data collected so far.
    pub fn data(&self) -> &FinancialDataSet {
        &self.data
    }

    /// Finish and take the collected data, including any buffered table.
    pub fn into_data(mut self) -> FinancialDataSet {
        self.flush();
        self.data
    }
}

/// Run the interactive collection loop.
///
/// Ctrl-C and end of input finish collection with whatever was gathered.
pub fn collect_financial_data(
    extractor: &FinancialDataExtractor,
    fiscal_year: &str,
    config: &Config,
    formatter: &Formatter,
) -> Result<FinancialDataSet> {
    println!();
    println!("Please provide financial data. You can:");
    println!("- Enter data line by line (e.g., 'Revenue: $50B')");
    println!("- Paste a table (markdown or HTML), then press Enter on a blank line");
    println!("- Type 'done' when finished");
    println!("- Type 'skip' to proceed with available data");
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;
    let history_path = Config::history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    let mut collection = DataCollection::new(extractor, Some(fiscal_year));

    loop {
        let prompt = if collection.is_buffering() {
            "... "
        } else {
            "Enter financial data (or 'done'/'skip'): "
        };
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        match collection.submit(&line) {
            LineOutcome::Finished => break,
            LineOutcome::Empty | LineOutcome::Buffered => continue,
            LineOutcome::Parsed(parsed) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                println!("{}", formatter.format_data_set(&parsed)?);
                let keys: Vec<&str> = collection.data().keys().collect();
                println!(
                    "{}",
                    formatter.info(&format!("Total collected: {}", keys.join(", ")))
                );
                println!();
            }
            LineOutcome::Unparsed => {
                println!("{}", formatter.warning(RETRY_HINT));
                println!();
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        editor.save_history(path).ok();
    }

    Ok(collection.into_data())
}
