//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::io::Read;
use tenk_extractor::FinancialDataExtractor;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let extractor = FinancialDataExtractor::new(config.app.extractor.clone())?;
    let data = extractor.extract(&input, args.fiscal_year.as_deref());

    println!("{}", formatter.format_data_set(&data)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Revenue: $12.5 billion").unwrap();

        let args = ParseArgs {
            fiscal_year: None,
            file: Some(file.path().to_path_buf()),
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        assert!(execute_parse(args, &Config::default(), &formatter).is_ok());
    }

    #[test]
    fn test_missing_file_is_error() {
        let args = ParseArgs {
            fiscal_year: None,
            file: Some("/nonexistent/input.txt".into()),
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(execute_parse(args, &Config::default(), &formatter).is_err());
    }
}
