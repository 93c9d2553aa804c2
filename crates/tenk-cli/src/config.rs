//! Configuration management for the CLI.
//!
//! The CLI reads the same TOML file as the HTTP shell. An optional
//! `[settings]` table holds presentation preferences.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tenk_router::config::RouterConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Presentation settings
    pub settings: Settings,

    /// Drafting pipeline settings shared with the HTTP shell
    pub app: RouterConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

#[derive(Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: Settings,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Could not find config directory".into()))?;
        Ok(dir.join("tenk").join("config.toml"))
    }

    /// Path of the interactive input history file.
    pub fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("tenk").join("history.txt"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::path()?;
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let app = RouterConfig::from_toml(contents)?;
        let file: SettingsFile = toml::from_str(contents)
            .map_err(|e| CliError::Config(format!("Invalid [settings]: {}", e)))?;

        Ok(Self {
            settings: file.settings,
            app,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tenk_llm::ProviderKind;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.app.companies.len(), 9);
    }

    #[test]
    fn test_settings_and_app_sections() {
        let toml = r#"
            [settings]
            color = false
            format = "json"

            [llm]
            provider = "mock"

            [loader]
            documents_dir = "filings"
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.history_size, 1000);
        assert_eq!(config.app.llm.provider, ProviderKind::Mock);
        assert_eq!(config.app.loader.documents_dir, PathBuf::from("filings"));
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_port = 9100").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.app.server.bind_port, 9100);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
