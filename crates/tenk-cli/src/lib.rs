//! Tenk CLI library.
//!
//! Command-line front end for drafting 10-K sections: argument parsing,
//! configuration, command execution, interactive data collection, and
//! output formatting.

pub mod cli;
pub mod collect;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
