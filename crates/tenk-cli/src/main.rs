//! Tenk CLI - Draft SEC 10-K sections from a prior-year filing.

use clap::Parser;
use tenk_cli::commands;
use tenk_cli::{Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    tenk_router::init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> tenk_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Draft(args) => commands::execute_draft(args, &config, &formatter).await?,
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter)?,
        Command::Index(args) => commands::execute_index(args, &config, &formatter).await?,
        Command::Serve(args) => commands::execute_serve(args, config, &formatter).await?,
    }

    Ok(())
}
