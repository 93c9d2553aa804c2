//! Tenk Router binary
//!
//! Starts the drafting API over HTTP.

use std::env;
use std::process;
use tenk_router::{config::RouterConfig, init_tracing, start_server, RouterError};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using defaults");
        eprintln!("Usage: tenk-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Tenk Router - SEC 10-K Drafting API");
    println!();
    println!("USAGE:");
    println!("    tenk-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION SECTIONS:");
    println!("    [server]     bind_address, bind_port (default 0.0.0.0:8000)");
    println!("    [llm]        provider (mock|ollama|openai), model, endpoint, temperature");
    println!("    [index]      chunk_size, chunk_overlap, dimension, top_k");
    println!("    [loader]     documents_dir, user_agent, timeout_secs");
    println!("    [drafter]    top_k, questions_top_k");
    println!("    [extractor]  max_input_length");
    println!("    [companies]  TICKER = \"Company Name\"");
    println!();
}
