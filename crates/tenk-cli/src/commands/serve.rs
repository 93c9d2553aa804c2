//! Serve command implementation.

use crate::cli::ServeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tenk_router::start_server;

/// Execute the serve command.
pub async fn execute_serve(args: ServeArgs, config: Config, formatter: &Formatter) -> Result<()> {
    let mut app = config.app;
    if let Some(port) = args.port {
        app.server.bind_port = port;
    }

    println!(
        "{}",
        formatter.info(&format!("Serving on http://{}", app.bind_addr()))
    );
    start_server(app).await?;
    Ok(())
}
