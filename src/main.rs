//! Binary entry point: resolve configuration, then serve MCP over stdio.

use std::error::Error;
use std::io;

use graylog_mcp::{GraylogConfig, GraylogMcpService};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // stdout carries the MCP transport; diagnostics must go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match GraylogConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    tracing::info!(base_url = %config.base_url, "starting Graylog MCP server");

    let service = GraylogMcpService::new(config);
    let server = service.serve(stdio()).await?;
    server.waiting().await?;
    Ok(())
}
