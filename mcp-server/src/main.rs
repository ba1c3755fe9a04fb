//! Nova MCP Server
//!
//! Exposes the Nova transcript analyzers to AI assistants over stdio:
//! - Checking whether a transcript is on topic
//! - Identifying the ceremony being held
//! - Listing the anti-patterns to coach on

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::NovaServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Nova MCP server");

    let server = NovaServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    service.waiting().await?;

    Ok(())
}
