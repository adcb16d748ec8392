// server/src/main.rs

// Entry point for the triage CLI and REST server.
use anyhow::Result;
use triage_server::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    start_cli().await
}
