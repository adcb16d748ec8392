// server/src/cli/cli.rs

// CLI entry point: parses arguments, installs logging, loads configuration
// and dispatches to the subcommand handlers.
use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::cli::commands::{CliArgs, TriageCommands};
use crate::cli::handlers::{handle_assess, handle_classify, handle_facilities, handle_serve};
use triage_lib::load_triage_config;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // Also forwards `log` records from the library crates.
    let _ = tracing_subscriber::fmt().with_max_level(level).with_target(false).try_init();
}

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = load_triage_config(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        TriageCommands::Serve { host, port } => handle_serve(config, host, port).await,
        TriageCommands::Assess { label, pain, bleeding, swelling, lat, lng } => {
            print!("{}", handle_assess(&config, &label, pain, bleeding, swelling, lat, lng)?);
            Ok(())
        }
        TriageCommands::Facilities { tier, lat, lng } => {
            print!("{}", handle_facilities(&config, &tier, lat, lng)?);
            Ok(())
        }
        TriageCommands::Classify { image } => {
            print!("{}", handle_classify(&config, &image)?);
            Ok(())
        }
    }
}
