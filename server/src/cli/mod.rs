// server/src/cli/mod.rs

pub mod cli;
pub mod commands;
pub mod handlers;

pub use cli::start_cli;
pub use commands::{CliArgs, TriageCommands};
pub use handlers::{
    format_assessment, format_classification, format_facilities, handle_assess, handle_classify,
    handle_facilities, handle_serve,
};
