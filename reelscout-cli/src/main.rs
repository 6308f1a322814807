//! Reelscout CLI - Command-line interface
//!
//! Serves the web front-end or runs one-off searches and lookups from the
//! terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use reelscout_core::ReelscoutError;
use reelscout_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(about = "Search the Open Movie Database from the browser or the terminal")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    /// Directory for the per-run trace log
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    let result = commands::handle_command(cli.command).await;
    if let Err(err) = &result {
        if let Some(core) = err.downcast_ref::<ReelscoutError>() {
            if core.is_user_error() {
                eprintln!("{}", core.user_message());
                std::process::exit(2);
            }
        }
    }
    result
}
