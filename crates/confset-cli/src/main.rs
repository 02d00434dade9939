//! confset CLI
//!
//! Changes a key's value in a configuration file without disturbing the
//! formatting around it.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if cli.add {
        if cli.end_marker.is_some() {
            return Err(CliError::user("--add does not take an end marker"));
        }
        commands::run_add(&cli.file, &cli.key, cli.value.as_deref())
    } else {
        commands::run_set(
            &cli.file,
            &cli.key,
            cli.value.as_deref(),
            cli.end_marker.as_deref(),
        )
    }
}
