//! `raa` binary entry point: logging setup and top-level error surfacing.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use review_authenticity_analyzer::cli_app::{self, Cli};
use review_authenticity_analyzer::RaaError;

fn main() {
    // Logs go to stderr so `--json` output on stdout stays machine-readable.
    let filter = EnvFilter::try_from_env("RAA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli_app::run(&cli) {
        Ok(()) => {}
        Err(RaaError::EmptyUrl) => {
            eprintln!(
                "{} Please enter a valid product URL to analyze.",
                "warning:".yellow().bold()
            );
            std::process::exit(2);
        }
        // Single catch-all: any pipeline failure is redisplayed as-is.
        Err(err) => {
            eprintln!("{} An error occurred: {err}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
