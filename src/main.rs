//! Tally CLI entrypoint for the review participation report.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TALLY_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Sends diagnostics to stderr so stdout carries only CSV.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
