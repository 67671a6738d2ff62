//! Report operation: pick a snapshot source, tally it, print CSV.

use std::io::{self, BufWriter};

use ortho_config::OrthoConfig;
use tally::{IntakeError, TallyConfig, build_report, configured_source, write_csv};
use tracing::debug;

/// Runs one report.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or is invalid
/// - No cache exists and the token is missing
/// - The GitHub API call fails
/// - The cache cannot be read or written
/// - Writing to stdout fails
pub async fn run() -> Result<(), IntakeError> {
    let config = load_config()?;
    debug!(cache = %config.cache_path(), "resolved configuration");
    let source = configured_source(&config)?;

    let grid = build_report(source.as_ref()).await?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_csv(&mut stdout, &grid)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TallyConfig, IntakeError> {
    TallyConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}
