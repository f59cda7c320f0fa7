// Logging setup
// The terminal belongs to the UI, so log output only ever goes to a file

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Install a file-backed subscriber filtered by RUST_LOG
/// Returns false when no log file is configured (nothing is installed)
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_installs_nothing() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let err = init(Some(Path::new("/nonexistent/dir/app.log"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/app.log"));
    }
}
