//! Diagnostic logging
//!
//! Trace output goes to `fintrack.log` in the base directory. The terminal
//! belongs to the CLI output and the TUI, so nothing is logged there.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Environment variable overriding the configured log level
pub const LOG_ENV: &str = "FINTRACK_LOG";

/// Build the filter from `FINTRACK_LOG` or, failing that, `default_level`
pub fn build_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    env_value
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the trace log
pub fn init_logging(paths: &TrackerPaths, default_level: &str) -> TrackerResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.trace_log())
        .map_err(|e| {
            TrackerError::Io(format!(
                "Failed to open log file {}: {}",
                paths.trace_log().display(),
                e
            ))
        })?;

    let env_value = std::env::var(LOG_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env_value.as_deref(), default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TrackerError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(base_dir = %paths.base_dir().display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_wins() {
        let filter = build_filter(Some("debug"), "warn");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_falls_back_to_default_level() {
        assert_eq!(build_filter(None, "warn").to_string(), "warn");
        assert_eq!(build_filter(Some("fintrack=loud"), "error").to_string(), "error");
    }
}
