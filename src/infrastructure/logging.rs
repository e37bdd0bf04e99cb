//! Tracing subscriber setup

use crate::error::{DiaryError, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter: RUST_LOG wins, otherwise `default_level`
pub fn build_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            DiaryError::Config(format!("Invalid log level '{}': {}", default_level, e))
        }),
    }
}

/// Install the global subscriber. Logs go to stderr so the menu on stdout stays clean.
pub fn init(default_level: &str) -> Result<()> {
    let filter = build_filter(default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| DiaryError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        for level in ["warn", "debug", "diary=trace"] {
            assert!(build_filter(level).is_ok(), "{} should parse", level);
        }
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert!(matches!(
            build_filter("diary=verbose"),
            Err(DiaryError::Config(_))
        ));
    }
}
