//! Structured logging setup
//!
//! One subscriber per process, installed by `init_logging`:
//! - JSON lines (one log line = one event) or human-readable output
//! - `RUST_LOG` overrides the configured filter

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable, for terminals
    Pretty,
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_logging(default_filter: &str, format: LogFormat) -> ObservabilityResult<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), default_filter)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| ObservabilityError::new(format!("failed to install logger: {}", e)))
}

/// `env` wins when it parses; otherwise `default_filter` must.
fn build_filter(env: Option<&str>, default_filter: &str) -> ObservabilityResult<EnvFilter> {
    if let Some(filter) = env.and_then(|e| EnvFilter::try_new(e).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(default_filter).map_err(|e| {
        ObservabilityError::new(format!("invalid log filter '{}': {}", default_filter, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_used_without_env() {
        let filter = build_filter(None, "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_overrides_default() {
        let filter = build_filter(Some("warn"), "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_default_filter() {
        let err = build_filter(None, "library_api=loudest").unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn test_log_format_deserialize() {
        let format: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, LogFormat::Pretty);
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }
}
