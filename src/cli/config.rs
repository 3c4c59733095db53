//! Configuration file
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 3000, "cors_origins": [] },
//!   "search": { "pattern_mode": "literal" },
//!   "log_filter": "info",
//!   "log_format": "json"
//! }
//! ```
//!
//! Every key is optional. A missing file path means all defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::SearchMode;

use super::errors::{CliError, CliResult};

/// Text search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How `findBy*` fragments are interpreted (default: literal)
    #[serde(default)]
    pub pattern_mode: SearchMode,
}

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub search: SearchConfig,

    /// Default log filter, `RUST_LOG` wins when set (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            search: SearchConfig::default(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when `None`
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CliError::config_error(format!("Invalid config {}: {}", path.display(), e))
        })
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        log_format: Option<LogFormat>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.search.pattern_mode, SearchMode::Literal);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_empty_object_is_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"database_url": "x"}"#).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(
            Some("127.0.0.1".to_string()),
            Some(9000),
            Some(LogFormat::Pretty),
        );
        assert_eq!(config.server.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Some(Path::new("/nonexistent/library.json"))).unwrap_err();
        assert!(err.to_string().starts_with("LIBRARY_CLI_CONFIG_ERROR"));
    }
}
