//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BIZFOLIO_DATA_DIR` - Directory for the file-backed store
//!   (default: `.bizfolio`)
//! - `BIZFOLIO_LATENCY_MS` - Simulated per-operation latency in
//!   milliseconds (default: 0)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".bizfolio";

const DATA_DIR_VAR: &str = "BIZFOLIO_DATA_DIR";
const LATENCY_VAR: &str = "BIZFOLIO_LATENCY_MS";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON slot files.
    pub data_dir: PathBuf,
    /// Simulated latency applied by every service operation.
    pub latency: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `BIZFOLIO_LATENCY_MS` is
    /// set but is not a millisecond count.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(DATA_DIR_VAR).ok(),
            std::env::var(LATENCY_VAR).ok(),
        )
    }

    fn from_vars(
        data_dir: Option<String>,
        latency_ms: Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = data_dir
            .filter(|raw| !raw.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let latency = match latency_ms.filter(|raw| !raw.is_empty()) {
            None => Duration::ZERO,
            Some(raw) => {
                let ms: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar(
                        LATENCY_VAR,
                        format!("expected a millisecond count, got {raw:?}"),
                    )
                })?;
                Duration::from_millis(ms)
            }
        };

        Ok(Self { data_dir, latency })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".bizfolio"));
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_vars(
            Some("/var/lib/bizfolio".to_string()),
            Some("600".to_string()),
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/bizfolio"));
        assert_eq!(config.latency, Duration::from_millis(600));
    }

    #[test]
    fn test_invalid_latency_is_rejected() {
        let err = Config::from_vars(None, Some("soon".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar("BIZFOLIO_LATENCY_MS", _)));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = Config::from_vars(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".bizfolio"));
        assert_eq!(config.latency, Duration::ZERO);
    }
}
