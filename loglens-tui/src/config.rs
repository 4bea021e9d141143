//! Client configuration
//!
//! Defines all configurable parameters for the terminal client including
//! the service URL, pagination defaults, and timing settings.

use std::path::PathBuf;
use std::time::Duration;

/// Terminal client configuration
///
/// Timeouts and delays are configurable to allow tuning for different
/// deployments (local dev service vs a slow remote one).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the log-analysis service (e.g., "http://localhost:8000")
    pub service_url: String,

    /// Records per page at startup
    pub page_size: u32,

    /// How long to wait after a successful analysis trigger before
    /// reloading the first page
    pub refresh_delay: Duration,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Where to write tracing output; the terminal itself is the UI,
    /// so logs never go to stdout
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            page_size: 10,
            refresh_delay: Duration::from_secs(3),
            request_timeout: Duration::from_secs(30),
            log_file: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.service_url.is_empty() {
            anyhow::bail!("service_url cannot be empty");
        }

        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            anyhow::bail!("service_url must start with http:// or https://");
        }

        // The service rejects page_size outside 1..=100
        if self.page_size == 0 || self.page_size > 100 {
            anyhow::bail!("page_size must be between 1 and 100");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.refresh_delay, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty URL should fail
        config.service_url = String::new();
        assert!(config.validate().is_err());

        // Non-HTTP URL should fail
        config.service_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.service_url = "http://localhost:8000".to_string();
        assert!(config.validate().is_ok());

        // Page size outside the service's accepted range should fail
        config.page_size = 0;
        assert!(config.validate().is_err());
        config.page_size = 101;
        assert!(config.validate().is_err());
        config.page_size = 100;
        assert!(config.validate().is_ok());
    }
}
