//! Configuration for the HTTP directory client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for connecting to the employee directory service.
///
/// Fields with defaults can be omitted when loading from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the directory endpoint. All operations are dispatched to
    /// this single URL with an `endpoint` discriminator query parameter.
    base_url: String,
    /// Per-request timeout in seconds.
    /// Default: 10
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl DirectoryConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Sets the per-request timeout in seconds.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the directory base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_default_timeout() {
        let config = DirectoryConfig::new("https://directory.example.com/api");
        assert_eq!(config.base_url(), "https://directory.example.com/api");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = DirectoryConfig::new("https://directory.example.com/api")
            .with_timeout_secs(3);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn deserializes_with_defaulted_timeout() {
        let json = r#"{ "base_url": "https://directory.example.com/api" }"#;
        let config: DirectoryConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = DirectoryConfig::new("https://directory.example.com/api")
            .with_timeout_secs(30);
        let json = serde_json::to_string(&config).expect("serialize");
        let parsed: DirectoryConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.base_url(), config.base_url());
        assert_eq!(parsed.timeout(), config.timeout());
    }
}
