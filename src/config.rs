//! Client configuration
//!
//! Settings can come from code (builder), a YAML file, or the environment.
//!
//! ```yaml
//! base_url: http://demo.ubilling.net.ua:9999/billing/userstats
//! timeout_secs: 5
//! uber_key: 0123456789abcdef0123456789abcdef
//! ```

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the userstats URL
pub const ENV_URL: &str = "UBILLING_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "UBILLING_TIMEOUT";
/// Environment variable holding the extended-auth key
pub const ENV_UBER_KEY: &str = "UBILLING_UBER_KEY";

/// Connection settings for an XMLAgent server
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Userstats URL, e.g. `http://host/billing/userstats`
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// MD5 of the Ubilling serial, required when extended auth is enabled
    #[serde(default)]
    pub uber_key: Option<String>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_user_agent() -> String {
    format!("ubilling-xmlagent/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
            uber_key: None,
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("uber_key", &self.uber_key.as_ref().map(|_| "***"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse client config YAML: {e}")))?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Apply `UBILLING_*` environment overrides
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test fixtures)
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_URL).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT).and_then(|v| v.parse().ok()) {
            self.timeout_secs = timeout;
        }
        if let Some(key) = lookup(ENV_UBER_KEY).filter(|v| !v.is_empty()) {
            self.uber_key = Some(key);
        }
        self
    }

    /// Request timeout as a `Duration`
    ///
    /// Fails for zero, negative, non-finite, or out-of-range values.
    pub fn timeout(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.timeout_secs)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .ok_or_else(|| {
                Error::config(format!(
                    "timeout_secs must be a positive number of seconds, got: {}",
                    self.timeout_secs
                ))
            })
    }

    /// Check the URL and timeout, returning the parsed URL
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must use http or https scheme, got: '{}'",
                url.scheme()
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::config("base_url must contain a valid host"));
        }

        self.timeout()?;

        Ok(url)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs_f64();
        self
    }

    /// Set the extended-auth key
    pub fn uber_key(mut self, key: impl Into<String>) -> Self {
        self.config.uber_key = Some(key.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
