//! Run configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line flags (which themselves fall back to `SITESMOKE_*` environment
//! variables).
//!
//! ```yaml
//! site_name: Eximatic
//! base_url: http://localhost:8000
//! timeout_secs: 10
//! delay_ms: 500
//! ```

use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default site name shown in the banner
pub const DEFAULT_SITE_NAME: &str = "Eximatic";

/// Default server the pages are fetched from
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default pause between pages (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Default number of issues printed per page
pub const DEFAULT_MAX_ISSUES_SHOWN: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Name printed in the run banner
    pub site_name: String,

    /// Base URL the relative page paths are joined to
    pub base_url: String,

    /// User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Pause between consecutive pages in milliseconds
    pub delay_ms: u64,

    /// How many issues to print per page before truncating
    pub max_issues_shown: usize,
}

/// The subset of the config the HTTP fetcher needs
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout: Duration,
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub delay_ms: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            delay_ms: DEFAULT_DELAY_MS,
            max_issues_shown: DEFAULT_MAX_ISSUES_SHOWN,
        }
    }
}

impl SmokeConfig {
    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SmokeConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults, then apply
    /// overrides and validate.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(base_url) = &overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(user_agent) = &overrides.user_agent {
            self.user_agent = user_agent.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than zero".to_string()));
        }
        if self.max_issues_shown == 0 {
            return Err(
                ConfigError::Invalid("max_issues_shown must be greater than zero".to_string())
            );
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout(),
        }
    }
}
