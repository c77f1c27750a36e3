//! Configuration management
//!
//! Credentials and endpoints for the upstream services. The loaded value is
//! handed to each adapter constructor; nothing below the command layer reads
//! files or the environment.
//!
//! Precedence, lowest to highest: built-in defaults, config file, environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths;

/// Environment variable holding the VirusTotal API key
pub const ENV_VIRUSTOTAL_API_KEY: &str = "VIRUSTOTAL_API_KEY";
/// Environment variable holding the Keitaro API key
pub const ENV_KEITARO_API_KEY: &str = "KEITARO_API_KEY";
/// Environment variable holding the Keitaro API base URL
pub const ENV_KEITARO_URL: &str = "KEITARO_URL";
/// Environment variable holding the Telegram bot token
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// Default VirusTotal API base URL
pub const DEFAULT_VIRUSTOTAL_URL: &str = "https://www.virustotal.com/api/v3";
/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reputation service
    #[serde(default)]
    pub virustotal: VirusTotalConfig,
    /// Domain-tracking platform
    #[serde(default)]
    pub keitaro: KeitaroConfig,
    /// Chat bot transport
    #[serde(default)]
    pub telegram: TelegramConfig,
    /// Batch scan policy
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Reputation service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirusTotalConfig {
    /// API key; empty selects the offline strategy
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_virustotal_url")]
    pub base_url: String,
}

fn default_virustotal_url() -> String {
    DEFAULT_VIRUSTOTAL_URL.to_string()
}

impl Default for VirusTotalConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_virustotal_url(),
        }
    }
}

impl VirusTotalConfig {
    /// Whether an API key is configured
    #[must_use]
    pub fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Domain-tracking platform settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeitaroConfig {
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// Admin API base URL (e.g. `https://tracker.example/admin_api/v1`)
    #[serde(default)]
    pub base_url: String,
}

impl KeitaroConfig {
    /// Whether a base URL is configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }
}

/// Chat bot transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot token
    #[serde(default)]
    pub bot_token: String,
    /// Bot API base URL
    #[serde(default = "default_telegram_url")]
    pub base_url: String,
    /// Long-poll timeout in seconds
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

fn default_telegram_url() -> String {
    DEFAULT_TELEGRAM_URL.to_string()
}

const fn default_poll_timeout() -> u64 {
    60
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            base_url: default_telegram_url(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

/// Batch scan policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Pause between consecutive checks, in milliseconds
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
    /// Substitute offline verdicts when a live check fails
    #[serde(default)]
    pub fallback_on_error: bool,
}

const fn default_pacing_ms() -> u64 {
    1000
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pacing_ms: default_pacing_ms(),
            fallback_on_error: false,
        }
    }
}

impl ScanConfig {
    /// Pause between consecutive checks
    #[must_use]
    pub const fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load configuration for the CLI
    ///
    /// An explicit path must exist. Without one, the first discovered file is
    /// used, or the defaults when there is none. Environment overrides are
    /// applied last.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let path: Option<PathBuf> = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => paths::discover_config(cwd),
        };

        let mut config = match path {
            Some(p) => {
                log::debug!("loading config from {}", p.display());
                Self::from_file(&p)?
            },
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override settings from environment-style lookups
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_VIRUSTOTAL_API_KEY) {
            self.virustotal.api_key = v;
        }
        if let Some(v) = get(ENV_KEITARO_API_KEY) {
            self.keitaro.api_key = v;
        }
        if let Some(v) = get(ENV_KEITARO_URL) {
            self.keitaro.base_url = v;
        }
        if let Some(v) = get(ENV_TELEGRAM_BOT_TOKEN) {
            self.telegram.bot_token = v;
        }
    }
}
