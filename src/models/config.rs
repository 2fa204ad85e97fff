//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::CabinConfig;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and scheduling behavior settings
    #[serde(default)]
    pub watcher: WatcherConfig,

    /// Snapshot history settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Cabins to monitor, in check order
    #[serde(default = "defaults::default_cabins")]
    pub cabins: Vec<CabinConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    ///
    /// Called at startup, before any fetch; failures are fatal.
    pub fn validate(&self) -> Result<()> {
        if self.watcher.api_base_url.trim().is_empty() {
            return Err(AppError::config("watcher.api_base_url is empty"));
        }
        if self.watcher.user_agent.trim().is_empty() {
            return Err(AppError::config("watcher.user_agent is empty"));
        }
        if self.watcher.timeout_secs == 0 {
            return Err(AppError::config("watcher.timeout_secs must be > 0"));
        }
        if self.watcher.interval_secs == 0 {
            return Err(AppError::config("watcher.interval_secs must be > 0"));
        }
        if !(1..=12).contains(&self.watcher.horizon_month) {
            return Err(AppError::config("watcher.horizon_month must be 1-12"));
        }
        if self.history.dir.trim().is_empty() {
            return Err(AppError::config("history.dir is empty"));
        }
        if self.cabins.is_empty() {
            return Err(AppError::config("No cabins configured"));
        }
        for cabin in &self.cabins {
            cabin.id()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watcher: WatcherConfig::default(),
            history: HistoryConfig::default(),
            cabins: defaults::default_cabins(),
        }
    }
}

/// HTTP client and scheduling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Availability calendar endpoint
    #[serde(default = "defaults::api_base_url")]
    pub api_base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Sleep between batches in watch mode, in seconds
    #[serde(default = "defaults::interval")]
    pub interval_secs: u64,

    /// Availability window runs from today to the 1st of this month next year
    #[serde(default = "defaults::horizon_month")]
    pub horizon_month: u32,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::api_base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            interval_secs: defaults::interval(),
            horizon_month: defaults::horizon_month(),
        }
    }
}

/// Snapshot history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Directory holding per-cabin snapshot files
    #[serde(default = "defaults::history_dir")]
    pub dir: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            dir: defaults::history_dir(),
        }
    }
}

mod defaults {
    use crate::models::CabinConfig;

    // Watcher defaults
    pub fn api_base_url() -> String {
        "https://hyttebestilling.dnt.no/api/booking/availability-calendar".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cabin-watcher/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn interval() -> u64 {
        3600
    }
    pub fn horizon_month() -> u32 {
        11
    }

    // History defaults
    pub fn history_dir() -> String {
        "history".into()
    }

    // Cabin defaults
    pub fn default_cabins() -> Vec<CabinConfig> {
        vec![
            CabinConfig {
                name: "Stallen".to_string(),
                url: "https://hyttebestilling.dnt.no/hytte/101297".to_string(),
                description: "Østmarka – idyllisk ved Røyrivann, kan bestilles som hel hytte."
                    .to_string(),
            },
            CabinConfig {
                name: "Skjennungsvolden".to_string(),
                url: "https://hyttebestilling.dnt.no/hytte/101233402".to_string(),
                description: "Nordmarka – klassisk storstue med utsikt over Skjennungen."
                    .to_string(),
            },
            CabinConfig {
                name: "Fuglemyrhytta".to_string(),
                url: "https://hyttebestilling.dnt.no/hytte/101209".to_string(),
                description: "Nordmarka – moderne DNT-hytte med utsikt over Oslofjorden."
                    .to_string(),
            },
        ]
    }
}
