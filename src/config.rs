//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI layer.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_DATASET, DEFAULT_FEED_BASE_URL,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_STATION,
};
use crate::error::{FeedError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where and how to download the feed
    pub feed: FeedConfig,

    /// Station selected for display
    pub station: StationConfig,

    /// Poll loop timing
    pub poll: PollConfig,
}

/// Feed endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Endpoint prefix; the dataset id is appended without a separator
    pub base_url: String,

    /// Dataset id requested from the endpoint
    pub dataset: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Station name exactly as it appears in the feed's first column
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds to wait between cycles
    pub interval_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_BASE_URL.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_STATION.to_string(),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

impl FeedConfig {
    /// Full download URL: `base_url + dataset`
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.dataset)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Default config file location (`<config dir>/smn-weather/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            FeedError::configuration("Could not determine the user configuration directory")
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a configuration file, filling unspecified keys with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FeedError::configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FeedError::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| FeedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults, then the given file, or the default file if it exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.feed.base_url.trim().is_empty() {
            return Err(FeedError::configuration("feed.base_url must not be empty"));
        }
        if self.feed.dataset.trim().is_empty() {
            return Err(FeedError::configuration("feed.dataset must not be empty"));
        }
        if self.feed.timeout_secs == 0 {
            return Err(FeedError::configuration(
                "feed.timeout_secs must be greater than zero",
            ));
        }
        if self.station.name.trim().is_empty() {
            return Err(FeedError::configuration("station.name must not be empty"));
        }
        if self.poll.interval_secs == 0 {
            return Err(FeedError::configuration(
                "poll.interval_secs must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Full download URL for the configured dataset
    pub fn feed_url(&self) -> String {
        self.feed.url()
    }

    pub fn with_station(mut self, name: impl Into<String>) -> Self {
        self.station.name = name.into();
        self
    }

    pub fn with_interval_secs(mut self, secs: u64) -> Self {
        self.poll.interval_secs = secs;
        self
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.feed.dataset = dataset.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.feed.base_url = base_url.into();
        self
    }
}
