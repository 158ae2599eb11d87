//! Error handling for feed retrieval, configuration and snippet output.
//!
//! Parse-level anomalies (bad numeric text, lines without a station name)
//! are not errors: they travel as [`crate::app::models::ParseWarning`]
//! values alongside the parsed snapshot.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed download failed with status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Feed archive could not be read: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Feed archive from {url} contains no entries")]
    EmptyArchive { url: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file {}: {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Station '{station}' not present in feed")]
    StationNotFound { station: String },

    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },
}

impl FeedError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn station_not_found(station: impl Into<String>) -> Self {
        Self::StationNotFound {
            station: station.into(),
        }
    }

    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for FeedError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
