//! Display snippets for the selected station
//!
//! Renders the five short text artifacts consumed by an on-screen overlay
//! (temperature, feels-like, humidity, weather glyph, last update) and
//! writes each one to its own file, replacing the previous contents.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::app::models::StationRecord;
use crate::constants::{LAST_UPDATED_PREFIX, UNAVAILABLE_LABEL, artifacts};
use crate::error::{FeedError, Result};

/// Rendered text for each display artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSnippets {
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub weather_code: String,
    pub last_updated: String,
}

impl StationSnippets {
    pub fn from_record(record: &StationRecord) -> Self {
        let unavailable = format!(" {} ", UNAVAILABLE_LABEL);

        Self {
            temperature: record
                .temperature_c
                .map(|t| format!(" {:.1}° ", t))
                .unwrap_or_else(|| unavailable.clone()),
            feels_like: record
                .feels_like_c
                .map(|t| format!(" ST {:.1}° ", t))
                .unwrap_or_else(|| unavailable.clone()),
            humidity: record
                .humidity_pct
                .map(|h| format!(" H {}% ", h))
                .unwrap_or(unavailable),
            weather_code: record.weather_code.glyph().to_string(),
            last_updated: format!(" {} {}", LAST_UPDATED_PREFIX, record.last_updated),
        }
    }

    /// Artifact file prefixes paired with their contents
    pub fn artifacts(&self) -> [(&'static str, &str); 5] {
        [
            (artifacts::TEMPERATURE, self.temperature.as_str()),
            (artifacts::FEELS_LIKE, self.feels_like.as_str()),
            (artifacts::HUMIDITY, self.humidity.as_str()),
            (artifacts::WEATHER_CODE, self.weather_code.as_str()),
            (artifacts::LAST_UPDATED, self.last_updated.as_str()),
        ]
    }
}

/// File-name form of a station name: lower case, non-alphanumerics as `_`
pub fn station_slug(station: &str) -> String {
    station
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Writes the snippets of one station into a directory
#[derive(Debug, Clone)]
pub struct SnippetWriter {
    output_dir: PathBuf,
    slug: String,
}

impl SnippetWriter {
    pub fn new(output_dir: impl Into<PathBuf>, station: &str) -> Self {
        Self {
            output_dir: output_dir.into(),
            slug: station_slug(station),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the artifact with the given prefix, e.g. `humedad_buenos_aires.txt`
    pub fn artifact_path(&self, prefix: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}.txt", prefix, self.slug))
    }

    /// Write every artifact, returning the paths written
    pub async fn write(&self, snippets: &StationSnippets) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(5);

        for (prefix, contents) in snippets.artifacts() {
            let path = self.artifact_path(prefix);
            fs::write(&path, contents).await.map_err(|e| {
                FeedError::io(format!("Failed to write {}", path.display()), e)
            })?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
