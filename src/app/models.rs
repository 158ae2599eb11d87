//! Data models for the SMN station feed
//!
//! This module contains the per-station record produced from one feed line,
//! the snapshot that collects every record from one download, and the
//! warnings raised while parsing.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::constants::columns;

// =============================================================================
// Weather Code
// =============================================================================

/// Symbolic weather category shown next to the station readings
///
/// Each variant renders as one emoji glyph. `Unknown` covers every
/// description that has no entry in the description table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCode {
    Sunny,
    MostlySunny,
    PartlyCloudy,
    MostlyCloudy,
    Cloudy,
    Tornado,
    Fog,
    Showers,
    Thunderstorm,
    Lightning,
    Rain,
    RainAndSnow,
    Snow,
    Mist,
    Windy,
    #[default]
    Unknown,
}

impl WeatherCode {
    /// Emoji glyph for compact display
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sunny => "\u{2600}\u{fe0f}",
            Self::MostlySunny => "\u{1f324}\u{fe0f}",
            Self::PartlyCloudy => "\u{26c5}",
            Self::MostlyCloudy => "\u{1f325}\u{fe0f}",
            Self::Cloudy => "\u{2601}\u{fe0f}",
            Self::Tornado => "\u{1f32a}\u{fe0f}",
            Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Showers => "\u{1f326}\u{fe0f}",
            Self::Thunderstorm => "\u{26c8}\u{fe0f}",
            Self::Lightning => "\u{1f329}\u{fe0f}",
            Self::Rain => "\u{1f327}\u{fe0f}",
            Self::RainAndSnow => "\u{1f328}\u{fe0f}",
            Self::Snow => "\u{2744}\u{fe0f}",
            Self::Mist => "\u{1f301}",
            Self::Windy => "\u{1f32c}\u{fe0f}",
            Self::Unknown => "\u{2753}",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// =============================================================================
// Station Record
// =============================================================================

/// Readings for one station taken from one feed line
///
/// Records carry no identity across downloads: each poll cycle builds a
/// fresh set and discards the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station name exactly as given in the first column
    pub station_name: String,

    /// Air temperature in °C, rounded to one decimal
    pub temperature_c: Option<f64>,

    /// Apparent temperature in °C, rounded to one decimal; falls back to
    /// `temperature_c` whenever the feed does not provide a usable value
    pub feels_like_c: Option<f64>,

    /// Relative humidity in percent
    pub humidity_pct: Option<i32>,

    /// Free-text sky state, or the "unavailable" label
    pub weather_description: String,

    /// Symbol derived from `weather_description`
    pub weather_code: WeatherCode,

    /// Observation date and time tokens joined by a single space
    pub last_updated: String,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Every station record parsed from one feed download
///
/// Keeps feed order. Inserting a station that is already present replaces
/// its record in place, so the last line for a name wins while the
/// station keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<StationRecord>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: StationRecord) -> Option<StationRecord> {
        match self.index.get(&record.station_name) {
            Some(&position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index
                    .insert(record.station_name.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a station by its exact feed name
    pub fn get(&self, station_name: &str) -> Option<&StationRecord> {
        self.index
            .get(station_name)
            .map(|&position| &self.records[position])
    }

    pub fn contains(&self, station_name: &str) -> bool {
        self.index.contains_key(station_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in feed order
    pub fn iter(&self) -> impl Iterator<Item = &StationRecord> {
        self.records.iter()
    }

    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.station_name.as_str())
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.station_name, record)?;
        }
        map.end()
    }
}

// =============================================================================
// Parse Warnings
// =============================================================================

/// Feed columns the parser reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedField {
    StationName,
    Date,
    Time,
    WeatherDescription,
    Temperature,
    FeelsLike,
    Humidity,
}

impl FeedField {
    /// Zero-based position within a split line
    pub fn column(&self) -> usize {
        match self {
            Self::StationName => columns::STATION,
            Self::Date => columns::DATE,
            Self::Time => columns::TIME,
            Self::WeatherDescription => columns::WEATHER,
            Self::Temperature => columns::TEMPERATURE,
            Self::FeelsLike => columns::FEELS_LIKE,
            Self::Humidity => columns::HUMIDITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::StationName => "station name",
            Self::Date => "date",
            Self::Time => "time",
            Self::WeatherDescription => "weather description",
            Self::Temperature => "temperature",
            Self::FeelsLike => "feels-like temperature",
            Self::Humidity => "humidity",
        }
    }
}

impl fmt::Display for FeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (column {})", self.name(), self.column())
    }
}

/// A problem found in one line that did not stop the parse
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    /// One field could not be used; the record keeps it as absent
    #[error("malformed {field} value '{raw}': {reason}")]
    MalformedField {
        field: FeedField,
        raw: String,
        reason: String,
    },

    /// The line could not produce a record and was skipped
    #[error("malformed line: {reason}")]
    MalformedLine { reason: String },
}

impl ParseIssue {
    pub fn malformed_field(
        field: FeedField,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field,
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_line(reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            reason: reason.into(),
        }
    }

    /// Column the issue refers to, if it is field-specific
    pub fn field(&self) -> Option<FeedField> {
        match self {
            Self::MalformedField { field, .. } => Some(*field),
            Self::MalformedLine { .. } => None,
        }
    }
}

/// A parse issue located in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// One-based line number within the feed
    pub line: usize,

    /// Station the line belongs to, when the name could be read
    pub station: Option<String>,

    pub issue: ParseIssue,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.station {
            Some(station) => write!(f, "line {} ({}): {}", self.line, station, self.issue),
            None => write!(f, "line {}: {}", self.line, self.issue),
        }
    }
}
