//! Parser for the SMN "current weather per station" feed
//!
//! The feed is a semicolon-delimited text file with one line per station
//! and a fixed column order. Missing readings appear as `---` and derived
//! readings the producer skipped as `No se calcula`. Parsing never fails:
//! unusable fields become absent and are reported as warnings.
//!
//! ## Architecture
//!
//! - [`parser`] - Line normalisation and snapshot assembly
//! - [`record_parser`] - One line into one [`StationRecord`]
//! - [`field_parsers`] - Column readers and sentinel rules
//! - [`weather_codes`] - Description to weather-code table
//! - [`stats`] - Parse result and counters
//!
//! ## Usage
//!
//! ```rust
//! use smn_weather::app::services::feed_parser::FeedParser;
//!
//! let result = FeedParser::new()
//!     .parse_text("Buenos Aires;18-Oct-2026;10:00;Despejado;10 km;22.5;21.0;60;Norte 9;1015.2 /\n");
//!
//! let record = result.snapshot.get("Buenos Aires").unwrap();
//! assert_eq!(record.temperature_c, Some(22.5));
//! assert!(result.warnings.is_empty());
//! ```
//!
//! [`StationRecord`]: crate::app::models::StationRecord

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod weather_codes;

#[cfg(test)]
pub mod tests;

pub use parser::{FeedParser, parse_feed, strip_line};
pub use record_parser::{ParsedRecord, parse_record_line, parse_station_record};
pub use stats::{ParseResult, ParseStats};
