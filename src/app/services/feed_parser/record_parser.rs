//! Individual station line parsing
//!
//! Turns the fields of one feed line into a [`StationRecord`]. Only the
//! station name is required; every other column degrades to an absent or
//! default value, reporting a [`ParseIssue`] when the text was unusable.

use super::field_parsers::{
    get_field, is_missing_value, parse_optional_decimal, parse_optional_derived_decimal,
    parse_optional_derived_integer, require_column,
};
use super::weather_codes;
use crate::app::models::{FeedField, ParseIssue, StationRecord};
use crate::constants::{FIELD_DELIMITER, UNAVAILABLE_LABEL};

/// A record together with the field-level issues found while building it
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub record: StationRecord,
    pub issues: Vec<ParseIssue>,
}

/// Split one line on the field delimiter and parse it
pub fn parse_record_line(line: &str) -> Result<ParsedRecord, ParseIssue> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    parse_station_record(&fields)
}

/// Parse the fields of one line into a station record
///
/// Returns `Err` with a `MalformedLine` issue only when the line has no
/// station name; such a line cannot be keyed and must be skipped.
pub fn parse_station_record(fields: &[&str]) -> Result<ParsedRecord, ParseIssue> {
    let station_name = get_field(fields, FeedField::StationName).unwrap_or_default();
    if station_name.trim().is_empty() {
        return Err(ParseIssue::malformed_line("missing station name"));
    }

    let mut issues = Vec::new();

    let temperature_c = parse_optional_decimal(fields, FeedField::Temperature)
        .unwrap_or_else(|issue| {
            issues.push(issue);
            None
        });

    let feels_like_c = parse_optional_derived_decimal(fields, FeedField::FeelsLike)
        .unwrap_or_else(|issue| {
            issues.push(issue);
            None
        })
        .or(temperature_c);

    let humidity_pct = parse_optional_derived_integer(fields, FeedField::Humidity)
        .unwrap_or_else(|issue| {
            issues.push(issue);
            None
        });

    let weather_description = parse_weather_description(fields);
    let weather_code = weather_codes::lookup(&weather_description);

    let date = require_column(fields, FeedField::Date).unwrap_or_else(|issue| {
        issues.push(issue);
        ""
    });
    let time = require_column(fields, FeedField::Time).unwrap_or_else(|issue| {
        issues.push(issue);
        ""
    });
    let last_updated = format!("{} {}", date, time);

    Ok(ParsedRecord {
        record: StationRecord {
            station_name: station_name.to_string(),
            temperature_c,
            feels_like_c,
            humidity_pct,
            weather_description,
            weather_code,
            last_updated,
        },
        issues,
    })
}

/// Sky-state text, or the unavailable label when missing, blank or a placeholder
pub fn parse_weather_description(fields: &[&str]) -> String {
    get_field(fields, FeedField::WeatherDescription)
        .map(str::trim)
        .filter(|raw| !raw.is_empty() && !is_missing_value(raw))
        .unwrap_or(UNAVAILABLE_LABEL)
        .to_string()
}
