//! Field parsing utilities for feed lines
//!
//! Each helper reads one column of an already-split line and either yields
//! a value, reports the value as legitimately absent (`Ok(None)`), or
//! describes why the text is unusable as a [`ParseIssue`].

use crate::app::models::{FeedField, ParseIssue};
use crate::constants::{MISSING_VALUE, NOT_CALCULATED};

/// Outcome of reading one optional column
pub type FieldResult<T> = std::result::Result<Option<T>, ParseIssue>;

/// Get the raw text of a column, if the line is long enough to have it
pub fn get_field<'a>(fields: &[&'a str], field: FeedField) -> Option<&'a str> {
    fields.get(field.column()).copied()
}

/// Whether the text is the feed's "no value" placeholder
pub fn is_missing_value(raw: &str) -> bool {
    raw.trim() == MISSING_VALUE
}

/// Whether the text carries the "not calculated" marker anywhere
pub fn is_not_calculated(raw: &str) -> bool {
    raw.contains(NOT_CALCULATED)
}

/// Round to one decimal place
///
/// Rounds the exact binary value and breaks exact ties to even, the way
/// `{:.1}` formatting does: `22.45` is stored just below the tie and
/// becomes `22.4`.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Parse decimal text into a finite value rounded to one decimal
pub fn parse_decimal(field: FeedField, raw: &str) -> Result<f64, ParseIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseIssue::malformed_field(field, raw, "empty value"));
    }

    let value = trimmed.parse::<f64>().map_err(|e| {
        ParseIssue::malformed_field(field, raw, format!("not a decimal number ({})", e))
    })?;

    if !value.is_finite() {
        return Err(ParseIssue::malformed_field(field, raw, "value is not finite"));
    }

    Ok(round_one_decimal(value))
}

/// Parse whole-number text; decimal text is rejected rather than truncated
pub fn parse_integer(field: FeedField, raw: &str) -> Result<i32, ParseIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseIssue::malformed_field(field, raw, "empty value"));
    }

    trimmed.parse::<i32>().map_err(|e| {
        ParseIssue::malformed_field(field, raw, format!("not an integer ({})", e))
    })
}

/// Read a decimal column that only uses the missing-value placeholder
pub fn parse_optional_decimal(fields: &[&str], field: FeedField) -> FieldResult<f64> {
    let raw = require_column(fields, field)?;
    if is_missing_value(raw) {
        return Ok(None);
    }
    parse_decimal(field, raw).map(Some)
}

/// Read a decimal column that may also be marked "not calculated"
pub fn parse_optional_derived_decimal(fields: &[&str], field: FeedField) -> FieldResult<f64> {
    let raw = require_column(fields, field)?;
    if is_missing_value(raw) || is_not_calculated(raw) {
        return Ok(None);
    }
    parse_decimal(field, raw).map(Some)
}

/// Read an integer column that may be missing or marked "not calculated"
pub fn parse_optional_derived_integer(fields: &[&str], field: FeedField) -> FieldResult<i32> {
    let raw = require_column(fields, field)?;
    if is_missing_value(raw) || is_not_calculated(raw) {
        return Ok(None);
    }
    parse_integer(field, raw).map(Some)
}

/// Get a column that the record needs, reporting a short line as malformed
pub fn require_column<'a>(fields: &[&'a str], field: FeedField) -> Result<&'a str, ParseIssue> {
    get_field(fields, field).ok_or_else(|| {
        ParseIssue::malformed_field(
            field,
            "",
            format!("line has only {} fields", fields.len()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(22.54), 22.5);
        assert_eq!(round_one_decimal(22.56), 22.6);
        assert_eq!(round_one_decimal(-3.04), -3.0);
        assert_eq!(round_one_decimal(18.0), 18.0);
    }

    #[test]
    fn test_round_one_decimal_uses_exact_binary_value() {
        assert_eq!(round_one_decimal(22.45), 22.4);
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.35), 0.3);
        assert_eq!(round_one_decimal(-0.25), -0.2);
        assert_eq!(parse_decimal(FeedField::Temperature, "22.45"), Ok(22.4));
        assert_eq!(parse_decimal(FeedField::FeelsLike, "0.15"), Ok(0.1));
    }

    #[test]
    fn test_parse_decimal_trims_and_rounds() {
        assert_eq!(parse_decimal(FeedField::Temperature, " 22.46 "), Ok(22.5));
        assert_eq!(parse_decimal(FeedField::Temperature, "-1.2"), Ok(-1.2));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for raw in ["abc", "", "  ", "NaN", "inf", "22,5"] {
            let issue = parse_decimal(FeedField::Temperature, raw).unwrap_err();
            assert_eq!(issue.field(), Some(FeedField::Temperature), "input {:?}", raw);
        }
    }

    #[test]
    fn test_parse_integer_rejects_decimal_text() {
        assert_eq!(parse_integer(FeedField::Humidity, "60"), Ok(60));
        assert!(parse_integer(FeedField::Humidity, "60.5").is_err());
    }

    #[test]
    fn test_sentinels() {
        assert!(is_missing_value("---"));
        assert!(is_missing_value(" --- "));
        assert!(!is_missing_value("----"));
        assert!(is_not_calculated("No se calcula"));
        assert!(is_not_calculated("  No se calcula  "));
        assert!(!is_not_calculated("12.0"));
    }

    #[test]
    fn test_optional_readers() {
        let fields = ["A", "d", "t", "Nublado", "x", "---", "No se calcula", "No se calcula"];
        assert_eq!(parse_optional_decimal(&fields, FeedField::Temperature), Ok(None));
        assert_eq!(parse_optional_derived_decimal(&fields, FeedField::FeelsLike), Ok(None));
        assert_eq!(parse_optional_derived_integer(&fields, FeedField::Humidity), Ok(None));
    }

    #[test]
    fn test_not_calculated_is_malformed_for_plain_decimal() {
        let fields = ["A", "d", "t", "Nublado", "x", "No se calcula"];
        assert!(parse_optional_decimal(&fields, FeedField::Temperature).is_err());
    }

    #[test]
    fn test_short_line_reports_missing_column() {
        let fields = ["A", "d"];
        match parse_optional_decimal(&fields, FeedField::Temperature) {
            Err(ParseIssue::MalformedField { field, reason, .. }) => {
                assert_eq!(field, FeedField::Temperature);
                assert!(reason.contains("2 fields"));
            }
            other => panic!("Expected MalformedField, got {:?}", other),
        }
    }
}
