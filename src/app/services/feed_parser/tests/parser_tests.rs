//! Tests for feed-level parsing

use super::{create_test_feed, feed_line};
use crate::app::models::{FeedField, ParseIssue, WeatherCode};
use crate::app::services::feed_parser::{FeedParser, parse_feed, strip_line};

#[test]
fn test_strip_line_drops_suffix_after_trimming() {
    assert_eq!(strip_line("  A;b;c /  \r"), "A;b;c");
    assert_eq!(strip_line("A;b;XX"), "A;b;");
    assert_eq!(strip_line("ab"), "");
    assert_eq!(strip_line("a"), "");
    assert_eq!(strip_line(""), "");
}

#[test]
fn test_strip_line_counts_characters_not_bytes() {
    assert_eq!(strip_line("Añelo;éé"), "Añelo;");
}

#[test]
fn test_parse_test_feed() {
    let result = FeedParser::new().parse_text(&create_test_feed());

    assert_eq!(result.snapshot.len(), 4);
    assert!(result.warnings.is_empty());

    let names: Vec<&str> = result.snapshot.station_names().collect();
    assert_eq!(names, vec!["Aeroparque", "Buenos Aires", "Mendoza", "Ushuaia"]);

    let aeroparque = result.snapshot.get("Aeroparque").unwrap();
    assert_eq!(aeroparque.feels_like_c, Some(19.4));
    assert_eq!(aeroparque.weather_code, WeatherCode::Cloudy);

    let mendoza = result.snapshot.get("Mendoza").unwrap();
    assert_eq!(mendoza.temperature_c, None);
    assert_eq!(mendoza.weather_code, WeatherCode::Unknown);

    let ushuaia = result.snapshot.get("Ushuaia").unwrap();
    assert_eq!(ushuaia.temperature_c, Some(-1.4));
    assert_eq!(ushuaia.weather_code, WeatherCode::Snow);
}

#[test]
fn test_reference_line_through_feed_parser() {
    let result = parse_feed(["Buenos Aires;01/01/2024;1200;Despejado;0;22.5;21.0;60;XX"]);

    let record = result.snapshot.get("Buenos Aires").unwrap();
    assert_eq!(record.temperature_c, Some(22.5));
    assert_eq!(record.feels_like_c, Some(21.0));
    assert_eq!(record.humidity_pct, Some(60));
    assert_eq!(record.weather_description, "Despejado");
    assert_eq!(record.weather_code, WeatherCode::Sunny);
    assert_eq!(record.last_updated, "01/01/2024 1200");
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_input_gives_empty_snapshot() {
    let result = parse_feed(Vec::<String>::new());

    assert!(result.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_parsing_is_idempotent() {
    let feed = create_test_feed();
    let parser = FeedParser::new();
    assert_eq!(parser.parse_text(&feed), parser.parse_text(&feed));
}

#[test]
fn test_last_line_wins_for_repeated_station() {
    let lines = vec![
        feed_line("Rosario", "18-Oct-2026", "09:00", "Nublado", "15.0", "14.0", "80"),
        feed_line("Salta", "18-Oct-2026", "09:00", "Despejado", "12.0", "12.0", "40"),
        feed_line("Rosario", "18-Oct-2026", "10:00", "Despejado", "17.5", "17.0", "70"),
    ];
    let result = parse_feed(&lines);

    assert_eq!(result.snapshot.len(), 2);
    assert_eq!(result.stats.duplicates_replaced, 1);

    let rosario = result.snapshot.get("Rosario").unwrap();
    assert_eq!(rosario.temperature_c, Some(17.5));
    assert_eq!(rosario.humidity_pct, Some(70));
    assert_eq!(rosario.last_updated, "18-Oct-2026 10:00");
    assert_eq!(rosario.weather_code, WeatherCode::Sunny);
}

#[test]
fn test_malformed_temperature_yields_one_warning() {
    let lines = [feed_line("Rosario", "d", "t", "Nublado", "abc", "No se calcula", "80")];
    let result = parse_feed(lines);

    let rosario = result.snapshot.get("Rosario").unwrap();
    assert_eq!(rosario.temperature_c, None);
    assert_eq!(rosario.feels_like_c, None);

    assert_eq!(result.warnings.len(), 1);
    let warning = &result.warnings[0];
    assert_eq!(warning.line, 1);
    assert_eq!(warning.station.as_deref(), Some("Rosario"));
    assert_eq!(warning.issue.field(), Some(FeedField::Temperature));
}

#[test]
fn test_blank_lines_are_skipped_silently() {
    let lines = vec![
        String::new(),
        "   ".to_string(),
        " /".to_string(),
        feed_line("Salta", "d", "t", "Despejado", "12.0", "12.0", "40"),
        "\r".to_string(),
    ];
    let result = parse_feed(&lines);

    assert_eq!(result.snapshot.len(), 1);
    assert!(result.warnings.is_empty());
    assert_eq!(result.stats.total_lines, 5);
    assert_eq!(result.stats.blank_lines, 4);
    assert_eq!(result.stats.records_parsed, 1);
}

#[test]
fn test_line_without_station_is_skipped_with_warning() {
    let lines = vec![
        ";d;t;Nublado;0;20.0;19.0;55 /".to_string(),
        feed_line("Salta", "d", "t", "Despejado", "12.0", "12.0", "40"),
    ];
    let result = parse_feed(&lines);

    assert_eq!(result.snapshot.len(), 1);
    assert!(!result.snapshot.contains(""));
    assert_eq!(result.stats.lines_skipped, 1);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].line, 1);
    assert_eq!(result.warnings[0].station, None);
    assert!(matches!(
        result.warnings[0].issue,
        ParseIssue::MalformedLine { .. }
    ));
}

#[test]
fn test_warning_line_numbers_count_blank_lines() {
    let lines = vec![
        String::new(),
        feed_line("Salta", "d", "t", "Despejado", "x", "12.0", "40"),
    ];
    let result = parse_feed(&lines);
    assert_eq!(result.warnings[0].line, 2);
}
