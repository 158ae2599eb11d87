//! Tests for parse statistics

use super::feed_line;
use crate::app::services::feed_parser::{ParseStats, parse_feed};

#[test]
fn test_new_stats_are_zero() {
    let stats = ParseStats::new();
    assert_eq!(stats, ParseStats::default());
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_success_rate_ignores_blank_lines() {
    let lines = vec![
        feed_line("Salta", "d", "t", "Despejado", "12.0", "12.0", "40"),
        String::new(),
        ";;;;;;;; /".to_string(),
    ];
    let stats = parse_feed(&lines).stats;

    assert_eq!(stats.total_lines, 3);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.lines_skipped, 1);
    assert_eq!(stats.success_rate(), 50.0);
}
