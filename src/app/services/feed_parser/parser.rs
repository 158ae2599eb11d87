//! Feed-level parsing orchestration
//!
//! Normalises each raw feed line (outer whitespace and the fixed line
//! suffix removed), hands it to the record parser and collects the results
//! into a [`Snapshot`].

use tracing::{debug, warn};

use super::record_parser::parse_record_line;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{ParseWarning, Snapshot};
use crate::constants::LINE_SUFFIX_LEN;

/// Parser for the station feed
///
/// Stateless: every call builds its own snapshot, so one parser can be
/// shared freely between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole decoded feed
    pub fn parse_text(&self, text: &str) -> ParseResult {
        self.parse_lines(text.lines())
    }

    /// Parse a sequence of raw feed lines
    ///
    /// Later lines replace earlier ones for the same station. Lines that
    /// are empty after normalisation are skipped without a warning.
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut snapshot = Snapshot::new();
        let mut warnings = Vec::new();
        let mut stats = ParseStats::new();

        for (index, raw) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            stats.total_lines += 1;

            let content = strip_line(raw.as_ref());
            if content.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match parse_record_line(content) {
                Ok(parsed) => {
                    let station = parsed.record.station_name.clone();
                    for issue in parsed.issues {
                        warnings.push(ParseWarning {
                            line: line_number,
                            station: Some(station.clone()),
                            issue,
                        });
                    }

                    if snapshot.insert(parsed.record).is_some() {
                        debug!(
                            "Station '{}' repeated on line {}, keeping the later values",
                            station, line_number
                        );
                        stats.duplicates_replaced += 1;
                    }
                    stats.records_parsed += 1;
                }
                Err(issue) => {
                    stats.lines_skipped += 1;
                    warnings.push(ParseWarning {
                        line: line_number,
                        station: None,
                        issue,
                    });
                }
            }
        }

        for warning in &warnings {
            warn!(
                line = warning.line,
                station = warning.station.as_deref().unwrap_or("-"),
                field = warning.issue.field().map(|f| f.name()).unwrap_or("-"),
                "{}",
                warning.issue
            );
        }

        debug!(
            "Parsed {} records from {} lines ({} blank, {} skipped)",
            stats.records_parsed, stats.total_lines, stats.blank_lines, stats.lines_skipped
        );

        ParseResult {
            snapshot,
            warnings,
            stats,
        }
    }
}

/// Trim a raw line and drop its fixed-length suffix
///
/// Lines shorter than the suffix become empty.
pub fn strip_line(raw: &str) -> &str {
    let trimmed = raw.trim();
    let cut = trimmed
        .char_indices()
        .rev()
        .nth(LINE_SUFFIX_LEN - 1)
        .map(|(position, _)| position)
        .unwrap_or(0);
    &trimmed[..cut]
}

/// Parse raw feed lines with the default parser
pub fn parse_feed<I, S>(lines: I) -> ParseResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FeedParser::new().parse_lines(lines)
}
