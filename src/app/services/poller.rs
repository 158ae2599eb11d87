//! Periodic feed polling
//!
//! Each cycle downloads the feed, parses it into a fresh snapshot and
//! refreshes the display snippets of the selected station. A failed cycle
//! is logged and the loop carries on after the usual delay; nothing a cycle
//! does can stop the loop except cancellation.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::feed_fetcher::FeedSource;
use super::feed_parser::{FeedParser, ParseStats};
use super::snippet_writer::{SnippetWriter, StationSnippets};
use crate::app::models::StationRecord;
use crate::error::Result;

/// Outcome of one successful fetch-and-parse cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub fetched_at: DateTime<Utc>,

    /// Line counters from the parse
    pub stats: ParseStats,

    /// Number of parse warnings raised
    pub warnings: usize,

    /// The selected station, if the feed listed it
    pub record: Option<StationRecord>,

    /// Artifact files refreshed during the cycle
    pub written: Vec<PathBuf>,
}

/// Counters across the lifetime of a poll loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStats {
    pub cycles: usize,
    pub succeeded: usize,
    pub failed: usize,

    /// Successful cycles whose feed did not list the station
    pub station_missing: usize,
}

/// Fetch-parse-write loop for one station
#[derive(Debug)]
pub struct Poller<S> {
    source: S,
    parser: FeedParser,
    station: String,
    writer: SnippetWriter,
    interval: Duration,
}

impl<S: FeedSource> Poller<S> {
    pub fn new(
        source: S,
        station: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        interval: Duration,
    ) -> Self {
        let station = station.into();
        let writer = SnippetWriter::new(output_dir, &station);

        Self {
            source,
            parser: FeedParser::new(),
            station,
            writer,
            interval,
        }
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single cycle
    ///
    /// A feed that does not list the station is not an error: the report
    /// has no record and no artifacts are touched.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let lines = self.source.fetch_lines().await?;
        let fetched_at = Utc::now();

        let result = self.parser.parse_lines(&lines);
        if !result.warnings.is_empty() {
            warn!(
                "Feed parsed with {} warnings ({} records)",
                result.warnings.len(),
                result.snapshot.len()
            );
        }

        let record = result.snapshot.get(&self.station).cloned();
        let written = match &record {
            Some(record) => {
                let snippets = StationSnippets::from_record(record);
                self.writer.write(&snippets).await?
            }
            None => {
                warn!(
                    "Station '{}' not found among {} stations",
                    self.station,
                    result.snapshot.len()
                );
                Vec::new()
            }
        };

        Ok(CycleReport {
            fetched_at,
            warnings: result.warnings.len(),
            stats: result.stats,
            record,
            written,
        })
    }

    /// Poll until cancelled or until `max_cycles` cycles have run
    ///
    /// `on_report` sees every successful cycle. Failed cycles are logged
    /// and counted, never returned. A cycle cut short by cancellation is
    /// not counted, so `cycles == succeeded + failed`.
    pub async fn run<F>(
        &self,
        cancel: &CancellationToken,
        max_cycles: Option<usize>,
        mut on_report: F,
    ) -> PollStats
    where
        F: FnMut(&CycleReport),
    {
        let mut stats = PollStats::default();
        info!(
            "Polling for '{}' every {}s",
            self.station,
            self.interval.as_secs()
        );

        while !cancel.is_cancelled() {
            let outcome = tokio::select! {
                _ = cancel.cancelled() => break,
                outcome = self.run_cycle() => outcome,
            };
            stats.cycles += 1;

            match outcome {
                Ok(report) => {
                    stats.succeeded += 1;
                    if report.record.is_none() {
                        stats.station_missing += 1;
                    }
                    on_report(&report);
                }
                Err(e) => {
                    stats.failed += 1;
                    error!("Poll cycle {} failed: {}", stats.cycles, e);
                }
            }

            if max_cycles.is_some_and(|max| stats.cycles >= max) {
                break;
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(
            "Polling stopped after {} cycles ({} failed)",
            stats.cycles, stats.failed
        );
        stats
    }
}
