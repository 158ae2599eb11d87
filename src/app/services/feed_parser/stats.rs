//! Parsing statistics and result structures for feed processing
//!
//! This module provides the types returned by one feed parse: the snapshot
//! itself, the warnings raised along the way, and line counters.

use crate::app::models::{ParseWarning, Snapshot};

/// Parsing result with the snapshot, warnings and basic statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseResult {
    /// Station records keyed by name, in feed order
    pub snapshot: Snapshot,

    /// Field and line problems that did not stop the parse
    pub warnings: Vec<ParseWarning>,

    /// Line counters
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of raw lines seen
    pub total_lines: usize,

    /// Lines that produced a record
    pub records_parsed: usize,

    /// Lines that were empty once trimmed and stripped of their suffix
    pub blank_lines: usize,

    /// Lines skipped because no record could be keyed
    pub lines_skipped: usize,

    /// Records that replaced an earlier line for the same station
    pub duplicates_replaced: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of non-blank lines that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        let candidates = self.total_lines - self.blank_lines;
        if candidates == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / candidates as f64) * 100.0
        }
    }
}

impl ParseResult {
    /// Whether the feed produced no records at all
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
