//! SMN Weather Library
//!
//! Tools for turning the Servicio Meteorológico Nacional (Argentina)
//! "current weather per station" open-data feed into display snippets.
//!
//! This library provides:
//! - A tolerant parser for the semicolon-delimited station feed, with
//!   placeholder handling and per-field warnings instead of failures
//! - A lookup table from the feed's sky-state descriptions to weather glyphs
//! - Download and unpacking of the zipped, ISO-8859-1 encoded feed
//! - Rendering and writing of the per-station display snippets
//! - A cancellable poll loop that survives failed cycles

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod feed_fetcher;
        pub mod feed_parser;
        pub mod poller;
        pub mod snippet_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ParseWarning, Snapshot, StationRecord, WeatherCode};
pub use app::services::feed_parser::{FeedParser, ParseResult, parse_feed};
pub use config::Config;
pub use error::{FeedError, Result};
