//! Command-line argument definitions for the SMN weather poller
//!
//! This module defines the CLI interface using the clap derive API.

use crate::error::{FeedError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the SMN weather poller
///
/// Downloads the national weather service station feed, extracts one
/// station and keeps a set of small text files up to date for display.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smn-weather",
    version,
    about = "Keep display snippets for one SMN weather station up to date",
    long_about = "Downloads the zipped SMN station feed, parses every station line (tolerating \
                  placeholders and malformed values) and writes temperature, feels-like, \
                  humidity, sky-state glyph and last-update snippets for the selected station \
                  into the working directory."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/smn-weather/config.toml and falls back to built-in defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Poll the feed forever, refreshing the station snippets every cycle
    Watch(WatchArgs),
    /// Run a single fetch cycle and exit
    Once(OnceArgs),
    /// Parse a local, already unzipped feed file
    Parse(ParseArgs),
}

/// Arguments for the watch command (the poll loop)
#[derive(Debug, Clone, Parser)]
pub struct WatchArgs {
    /// Station name exactly as it appears in the feed
    #[arg(short = 's', long = "station", value_name = "NAME")]
    pub station: Option<String>,

    /// Seconds between poll cycles
    #[arg(short = 'i', long = "interval", value_name = "SECS")]
    pub interval_secs: Option<u64>,

    /// Stop after this many cycles instead of running until Ctrl+C
    #[arg(long = "cycles", value_name = "COUNT")]
    pub cycles: Option<usize>,
}

/// Arguments for the once command
#[derive(Debug, Clone, Parser)]
pub struct OnceArgs {
    /// Station name exactly as it appears in the feed
    #[arg(short = 's', long = "station", value_name = "NAME")]
    pub station: Option<String>,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Decompressed feed file (ISO-8859-1 text)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Show only this station instead of every station
    #[arg(short = 's', long = "station", value_name = "NAME")]
    pub station: Option<String>,

    /// Output format for the parsed snapshot
    #[arg(long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }

    /// Map the verbosity flags to a log level
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl WatchArgs {
    /// Validate the watch command arguments
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs == Some(0) {
            return Err(FeedError::configuration(
                "Poll interval must be greater than 0 seconds",
            ));
        }
        if self.cycles == Some(0) {
            return Err(FeedError::configuration(
                "Cycle count must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl ParseArgs {
    /// Validate the parse command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(FeedError::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}
