//! Parse command: offline parsing of a local feed file

use anyhow::{Context, Result};
use colored::*;

use super::shared::{print_station_report, print_warnings};
use crate::app::services::feed_fetcher::decode_latin1;
use crate::app::services::feed_parser::{FeedParser, ParseResult};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::error::FeedError;

pub async fn run_parse(args: &ParseArgs) -> Result<()> {
    args.validate()?;

    let bytes = tokio::fs::read(&args.input)
        .await
        .with_context(|| format!("Failed to read feed file {}", args.input.display()))?;
    let result = FeedParser::new().parse_text(&decode_latin1(&bytes));

    if let Some(station) = &args.station {
        if !result.snapshot.contains(station) {
            return Err(FeedError::station_not_found(station.as_str()).into());
        }
    }

    match args.output_format {
        OutputFormat::Human => print_human(&result, args.station.as_deref()),
        OutputFormat::Json => print_json(&result, args.station.as_deref())?,
    }
    Ok(())
}

fn print_human(result: &ParseResult, station: Option<&str>) {
    for record in result.snapshot.iter() {
        if station.is_some_and(|name| name != record.station_name) {
            continue;
        }
        print_station_report(record);
        println!();
    }

    println!(
        "{} {} records from {} lines ({} blank, {} skipped)",
        "Parsed".bright_green(),
        result.stats.records_parsed.to_string().bright_white().bold(),
        result.stats.total_lines,
        result.stats.blank_lines,
        result.stats.lines_skipped
    );
    print_warnings(&result.warnings);
}

fn print_json(result: &ParseResult, station: Option<&str>) -> Result<()> {
    let stations = match station {
        Some(name) => serde_json::to_value(result.snapshot.get(name))?,
        None => serde_json::to_value(&result.snapshot)?,
    };

    let output = serde_json::json!({
        "stations": stations,
        "warnings": result.warnings,
        "stats": result.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
