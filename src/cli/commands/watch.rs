//! Watch command: the poll loop

use anyhow::Result;
use colored::*;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::shared::{OUTPUT_DIR, apply_station_override, print_station_report};
use crate::app::services::feed_fetcher::FeedFetcher;
use crate::app::services::poller::Poller;
use crate::cli::args::WatchArgs;
use crate::config::Config;

pub async fn run_watch(args: &WatchArgs, config: Config, cancel: CancellationToken) -> Result<()> {
    args.validate()?;

    let mut config = apply_station_override(config, args.station.as_deref());
    if let Some(secs) = args.interval_secs {
        config = config.with_interval_secs(secs);
    }
    config.validate()?;

    let fetcher = FeedFetcher::new(&config.feed)?;
    let poller = Poller::new(
        fetcher,
        config.station.name.clone(),
        OUTPUT_DIR,
        config.poll.interval(),
    );

    let stats = poller
        .run(&cancel, args.cycles, |report| {
            if let Some(record) = &report.record {
                println!(
                    "\n{} {}",
                    "Updated".bright_green(),
                    report.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
                print_station_report(record);
            }
        })
        .await;

    info!(
        "Watch finished: {} cycles, {} succeeded, {} failed, {} without station",
        stats.cycles, stats.succeeded, stats.failed, stats.station_missing
    );
    Ok(())
}
