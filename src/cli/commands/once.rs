//! Once command: a single fetch cycle

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use super::shared::{OUTPUT_DIR, apply_station_override, print_station_report};
use crate::app::services::feed_fetcher::FeedFetcher;
use crate::app::services::poller::Poller;
use crate::cli::args::OnceArgs;
use crate::config::Config;
use crate::error::FeedError;

pub async fn run_once(args: &OnceArgs, config: Config, cancel: CancellationToken) -> Result<()> {
    let config = apply_station_override(config, args.station.as_deref());
    config.validate()?;

    let fetcher = FeedFetcher::new(&config.feed)?;
    let poller = Poller::new(
        fetcher,
        config.station.name.clone(),
        OUTPUT_DIR,
        config.poll.interval(),
    );

    let report = tokio::select! {
        _ = cancel.cancelled() => {
            return Err(FeedError::interrupted("cancelled before the cycle completed").into());
        }
        report = poller.run_cycle() => report?,
    };
    match &report.record {
        Some(record) => {
            print_station_report(record);
            Ok(())
        }
        None => Err(FeedError::station_not_found(poller.station()).into()),
    }
}
