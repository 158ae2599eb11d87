//! Shared components for CLI commands
//!
//! Logging set-up, configuration loading and the console report printed
//! for the selected station.

use colored::*;
use tracing::{debug, info};

use crate::app::models::{ParseWarning, StationRecord};
use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::{LAST_UPDATED_PREFIX, UNAVAILABLE_LABEL};
use crate::error::Result;

/// Directory the display snippets are written to
pub const OUTPUT_DIR: &str = ".";

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("smn_weather={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration (defaults -> file) and validate it
pub fn load_configuration(args: &Args) -> Result<Config> {
    let config = Config::load_layered(args.config_file.as_deref())?;
    config.validate()?;

    info!(
        "Feed {} for station '{}'",
        config.feed_url(),
        config.station.name
    );
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Apply a `--station` override
pub fn apply_station_override(config: Config, station: Option<&str>) -> Config {
    match station {
        Some(name) => config.with_station(name),
        None => config,
    }
}

/// Print the readings of one station to stdout
pub fn print_station_report(record: &StationRecord) {
    println!("{}", record.station_name.bright_green().bold());

    match record.temperature_c {
        Some(t) => println!(" {}", format!("{:.1}°", t).bright_white().bold()),
        None => println!(" {}", UNAVAILABLE_LABEL.dimmed()),
    }

    match record.feels_like_c {
        Some(t) => println!(" {} {:.1}°", "ST".bright_cyan(), t),
        None => println!(" {} {}", "ST".bright_cyan(), UNAVAILABLE_LABEL.dimmed()),
    }

    match record.humidity_pct {
        Some(h) => println!(" {} {}%", "H".bright_cyan(), h),
        None => println!(" {} {}", "H".bright_cyan(), UNAVAILABLE_LABEL.dimmed()),
    }

    println!(
        " {} {} {}",
        "Clima:".bright_cyan(),
        record.weather_description,
        record.weather_code
    );
    println!(" {} {}", LAST_UPDATED_PREFIX.bright_cyan(), record.last_updated);
}

/// Print parse warnings, one per line
pub fn print_warnings(warnings: &[ParseWarning]) {
    if warnings.is_empty() {
        return;
    }

    println!(
        "\n{} {}",
        "Warnings:".bright_yellow().bold(),
        warnings.len().to_string().bright_white()
    );
    for warning in warnings {
        println!("  {}", warning);
    }
}
