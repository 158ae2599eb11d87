//! Command implementations for the SMN weather CLI
//!
//! Each command is implemented in its own module:
//! - `watch`: the poll loop that keeps the station snippets fresh
//! - `once`: a single fetch cycle
//! - `parse`: offline parsing of a local feed file

pub mod once;
pub mod parse;
pub mod shared;
pub mod watch;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Sets up logging and dispatches to the selected subcommand. Commands
/// that touch the network load the layered configuration first.
pub async fn run(args: Args, cancel: CancellationToken) -> Result<()> {
    shared::setup_logging(&args);

    match args.get_command() {
        Some(Commands::Watch(watch_args)) => {
            let config = shared::load_configuration(&args)?;
            watch::run_watch(watch_args, config, cancel).await
        }
        Some(Commands::Once(once_args)) => {
            let config = shared::load_configuration(&args)?;
            once::run_once(once_args, config, cancel).await
        }
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args).await,
        None => Ok(()),
    }
}
