use clap::Parser;
use smn_weather::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let cancellation_token = CancellationToken::new();

        // Ctrl+C cancels the token; the poll loop notices it between and
        // during cycles and returns normally
        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                    signal_token.cancel();
                }
                Err(e) => eprintln!("Failed to install CTRL+C signal handler: {}", e),
            }
        });

        commands::run(args, cancellation_token).await
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SMN Weather - station snippets from the SMN open-data feed");
    println!("===========================================================");
    println!();
    println!("Downloads the current-weather feed of the Servicio Meteorológico Nacional,");
    println!("picks one station and keeps five small text files up to date for display.");
    println!();
    println!("USAGE:");
    println!("    smn-weather <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    watch    Poll the feed every few minutes (main command)");
    println!("    once     Run a single fetch cycle and exit");
    println!("    parse    Parse a local, already unzipped feed file");
    println!("    help     Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    Configuration file (TOML)");
    println!("    -v, --verbose          Increase logging verbosity");
    println!("    -q, --quiet            Only log errors");
    println!("    -h, --help             Show help information");
    println!("    -V, --version          Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Keep Buenos Aires snippets fresh in the current directory:");
    println!("    smn-weather watch");
    println!();
    println!("    # Another station, polling every minute:");
    println!("    smn-weather watch --station \"Mar del Plata\" --interval 60");
    println!();
    println!("    # Inspect a downloaded feed as JSON:");
    println!("    smn-weather parse tiepre.txt --format json");
}
