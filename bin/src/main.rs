//! coinhisto CLI - Historical crypto OHLCV downloader.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::{Field, Format, Layout};

#[derive(Parser)]
#[command(name = "coinhisto")]
#[command(about = "Historical crypto OHLCV downloader", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch historical OHLCV data
    Fetch {
        /// Ticker symbols (e.g., BTC ETH LTC)
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Quote currency (USD, BTC, ETH, EUR)
        #[arg(short, long, default_value = "USD")]
        currency: String,

        /// Tick size (minute, hour, day)
        #[arg(short, long, default_value = "day")]
        ticksize: String,

        /// End date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS). Defaults to now.
        #[arg(short, long)]
        end: Option<String>,

        /// Number of ticks to fetch per symbol
        #[arg(short, long, default_value = "30")]
        lookback: usize,

        /// Output file path. Defaults to ohlcv.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Price field written by the wide CSV layout
        #[arg(long, value_enum, default_value = "close")]
        field: Field,

        /// CSV table layout
        #[arg(long, value_enum, default_value = "wide")]
        layout: Layout,

        /// API key. Falls back to the CRYPTOCOMPARE_API_KEY environment variable.
        #[arg(short, long)]
        api_key: Option<String>,

        /// Maximum symbols fetched concurrently
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            symbols,
            currency,
            ticksize,
            end,
            lookback,
            output,
            format,
            field,
            layout,
            api_key,
            concurrency,
        } => {
            commands::fetch::fetch(
                symbols,
                &currency,
                &ticksize,
                end.as_deref(),
                lookback,
                output,
                format,
                field,
                layout,
                api_key,
                concurrency,
                cli.quiet,
            )
            .await
        }
    }
}
