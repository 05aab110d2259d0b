use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_MOVERS_SHOWN};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the quote API.
    #[arg(long, env = "STOCK_TICKER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long, env = "STOCK_TICKER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log file location. `~` is expanded.
    #[arg(long, env = "STOCK_TICKER_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: String,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, env = "STOCK_TICKER_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Number of gainers and losers shown on the search screen.
    #[arg(long, default_value_t = DEFAULT_MOVERS_SHOWN)]
    pub movers_shown: usize,

    /// Open the detail screen for this symbol on startup.
    #[arg(long)]
    pub symbol: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal UI (default).
    Tui,

    /// Search symbols by keyword and print the matches.
    Search { keyword: String },

    /// Print the top gainers and losers of the NIFTY index.
    Movers,

    /// Print the latest price information and recent closes of a symbol.
    Prices { symbol: String },
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level: {s}"))
}
