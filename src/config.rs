use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use derive_getters::Getters;
use log::LevelFilter;
use reqwest::Url;

use crate::cli::Cli;

pub const DEFAULT_BASE_URL: &str = "https://portal.tradebrains.in";
pub const DEFAULT_LOG_FILE: &str = "~/.stock-ticker-tui.log";

pub const MOVERS_INDEX: &str = "NIFTY";
pub const SEARCH_LENGTH: u32 = 10;
pub const HISTORY_DAYS: u32 = 30;
pub const HISTORY_LIMIT: u32 = 30;
pub const HISTORY_TYPE: &str = "INTRADAY";
pub const DEFAULT_MOVERS_SHOWN: usize = 3;

#[derive(Clone, Debug, Getters)]
pub struct Config {
    base_url: Url,
    timeout: Option<Duration>,
    log_file: PathBuf,
    log_level: LevelFilter,
    movers_shown: usize,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = Url::parse(&cli.base_url)
            .with_context(|| format!("Invalid base URL '{}'", cli.base_url))?;

        let log_file = PathBuf::from(shellexpand::tilde(&cli.log_file).as_ref());

        Ok(Self {
            base_url,
            timeout: cli.timeout_secs.map(Duration::from_secs),
            log_file,
            log_level: cli.log_level,
            movers_shown: cli.movers_shown,
        })
    }
}
