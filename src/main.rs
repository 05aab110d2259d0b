use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;
use stock_ticker_tui::{
    api::TradeBrainsApi,
    app::App,
    cli::{Cli, Commands},
    commands,
    config::Config,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    if let Err(e) = logging::init_logger(config.log_file(), *config.log_level()) {
        eprintln!("Logging disabled: {:#}", e);
    }
    info!("Command line input recorded: {cli:?}");

    let api = TradeBrainsApi::new(&config)?;
    let mut stdout = io::stdout();

    match &cli.command {
        None | Some(Commands::Tui) => {
            let mut app = App::new(api, &config);
            app.run(cli.symbol.as_deref()).await?;
        }
        Some(Commands::Search { keyword }) => commands::search(&api, keyword, &mut stdout).await?,
        Some(Commands::Movers) => {
            commands::movers(&api, *config.movers_shown(), &mut stdout).await?
        }
        Some(Commands::Prices { symbol }) => commands::prices(&api, symbol, &mut stdout).await?,
    }

    Ok(())
}
