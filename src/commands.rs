//! Non-interactive counterparts of the two screens. Output goes to stdout;
//! fetch failures are logged and print as "no results" / "not found".

use std::io::Write;

use anyhow::Result;
use log::error;
use strum::IntoEnumIterator;

use crate::{
    app::{
        chart,
        utils::{CURRENCY, format_mover, format_price, format_volume},
    },
    config::MOVERS_INDEX,
    models::{MoverKind, price_point::closes},
    services::QuoteService,
};

pub async fn search<S: QuoteService>(
    service: &S,
    keyword: &str,
    out: &mut impl Write,
) -> Result<()> {
    if keyword.is_empty() {
        return Ok(());
    }

    let results = service.search_symbols(keyword).await.unwrap_or_else(|e| {
        error!("Search failed: {}", e);
        Vec::new()
    });

    if results.is_empty() {
        writeln!(out, "No results for '{}'", keyword)?;
        return Ok(());
    }

    writeln!(out, "Search Results:")?;
    for result in &results {
        writeln!(out, "{} - {}", result.symbol(), result.company())?;
    }
    Ok(())
}

pub async fn movers<S: QuoteService>(
    service: &S,
    shown: usize,
    out: &mut impl Write,
) -> Result<()> {
    let movers = match service.get_movers().await {
        Ok(movers) => movers,
        Err(e) => {
            error!("Failed to fetch movers: {}", e);
            writeln!(out, "No market movers available")?;
            return Ok(());
        }
    };

    writeln!(out, "{} Market Movers", MOVERS_INDEX)?;
    for kind in MoverKind::iter() {
        writeln!(out, "{}", kind)?;
        for entry in movers.top(kind, shown) {
            let (label, percent) = format_mover(kind, entry);
            writeln!(out, "  {}  {}", label, percent)?;
        }
    }
    Ok(())
}

pub async fn prices<S: QuoteService>(
    service: &S,
    symbol: &str,
    out: &mut impl Write,
) -> Result<()> {
    let points = service.get_price_history(symbol).await.unwrap_or_else(|e| {
        error!("Failed to fetch stock data for {}: {}", symbol, e);
        Vec::new()
    });

    let Some(latest) = points.first() else {
        writeln!(out, "Stock data not found")?;
        return Ok(());
    };

    writeln!(out, "{}", symbol)?;
    writeln!(out, "Date: {}", latest.date())?;
    writeln!(out, "Open: {}", format_price(latest.open()))?;
    writeln!(out, "High: {}", format_price(latest.high()))?;
    writeln!(out, "Low: {}", format_price(latest.low()))?;
    writeln!(out, "Close: {}", format_price(latest.close()))?;
    writeln!(out, "Volume: {}", format_volume(*latest.volume()))?;
    writeln!(
        out,
        "Change: {}{} ({}%)",
        CURRENCY,
        latest.change(),
        latest.percent()
    )?;

    match chart::bounds(&closes(&points)) {
        Ok((min, max)) => writeln!(
            out,
            "Last {} Data Points | High: {}{:.2} | Low: {}{:.2}",
            points.len(),
            CURRENCY,
            max,
            CURRENCY,
            min
        )?,
        Err(e) => error!("Cannot summarize {}: {}", symbol, e),
    }
    Ok(())
}
