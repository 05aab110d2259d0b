use rust_decimal::Decimal;

use crate::{
    error::{FetchError, Result},
    models::{MoverEntry, Movers, PricePoint, SearchResult},
    services::QuoteService,
};

/// In-memory quote service. `None` answers with an unexpected-shape error.
#[derive(Default)]
pub struct FakeQuoteService {
    pub search: Option<Vec<SearchResult>>,
    pub movers: Option<Movers>,
    pub prices: Option<Vec<PricePoint>>,
}

impl QuoteService for FakeQuoteService {
    async fn search_symbols(&self, _keyword: &str) -> Result<Vec<SearchResult>> {
        self.search
            .clone()
            .ok_or_else(|| FetchError::UnexpectedShape("search: not an array".to_string()))
    }

    async fn get_movers(&self) -> Result<Movers> {
        self.movers
            .clone()
            .ok_or_else(|| FetchError::UnexpectedShape("movers: not an object".to_string()))
    }

    async fn get_price_history(&self, _symbol: &str) -> Result<Vec<PricePoint>> {
        self.prices
            .clone()
            .ok_or_else(|| FetchError::UnexpectedShape("price point: not an array".to_string()))
    }
}

pub fn mover(symbol: &str, close: Decimal, percent: Decimal) -> MoverEntry {
    MoverEntry::new(symbol.to_string(), close, percent)
}

pub fn price_point(date: &str, close: Decimal) -> PricePoint {
    PricePoint::new(
        date.to_string(),
        close,
        close,
        close,
        close,
        1_000,
        Decimal::ZERO,
        Decimal::ZERO,
    )
}
