use std::future::Future;

use crate::{
    error::Result,
    models::{Movers, PricePoint, SearchResult},
};

/// Remote quote data used by the screens. The HTTP client implements it for
/// the live API; tests substitute an in-memory implementation.
pub trait QuoteService: Send + Sync + 'static {
    /// Symbols matching `keyword`, in API order.
    fn search_symbols(&self, keyword: &str)
    -> impl Future<Output = Result<Vec<SearchResult>>> + Send;

    /// Gainers and losers of the tracked index.
    fn get_movers(&self) -> impl Future<Output = Result<Movers>> + Send;

    /// Recent intraday prices for `symbol`, newest first.
    fn get_price_history(&self, symbol: &str)
    -> impl Future<Output = Result<Vec<PricePoint>>> + Send;
}
