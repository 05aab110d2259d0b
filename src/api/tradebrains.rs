use log::info;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{
    dto::{MoverEntryDto, PricePointDto, SearchResultDto},
    utils::{make_request, parse_response_array},
};
use crate::{
    config::{
        Config, HISTORY_DAYS, HISTORY_LIMIT, HISTORY_TYPE, MOVERS_INDEX, SEARCH_LENGTH,
    },
    error::{FetchError, Result},
    models::{MoverEntry, Movers, PricePoint, SearchResult},
    services::QuoteService,
};

#[derive(Clone, Debug)]
pub struct TradeBrainsApi {
    client: Client,
    base_url: Url,
}

impl TradeBrainsApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(*timeout);
        }

        info!("Using quote API at {}", config.base_url());

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().clone(),
        })
    }
}

impl QuoteService for TradeBrainsApi {
    async fn search_symbols(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let url = search_url(&self.base_url, keyword)?;
        let res = make_request(&self.client, url).await?;
        parse_search_results(res)
    }

    async fn get_movers(&self) -> Result<Movers> {
        let url = movers_url(&self.base_url)?;
        let res = make_request(&self.client, url).await?;
        parse_movers(res)
    }

    async fn get_price_history(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let url = prices_url(&self.base_url, symbol)?;
        let res = make_request(&self.client, url).await?;
        parse_price_history(res)
    }
}

fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", base_url)))?
        .pop_if_empty()
        .extend(["api", "assignment"])
        .extend(segments);
    Ok(url)
}

pub fn movers_url(base_url: &Url) -> Result<Url> {
    // The trailing empty segment keeps the slash the endpoint expects.
    endpoint(base_url, &["index", MOVERS_INDEX, "movers", ""])
}

pub fn search_url(base_url: &Url, keyword: &str) -> Result<Url> {
    let mut url = endpoint(base_url, &["search"])?;
    url.query_pairs_mut()
        .append_pair("keyword", keyword)
        .append_pair("length", &SEARCH_LENGTH.to_string());
    Ok(url)
}

pub fn prices_url(base_url: &Url, symbol: &str) -> Result<Url> {
    let mut url = endpoint(base_url, &["stock", symbol, "prices"])?;
    url.query_pairs_mut()
        .append_pair("days", &HISTORY_DAYS.to_string())
        .append_pair("type", HISTORY_TYPE)
        .append_pair("limit", &HISTORY_LIMIT.to_string());
    Ok(url)
}

pub fn parse_search_results(data: Value) -> Result<Vec<SearchResult>> {
    parse_response_array(data, "search result", SearchResultDto::to_search_result)
}

pub fn parse_movers(data: Value) -> Result<Movers> {
    let Value::Object(mut obj) = data else {
        return Err(FetchError::UnexpectedShape(
            "movers: not an object".to_string(),
        ));
    };

    let mut side = |key: &str| -> Result<Vec<MoverEntry>> {
        let list = obj
            .remove(key)
            .ok_or_else(|| FetchError::UnexpectedShape(format!("movers: missing '{}'", key)))?;
        parse_response_array(list, key, MoverEntryDto::to_mover_entry)
    };

    let gainers = side("gainers")?;
    let losers = side("losers")?;

    Ok(Movers::new(gainers, losers))
}

pub fn parse_price_history(data: Value) -> Result<Vec<PricePoint>> {
    parse_response_array(data, "price point", PricePointDto::to_price_point)
}
