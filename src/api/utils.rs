use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FetchError, Result};

pub async fn make_request(client: &Client, url: Url) -> Result<Value> {
    debug!("GET {}", url);
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(FetchError::Status(res.status()));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

/// Deserializes every array item as `T` and converts it. Items that fail either
/// step are dropped with a warning; an empty array is a valid, empty result.
pub fn parse_response_array<T, U>(
    data: Value,
    context: &str,
    convert: impl Fn(&T) -> anyhow::Result<U>,
) -> Result<Vec<U>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| {
                let converted = serde_json::from_value::<T>(item)
                    .map_err(anyhow::Error::from)
                    .and_then(|dto| convert(&dto));
                match converted {
                    Ok(value) => Some(value),
                    Err(err) => {
                        warn!("Skipping {} entry {}: {:#}", context, idx, err);
                        None
                    }
                }
            })
            .collect()),
        _ => Err(FetchError::UnexpectedShape(format!(
            "{}: not an array",
            context
        ))),
    }
}
