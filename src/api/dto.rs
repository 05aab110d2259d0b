use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use derive_getters::Getters;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Deserialize;
use serde_json::Number;

use crate::models::{MoverEntry, PricePoint, SearchResult};

/// A numeric API field. The service sends some numbers as JSON strings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumericField {
    Number(Number),
    Text(String),
}

impl NumericField {
    pub fn to_decimal(&self, field_name: &str) -> Result<Decimal> {
        let raw = self.raw();
        let raw = raw.trim();
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .with_context(|| format!("Failed to parse {} '{}'", field_name, raw))
    }

    pub fn to_i64(&self, field_name: &str) -> Result<i64> {
        if let NumericField::Number(n) = self {
            if let Some(value) = n.as_i64() {
                return Ok(value);
            }
        }

        self.to_decimal(field_name)?
            .trunc()
            .to_i64()
            .ok_or_else(|| anyhow!("Failed to convert {} '{}' to i64", field_name, self.raw()))
    }

    fn raw(&self) -> String {
        match self {
            NumericField::Number(n) => n.to_string(),
            NumericField::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Getters)]
pub struct SearchResultDto {
    symbol: String,
    #[serde(default)]
    company: Option<String>,
}

impl SearchResultDto {
    pub fn to_search_result(&self) -> Result<SearchResult> {
        Ok(SearchResult::new(
            self.symbol.clone(),
            self.company.clone().unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Deserialize, Getters)]
pub struct MoverEntryDto {
    symbol: String,
    close: NumericField,
    percent: NumericField,
}

impl MoverEntryDto {
    pub fn to_mover_entry(&self) -> Result<MoverEntry> {
        Ok(MoverEntry::new(
            self.symbol.clone(),
            self.close.to_decimal("close")?,
            self.percent.to_decimal("percent")?,
        ))
    }
}

#[derive(Debug, Deserialize, Getters)]
pub struct PricePointDto {
    date: String,
    open: NumericField,
    high: NumericField,
    low: NumericField,
    close: NumericField,
    volume: NumericField,
    change: NumericField,
    percent: NumericField,
}

impl PricePointDto {
    pub fn to_price_point(&self) -> Result<PricePoint> {
        Ok(PricePoint::new(
            self.date.clone(),
            self.open.to_decimal("open")?,
            self.high.to_decimal("high")?,
            self.low.to_decimal("low")?,
            self.close.to_decimal("close")?,
            self.volume.to_i64("volume")?,
            self.change.to_decimal("change")?,
            self.percent.to_decimal("percent")?,
        ))
    }
}
