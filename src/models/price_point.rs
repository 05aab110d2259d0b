use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, prelude::ToPrimitive};

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PricePoint {
    date: String,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: i64,
    change: Decimal,
    percent: Decimal,
}

impl PricePoint {
    pub fn close_f64(&self) -> f64 {
        self.close.to_f64().unwrap_or(f64::NAN)
    }
}

/// Closing prices in the order the API returned them (newest first).
pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(PricePoint::close_f64).collect()
}
