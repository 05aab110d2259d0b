use derive_getters::Getters;
use derive_new::new;

pub const CANVAS_WIDTH: f64 = 500.0;
pub const CANVAS_HEIGHT: f64 = 200.0;
pub const PLOT_WIDTH: f64 = 480.0;
pub const MARGIN: f64 = 10.0;
pub const PLOT_HEIGHT_INSET: f64 = 190.0;
pub const PLOT_HEIGHT: f64 = 180.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    #[error("Cannot chart an empty series")]
    EmptySeries,

    #[error("Price at index {index} is not a finite number")]
    NonFinite { index: usize },
}

/// A plot coordinate. `y` grows downward from the top of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, new)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, new)]
pub struct Segment {
    pub from: PlotPoint,
    pub to: PlotPoint,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct ChartGeometry {
    points: Vec<PlotPoint>,
    segments: Vec<Segment>,
    min: f64,
    max: f64,
}

impl ChartGeometry {
    pub fn high_label(&self) -> String {
        format!("{:.2}", self.max)
    }

    pub fn low_label(&self) -> String {
        format!("{:.2}", self.min)
    }
}

/// Maps closing prices, in the order given, onto the fixed chart layout.
pub fn map_series(prices: &[f64]) -> Result<ChartGeometry, ChartError> {
    let (min, max) = bounds(prices)?;
    map_series_with_bounds(prices, min, max)
}

/// Same as [`map_series`] with caller-supplied bounds.
pub fn map_series_with_bounds(
    prices: &[f64],
    min: f64,
    max: f64,
) -> Result<ChartGeometry, ChartError> {
    if prices.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if let Some(index) = prices.iter().position(|p| !p.is_finite()) {
        return Err(ChartError::NonFinite { index });
    }

    // Flat series: draw along the baseline instead of dividing by zero.
    let range = if max == min { 1.0 } else { max - min };
    let last = prices.len() - 1;

    let points: Vec<PlotPoint> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let x = if last == 0 {
                MARGIN
            } else {
                (i as f64 / last as f64) * PLOT_WIDTH + MARGIN
            };
            let y = PLOT_HEIGHT_INSET - ((price - min) / range) * PLOT_HEIGHT;
            PlotPoint::new(x, y)
        })
        .collect();

    let segments = points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect();

    Ok(ChartGeometry {
        points,
        segments,
        min,
        max,
    })
}

pub fn bounds(prices: &[f64]) -> Result<(f64, f64), ChartError> {
    if prices.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    prices
        .iter()
        .enumerate()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (index, &p)| {
            if p.is_finite() {
                Ok((min.min(p), max.max(p)))
            } else {
                Err(ChartError::NonFinite { index })
            }
        })
}
