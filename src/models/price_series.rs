use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single closing price observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,

    /// Closing price in quote currency (USD per troy ounce for gold)
    pub close: f64,
}

/// Time-ordered closing prices from one fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting by time so callers can rely on ordering
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.time);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
