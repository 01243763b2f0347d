//! Price series models

use chrono::{DateTime, Utc};
use super::coin::CoinId;

/// A single data point on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Historical USD prices for one coin, in the order the provider returned them.
///
/// Always holds at least one point; an empty history is represented by the
/// absence of a series, never by an empty one.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    coin_id: CoinId,
    days: u32,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Returns `None` when `points` is empty
    pub fn new(coin_id: CoinId, days: u32, points: Vec<PricePoint>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { coin_id, days, points })
    }

    pub fn coin_id(&self) -> &CoinId {
        &self.coin_id
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> &PricePoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.points[self.points.len() - 1]
    }
}
