//! Two-coin comparison models

use super::chart::PriceSeries;
use super::timeframe::ComparisonWindow;

/// Outcome of fetching two coins over the same window.
///
/// Each side is independent: one failing does not clear the other.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub window: ComparisonWindow,
    pub first: Option<PriceSeries>,
    pub second: Option<PriceSeries>,
}

impl ComparisonResult {
    /// Both series, if and only if both sides were fetched
    pub fn both(&self) -> Option<(&PriceSeries, &PriceSeries)> {
        match (&self.first, &self.second) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}
