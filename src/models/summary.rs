//! Price summary models

use chrono::NaiveDate;

/// Extremes of a price series and the days they were reached
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub max_price: f64,
    pub min_price: f64,
    pub max_date: NaiveDate,
    pub min_date: NaiveDate,
}
