//! Data models for coinview commands and services
//!
//! Price series, their summaries, and the lookback windows the comparison view offers.

pub mod chart;
pub mod coin;
pub mod comparison;
pub mod summary;
pub mod timeframe;

// Re-export commonly used types for convenience
pub use chart::{PricePoint, PriceSeries};
pub use coin::CoinId;
pub use comparison::ComparisonResult;
pub use summary::Summary;
pub use timeframe::ComparisonWindow;
