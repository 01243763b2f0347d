pub mod client;
pub mod models;

pub use client::{find_coin_id, CoinGeckoClient};
pub use models::ApiError;
