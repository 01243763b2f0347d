use tracing::{error, info, warn};

use crate::api::coingecko::{ApiError, CoinGeckoClient};
use crate::models::{CoinId, PriceSeries};

/// Fetch `days` of USD price history for a coin.
///
/// Any failure (transport, HTTP status, unexpected body, empty history) is
/// logged and reported as `None`; a partial series is never returned.
pub async fn fetch_series(client: &CoinGeckoClient, coin_id: &CoinId, days: u32) -> Option<PriceSeries> {
    match client.get_market_chart(coin_id, days).await {
        Ok(series) => {
            info!("Fetched {} price points for '{}' over {} days", series.len(), coin_id, days);
            Some(series)
        }
        Err(ApiError::MalformedResponse { body }) => {
            warn!("Unexpected API response format. Unable to retrieve historical price data for '{}'", coin_id);
            warn!("Response data: {}", body);
            None
        }
        Err(ApiError::NoPriceData) => {
            warn!("CoinGecko returned no prices for '{}' over {} days", coin_id, days);
            None
        }
        Err(e) => {
            error!("Error fetching market chart for '{}': {}", coin_id, e);
            None
        }
    }
}
