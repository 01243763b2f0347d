use tracing::info;

use crate::api::coingecko::CoinGeckoClient;
use crate::models::{ComparisonResult, ComparisonWindow, PriceSeries};
use crate::services::{resolver_service, series_service};

/// Resolve and fetch two coins over the same window, one after the other.
///
/// Each side succeeds or fails on its own; an unresolved name leaves its side
/// empty without cancelling the other.
pub async fn compare(
    client: &CoinGeckoClient,
    first_name: &str,
    second_name: &str,
    window: ComparisonWindow,
) -> ComparisonResult {
    info!("Comparing '{}' and '{}' over {}", first_name, second_name, window);

    let first = fetch_side(client, first_name, window).await;
    let second = fetch_side(client, second_name, window).await;

    ComparisonResult { window, first, second }
}

async fn fetch_side(client: &CoinGeckoClient, name: &str, window: ComparisonWindow) -> Option<PriceSeries> {
    let coin_id = resolver_service::resolve_coin_id(client, name).await?;
    series_service::fetch_series(client, &coin_id, window.days()).await
}
