use tracing::{debug, error, info};

use crate::api::coingecko::{find_coin_id, CoinGeckoClient};
use crate::models::CoinId;

/// Resolve a human-entered coin name (e.g. "Bitcoin") to its CoinGecko id.
///
/// Fetches the full catalog on every call. Transport and HTTP errors are
/// logged and reported as `None`, the same as a name with no match.
pub async fn resolve_coin_id(client: &CoinGeckoClient, name: &str) -> Option<CoinId> {
    if name.trim().is_empty() {
        return None;
    }

    let catalog = match client.get_coin_list().await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Error fetching coin list from CoinGecko API: {}", e);
            return None;
        }
    };

    if let Some(entries) = catalog.as_array() {
        debug!("Scanning {} catalog entries for '{}'", entries.len(), name);
    }

    let coin_id = find_coin_id(&catalog, name);
    match &coin_id {
        Some(id) => info!("Resolved '{}' to coin id '{}'", name, id),
        None => info!("No coin named '{}' in catalog", name),
    }
    coin_id
}
