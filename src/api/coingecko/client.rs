use chrono::DateTime;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{ApiError, CoinListEntry, RateLimitResponse};
use crate::config::CoinGeckoConfig;
use crate::models::{CoinId, PricePoint, PriceSeries};

/// Quote currency for every market chart request
pub const VS_CURRENCY: &str = "usd";

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// CoinGecko REST client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MarketChartBody {
    prices: Vec<(f64, f64)>,
}

impl CoinGeckoClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &CoinGeckoConfig) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let key_value = HeaderValue::from_str(&self.api_key)
            .map_err(|e| ApiError::RequestError(format!("Failed to create API key header: {}", e)))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        Ok(headers)
    }

    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => ApiError::BadRequest(body_text),
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                let message = serde_json::from_str::<RateLimitResponse>(&body_text)
                    .ok()
                    .and_then(|r| r.status)
                    .and_then(|s| s.error_message)
                    .unwrap_or(body_text);
                warn!("Rate limited by CoinGecko: {}", message);
                ApiError::RateLimited(message)
            }
            500..=599 => {
                warn!("CoinGecko server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let headers = self.create_headers()?;

        debug!("GET {} {:?}", url, query);
        let response = self
            .http_client
            .get(url)
            .headers(headers)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::RequestError(format!("Failed to read response body: {}", e)))
    }

    /// GET /coins/list
    ///
    /// Returns the catalog as raw JSON so callers can skip malformed records
    /// instead of failing the whole listing.
    pub async fn get_coin_list(&self) -> Result<Value, ApiError> {
        let url = format!("{}/coins/list", self.base_url);
        let body = self.get_text(&url, &[]).await?;

        serde_json::from_str(&body).map_err(|_| ApiError::MalformedResponse { body })
    }

    /// GET /coins/{id}/market_chart?vs_currency=usd&days={days}
    ///
    /// # Returns
    /// * `Ok(PriceSeries)` - Non-empty series in provider order
    /// * `Err(ApiError::MalformedResponse)` - Body lacked a well-formed `prices` field
    /// * `Err(ApiError::NoPriceData)` - `prices` was empty
    /// * `Err(_)` - Transport or HTTP status error
    pub async fn get_market_chart(&self, coin_id: &CoinId, days: u32) -> Result<PriceSeries, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, coin_id.as_str());
        let query = [
            ("vs_currency", VS_CURRENCY.to_string()),
            ("days", days.to_string()),
        ];
        let body = self.get_text(&url, &query).await?;

        parse_market_chart(&body, coin_id, days)
    }
}

/// Find the id of the first catalog entry whose name matches `name`, ignoring case.
///
/// Returns `None` if the catalog is not an array. Entries that are not objects
/// or lack a string `id`/`name` are skipped.
pub fn find_coin_id(catalog: &Value, name: &str) -> Option<CoinId> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    catalog
        .as_array()?
        .iter()
        .filter_map(|record| CoinListEntry::deserialize(record).ok())
        .find(|entry| entry.name.to_lowercase() == wanted)
        .map(|entry| CoinId::new(entry.id))
}

/// Parse a market chart body into a price series.
///
/// Every `prices` row must be a `[timestamp_ms, price]` pair of finite numbers
/// with a representable timestamp, otherwise the whole body is rejected.
pub fn parse_market_chart(body: &str, coin_id: &CoinId, days: u32) -> Result<PriceSeries, ApiError> {
    let malformed = || ApiError::MalformedResponse { body: body.to_string() };

    let parsed: MarketChartBody = serde_json::from_str(body).map_err(|_| malformed())?;

    let mut points = Vec::with_capacity(parsed.prices.len());
    for (millis, price) in parsed.prices {
        if !millis.is_finite() || !price.is_finite() {
            return Err(malformed());
        }
        let timestamp = DateTime::from_timestamp_millis(millis as i64).ok_or_else(malformed)?;
        points.push(PricePoint { timestamp, price });
    }

    PriceSeries::new(coin_id.clone(), days, points).ok_or(ApiError::NoPriceData)
}
