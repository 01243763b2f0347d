use serde::Deserialize;
use thiserror::Error;

/// One entry of `GET /coins/list`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinListEntry {
    pub id: String,
    pub name: String,
}

/// 429 rate limit body as sent by CoinGecko
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitResponse {
    pub status: Option<RateLimitStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitStatus {
    pub error_message: Option<String>,
}

/// Error type for CoinGecko API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests
    #[error("Rate Limited: {0}")]
    RateLimited(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body did not have the expected shape; carries the raw body
    #[error("Unexpected response format: {body}")]
    MalformedResponse { body: String },
    /// `prices` was present but empty
    #[error("No price data in response")]
    NoPriceData,
}
