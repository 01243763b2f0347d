//! Process-wide settings, read once at startup from the environment (and `.env`).

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CHART_WIDTH: u32 = 1000;
const DEFAULT_CHART_HEIGHT: u32 = 600;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Settings for talking to CoinGecko
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub coingecko: CoinGeckoConfig,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let api_key = required("COINGECKO_API_KEY")?;

        let base_url = lookup("COINGECKO_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_COINGECKO_API_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "COINGECKO_API_URL",
                value: base_url,
            });
        }

        let timeout_secs = parse_or(&lookup, "COINGECKO_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let chart_width = parse_or(&lookup, "CHART_WIDTH", DEFAULT_CHART_WIDTH)?;
        let chart_height = parse_or(&lookup, "CHART_HEIGHT", DEFAULT_CHART_HEIGHT)?;

        Ok(Config {
            discord_token,
            coingecko: CoinGeckoConfig {
                api_key,
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            chart_width,
            chart_height,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) if v > T::default() => Ok(v),
            _ => Err(ConfigError::Invalid { var, value: raw }),
        },
    }
}
