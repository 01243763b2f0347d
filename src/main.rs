use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use api::CoinGeckoClient;
use config::Config;

struct Handler;

/// CoinGecko client shared by all commands
struct CoinGecko;

impl TypeMapKey for CoinGecko {
    type Value = CoinGeckoClient;
}

/// Rendered chart dimensions (width, height)
struct ChartSize;

impl TypeMapKey for ChartSize {
    type Value = (u32, u32);
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    for directive in ["coinview=debug", "serenity=warn"] {
        if let Ok(d) = directive.parse::<tracing_subscriber::filter::Directive>() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🪙 Starting coinview bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Using CoinGecko API at {} (timeout {}s)",
        config.coingecko.base_url,
        config.coingecko.timeout.as_secs()
    );

    let coingecko = match CoinGeckoClient::new(&config.coingecko) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create CoinGecko client: {}", e);
            return;
        }
    };

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<CoinGecko>(coingecko);
        data.insert::<ChartSize>((config.chart_width, config.chart_height));
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
