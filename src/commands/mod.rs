pub mod coin;
pub mod compare;
pub mod help;

use serenity::http::HttpError;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use thiserror::Error;

use crate::api::CoinGeckoClient;

/// Shared client and chart size stored in the serenity context
pub async fn app_state(ctx: &Context) -> Result<(CoinGeckoClient, (u32, u32)), String> {
    let data = ctx.data.read().await;
    let client = data
        .get::<crate::CoinGecko>()
        .ok_or("CoinGecko client not initialized".to_string())?
        .clone();
    let chart_size = *data
        .get::<crate::ChartSize>()
        .ok_or("Chart size not initialized".to_string())?;
    Ok((client, chart_size))
}

/// Failure of a command, either a message meant for the user or a Discord API error
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    User(String),
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        CommandError::User(message)
    }
}

impl CommandError {
    /// Text shown to the user in the error embed
    pub fn user_message(&self) -> String {
        match self {
            CommandError::User(message) if !message.is_empty() => message.clone(),
            CommandError::User(_) => "❌ An error occurred while executing the command.".to_string(),
            CommandError::Discord(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 429 =>
            {
                "⚠️ **Rate Limited**: Discord is rate limiting us. Please try again in a moment.".to_string()
            }
            CommandError::Discord(serenity::Error::Http(HttpError::Request(_))) => {
                "⚠️ **Network Error**: Having trouble connecting to Discord. Please try again.".to_string()
            }
            CommandError::Discord(_) => "❌ An error occurred while talking to Discord.".to_string(),
        }
    }
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    // Parse command and arguments
    let parts: Vec<&str> = msg.content.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "$coin" | "$details" | "$stock" => coin::execute(ctx, msg, args).await,
        "$compare" | "$cmp" => compare::execute(ctx, msg, args).await,
        "$help" => help::execute(ctx, msg).await,
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("❌ Error executing command {}: {}", command, e);

        let embed = serenity::builder::CreateEmbed::default()
            .title("Command Error")
            .description(e.user_message())
            .color(0xff0000);

        let _ = msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}
