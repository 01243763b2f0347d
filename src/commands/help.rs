use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::CommandError;
use crate::models::ComparisonWindow;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), CommandError> {
    let embed = CreateEmbed::default()
        .title("📖 Pick an App you want to try")
        .description("**coinview** - cryptocurrency price charts powered by CoinGecko.")
        .color(0x00b0f4)
        .field(
            "🪙 Coin Details",
            "`$coin <name>` - One-year price chart with maximum and minimum prices\nAliases: `$details`, `$stock`",
            false,
        )
        .field(
            "⚖️ Coin Comparison",
            format!(
                "`$compare <coin> vs <coin> [window]` - Overlay two coins on one chart\nWindows: {}\nAlias: `$cmp`",
                ComparisonWindow::labels()
            ),
            false,
        )
        .field(
            "🎯 General",
            "`$help` - Show this help message\nCoin names are matched case-insensitively against CoinGecko's full coin list.",
            false,
        );

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await?;

    Ok(())
}
