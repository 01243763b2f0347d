use serenity::builder::{CreateAttachment, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::coin::summary_fields;
use super::CommandError;
use crate::models::ComparisonWindow;
use crate::services::chart_service::{self, ChartLine};
use crate::services::{comparison_service, summary_service};

pub const COMPARE_FAILED_MESSAGE: &str =
    "❌ Unable to fetch historical price data for one or both cryptocurrencies. Please try again later.";

/// Parsed `$compare` arguments
#[derive(Debug, PartialEq)]
pub struct CompareArgs {
    pub first: String,
    pub second: String,
    pub window: ComparisonWindow,
}

fn usage() -> String {
    format!(
        "❌ Usage: `$compare <coin> vs <coin> [window]`\nWindows: {}",
        ComparisonWindow::labels()
    )
}

/// Parse `<coin> vs <coin> [window]`. Coin names may contain spaces.
///
/// The window defaults to `1 week`. A trailing `<number> <unit>` that is not
/// one of the known windows is rejected rather than read as part of a name.
pub fn parse_compare_args(args: &[&str]) -> Result<CompareArgs, String> {
    let split = args
        .iter()
        .position(|a| a.eq_ignore_ascii_case("vs"))
        .ok_or_else(usage)?;

    let first = args[..split].join(" ");
    let mut rest = &args[split + 1..];
    let mut window = ComparisonWindow::default();

    if rest.len() >= 2 {
        let tail = &rest[rest.len() - 2..];
        if tail[0].chars().all(|c| c.is_ascii_digit()) {
            window = ComparisonWindow::from_label(&tail.join(" ")).ok_or_else(|| {
                format!(
                    "❌ Unknown time frame '{}'. Use one of: {}",
                    tail.join(" "),
                    ComparisonWindow::labels()
                )
            })?;
            rest = &rest[..rest.len() - 2];
        }
    }

    let second = rest.join(" ");
    if first.is_empty() || second.is_empty() {
        return Err(usage());
    }

    Ok(CompareArgs { first, second, window })
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), CommandError> {
    tracing::info!("⚖️ Compare command called with args: {:?}", args);

    if args.is_empty() {
        let help_embed = CreateEmbed::default()
            .title("⚖️ Coin Comparison")
            .description("Overlay the price history of two cryptocurrencies on one chart")
            .field("Usage", "`$compare <coin> vs <coin> [window]`", false)
            .field("Examples", "`$compare Bitcoin vs Ethereum`\n`$compare bitcoin vs dogecoin 1 year`", false)
            .field("Windows", format!("{} (default `1 week`)", ComparisonWindow::labels()), false)
            .color(0x00ff00);

        msg.channel_id
            .send_message(ctx, CreateMessage::default().embed(help_embed))
            .await?;
        return Ok(());
    }

    let CompareArgs { first, second, window } = parse_compare_args(args)?;
    let (client, (width, height)) = super::app_state(ctx).await?;

    msg.channel_id
        .say(ctx, format!("Fetching data for {} and {}...", first, second))
        .await?;

    if let Err(e) = msg.channel_id.broadcast_typing(&ctx.http).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let result = comparison_service::compare(&client, &first, &second, window).await;
    let (first_series, second_series) = match result.both() {
        Some(pair) => pair,
        None => {
            tracing::warn!(
                "Comparison incomplete: '{}' present={}, '{}' present={}",
                first,
                result.first.is_some(),
                second,
                result.second.is_some()
            );
            return Err(COMPARE_FAILED_MESSAGE.to_string().into());
        }
    };

    let title = format!("{} vs {} Price Comparison", first, second);
    let chart_data = chart_service::render_price_chart(
        &title,
        &[
            ChartLine { label: &first, series: first_series },
            ChartLine { label: &second, series: second_series },
        ],
        width,
        height,
    )?;
    tracing::info!("✓ Comparison chart generated: {} bytes", chart_data.len());

    let filename = format!("{}_vs_{}.png", first_series.coin_id(), second_series.coin_id());
    let mut embed = CreateEmbed::default()
        .title(format!("📊 {} ({})", title, result.window))
        .description("**Additional Details for Both Coins**")
        .image(format!("attachment://{}", filename))
        .footer(CreateEmbedFooter::new("Prices in USD from CoinGecko"))
        .color(0x00b0f4);

    for (name, series) in [(&first, first_series), (&second, second_series)] {
        let summary = summary_service::summarize(series);
        embed = embed
            .field(format!("**{}**", name), "\u{200b}", false)
            .fields(summary_fields(&summary));
    }

    msg.channel_id
        .send_message(
            ctx,
            CreateMessage::default()
                .add_file(CreateAttachment::bytes(chart_data, filename))
                .embed(embed),
        )
        .await?;

    tracing::info!("✓ Comparison sent for '{}' vs '{}'", first, second);
    Ok(())
}
