use serenity::builder::{CreateAttachment, CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use super::CommandError;
use crate::models::{PriceSeries, Summary};
use crate::services::chart_service::{self, ChartLine};
use crate::services::{resolver_service, series_service, summary_service};

/// The details view always looks back one year
pub const DETAILS_DAYS: u32 = 365;

pub const NOT_FOUND_MESSAGE: &str = "❌ Cryptocurrency not found. Please enter a valid name.";
pub const FETCH_FAILED_MESSAGE: &str = "❌ Unable to fetch historical price data. Please try again later.";

/// Embed fields describing a summary, prices rounded to cents
pub fn summary_fields(summary: &Summary) -> Vec<(&'static str, String, bool)> {
    vec![
        ("Maximum Price", format!("${:.2}", summary.max_price), true),
        ("Minimum Price", format!("${:.2}", summary.min_price), true),
        ("\u{200b}", "\u{200b}".to_string(), true),
        ("Date of Maximum Price", summary.max_date.format("%Y-%m-%d").to_string(), true),
        ("Date of Minimum Price", summary.min_date.format("%Y-%m-%d").to_string(), true),
        ("\u{200b}", "\u{200b}".to_string(), true),
    ]
}

/// Footer text describing the span a series covers
pub fn series_footer(series: &PriceSeries) -> String {
    format!(
        "{} price points from {} to {} ({} days, USD)",
        series.len(),
        series.first().timestamp.format("%Y-%m-%d"),
        series.last().timestamp.format("%Y-%m-%d"),
        series.days()
    )
}

pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), CommandError> {
    tracing::info!("🪙 Coin command called with args: {:?}", args);

    if args.is_empty() {
        let help_embed = CreateEmbed::default()
            .title("🪙 Coin Details")
            .description("Show a one-year price chart with the highest and lowest prices for a cryptocurrency")
            .field("Usage", "`$coin <name>`", false)
            .field("Examples", "`$coin Bitcoin`\n`$coin ethereum`\n`$coin Bitcoin Cash`", false)
            .color(0x00ff00);

        msg.channel_id
            .send_message(ctx, CreateMessage::default().embed(help_embed))
            .await?;
        return Ok(());
    }

    let coin_name = args.join(" ");
    let (client, (width, height)) = super::app_state(ctx).await?;

    let coin_id = resolver_service::resolve_coin_id(&client, &coin_name)
        .await
        .ok_or_else(|| NOT_FOUND_MESSAGE.to_string())?;

    msg.channel_id
        .say(ctx, format!("Fetching data for {}...", coin_name))
        .await?;

    if let Err(e) = msg.channel_id.broadcast_typing(&ctx.http).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let series = series_service::fetch_series(&client, &coin_id, DETAILS_DAYS)
        .await
        .ok_or_else(|| FETCH_FAILED_MESSAGE.to_string())?;

    let summary = summary_service::summarize(&series);

    let title = format!("{} Price Over Last Year", coin_name);
    let chart_data = chart_service::render_price_chart(
        &title,
        &[ChartLine { label: &coin_name, series: &series }],
        width,
        height,
    )?;
    tracing::info!("✓ Chart generated for '{}': {} bytes", coin_id, chart_data.len());

    let filename = format!("{}_price.png", coin_id);
    let embed = CreateEmbed::default()
        .title(format!("📈 {}", title))
        .description("**Additional Details**")
        .fields(summary_fields(&summary))
        .image(format!("attachment://{}", filename))
        .footer(CreateEmbedFooter::new(series_footer(&series)))
        .color(0x00ff00);

    msg.channel_id
        .send_message(
            ctx,
            CreateMessage::default()
                .add_file(CreateAttachment::bytes(chart_data, filename))
                .embed(embed),
        )
        .await?;

    tracing::info!("✓ Coin details sent for '{}'", coin_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoinId, PricePoint};
    use chrono::{DateTime, NaiveDate};

    #[test]
    fn test_summary_fields() {
        let summary = Summary {
            max_price: 150.0,
            min_price: 89.996,
            max_date: NaiveDate::from_ymd_opt(1970, 1, 2).unwrap(),
            min_date: NaiveDate::from_ymd_opt(1970, 1, 3).unwrap(),
        };

        let fields = summary_fields(&summary);
        let value = |name: &str| fields.iter().find(|f| f.0 == name).map(|f| f.1.clone());

        assert_eq!(value("Maximum Price").as_deref(), Some("$150.00"));
        assert_eq!(value("Minimum Price").as_deref(), Some("$90.00"));
        assert_eq!(value("Date of Maximum Price").as_deref(), Some("1970-01-02"));
        assert_eq!(value("Date of Minimum Price").as_deref(), Some("1970-01-03"));
    }

    #[test]
    fn test_series_footer() {
        let points = [0i64, 86_400_000, 172_800_000]
            .iter()
            .map(|&millis| PricePoint {
                timestamp: DateTime::from_timestamp_millis(millis).unwrap(),
                price: 1.0,
            })
            .collect();
        let series = PriceSeries::new(CoinId::new("btc"), DETAILS_DAYS, points).unwrap();

        assert_eq!(
            series_footer(&series),
            "3 price points from 1970-01-01 to 1970-01-03 (365 days, USD)"
        );
    }
}
