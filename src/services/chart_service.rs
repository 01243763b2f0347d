use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;

use crate::models::PriceSeries;

const LINE_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// (time range, price range)
pub type ChartBounds = ((DateTime<Utc>, DateTime<Utc>), (f64, f64));

/// One labelled line on a price chart
#[derive(Debug, Clone, Copy)]
pub struct ChartLine<'a> {
    pub label: &'a str,
    pub series: &'a PriceSeries,
}

/// X and Y bounds covering every line, with 10% price padding.
///
/// A zero-width time span is widened by a day so the axis stays drawable.
pub fn chart_bounds(lines: &[ChartLine<'_>]) -> Option<ChartBounds> {
    let points = lines.iter().flat_map(|l| l.series.points());

    let mut x_min: Option<DateTime<Utc>> = None;
    let mut x_max: Option<DateTime<Utc>> = None;
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;

    for p in points {
        x_min = Some(x_min.map_or(p.timestamp, |t| t.min(p.timestamp)));
        x_max = Some(x_max.map_or(p.timestamp, |t| t.max(p.timestamp)));
        min_price = min_price.min(p.price);
        max_price = max_price.max(p.price);
    }

    let (x_min, mut x_max) = (x_min?, x_max?);
    if x_max <= x_min {
        x_max = x_min + Duration::days(1);
    }

    // Avoid a flat range when every price is equal
    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    Some(((x_min, x_max), (y_min, y_max)))
}

/// Render price lines into a PNG image.
///
/// Every call builds its own backend and chart; nothing is shared between renders.
pub fn render_price_chart(
    title: &str,
    lines: &[ChartLine<'_>],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    let ((x_min, x_max), (y_min, y_max)) =
        chart_bounds(lines).ok_or_else(|| "❌ No price data to chart.".to_string())?;

    let temp_file = std::env::temp_dir().join(format!("coinview_chart_{}.png", uuid::Uuid::new_v4()));

    let drawn = draw_chart(&temp_file, title, lines, (x_min, x_max), (y_min, y_max), width, height);

    let image_data = drawn.and_then(|_| {
        std::fs::read(&temp_file).map_err(|e| format!("Failed to read chart file: {}", e))
    });

    let _ = std::fs::remove_file(&temp_file);

    image_data
}

fn draw_chart(
    path: &std::path::Path,
    title: &str,
    lines: &[ChartLine<'_>],
    (x_min, x_max): (DateTime<Utc>, DateTime<Utc>),
    (y_min, y_max): (f64, f64),
    width: u32,
    height: u32,
) -> Result<(), String> {
    let backend = BitMapBackend::new(path, (width, height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price (USD)")
        .x_label_formatter(&|d: &DateTime<Utc>| d.format("%Y-%m-%d").to_string())
        .y_label_formatter(&|p: &f64| format!("${:.2}", p))
        .draw()
        .map_err(|e| format!("Failed to draw mesh: {}", e))?;

    for (i, line) in lines.iter().enumerate() {
        let color = LINE_COLORS[i % LINE_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                line.series.points().iter().map(|p| (p.timestamp, p.price)),
                color.stroke_width(2),
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if lines.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| format!("Failed to draw legend: {}", e))?;
    }

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;

    Ok(())
}
