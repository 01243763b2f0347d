use crate::models::{PriceSeries, Summary};

/// Compute max/min price and the UTC dates they occurred on.
///
/// Ties go to the earliest point in series order.
pub fn summarize(series: &PriceSeries) -> Summary {
    let points = series.points();
    let mut max = &points[0];
    let mut min = &points[0];

    for point in &points[1..] {
        if point.price > max.price {
            max = point;
        }
        if point.price < min.price {
            min = point;
        }
    }

    Summary {
        max_price: max.price,
        min_price: min.price,
        max_date: max.timestamp.date_naive(),
        min_date: min.timestamp.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoinId, PricePoint};
    use chrono::{DateTime, NaiveDate};
    use proptest::prelude::*;

    fn series_from(rows: &[(i64, f64)]) -> PriceSeries {
        let points = rows
            .iter()
            .map(|&(millis, price)| PricePoint {
                timestamp: DateTime::from_timestamp_millis(millis).unwrap(),
                price,
            })
            .collect();
        PriceSeries::new(CoinId::new("btc"), 7, points).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summarize_three_days() {
        let series = series_from(&[(0, 100.0), (86_400_000, 150.0), (172_800_000, 90.0)]);
        let summary = summarize(&series);

        assert_eq!(summary.max_price, 150.0);
        assert_eq!(summary.max_date, date(1970, 1, 2));
        assert_eq!(summary.min_price, 90.0);
        assert_eq!(summary.min_date, date(1970, 1, 3));
    }

    #[test]
    fn test_summarize_ties_pick_first() {
        let series = series_from(&[(0, 5.0), (86_400_000, 5.0), (172_800_000, 5.0)]);
        let summary = summarize(&series);

        assert_eq!(summary.max_date, date(1970, 1, 1));
        assert_eq!(summary.min_date, date(1970, 1, 1));
    }

    #[test]
    fn test_summarize_single_point() {
        let series = series_from(&[(1_704_067_200_000, 42000.5)]);
        let summary = summarize(&series);

        assert_eq!(summary.max_price, summary.min_price);
        assert_eq!(summary.max_date, date(2024, 1, 1));
    }

    #[test]
    fn test_summarize_drops_time_of_day() {
        // 1970-01-01 23:59:59.999
        let series = series_from(&[(86_399_999, 1.0), (86_400_000, 0.5)]);
        let summary = summarize(&series);

        assert_eq!(summary.max_date, date(1970, 1, 1));
        assert_eq!(summary.min_date, date(1970, 1, 2));
    }

    #[tokio::test]
    async fn test_resolve_fetch_summarize_pipeline() {
        use crate::api::CoinGeckoClient;
        use crate::services::{resolver_service, series_service};
        use crate::test_support::StubServer;

        let server = StubServer::start(vec![
            ("/coins/list", 200, r#"[{"id":"btc","name":"Bitcoin"}]"#),
            (
                "/coins/btc/market_chart",
                200,
                r#"{"prices":[[0,100],[86400000,150],[172800000,90]]}"#,
            ),
        ])
        .await;
        let client = CoinGeckoClient::with_base_url("CG-test".into(), server.base_url.clone());

        let id = resolver_service::resolve_coin_id(&client, "bitcoin").await.unwrap();
        let series = series_service::fetch_series(&client, &id, 365).await.unwrap();
        let summary = summarize(&series);

        assert_eq!(id.as_str(), "btc");
        assert_eq!(summary.max_price, 150.0);
        assert_eq!(summary.max_date, date(1970, 1, 2));
        assert_eq!(summary.min_price, 90.0);
        assert_eq!(summary.min_date, date(1970, 1, 3));
        assert_eq!(server.hits("/coins/list"), 1);
        assert_eq!(server.hits("/coins/btc/market_chart"), 1);
    }

    proptest! {
        #[test]
        fn prop_extremes_bound_every_point(
            rows in prop::collection::vec((0i64..4_000_000_000_000, 0.0f64..1.0e7), 1..64)
        ) {
            let series = series_from(&rows);
            let summary = summarize(&series);

            for point in series.points() {
                prop_assert!(summary.max_price >= point.price);
                prop_assert!(summary.min_price <= point.price);
            }
        }

        #[test]
        fn prop_dates_are_attained(
            rows in prop::collection::vec((0i64..4_000_000_000_000, 0.0f64..1.0e7), 1..64)
        ) {
            let series = series_from(&rows);
            let summary = summarize(&series);

            let max_attained = series
                .points()
                .iter()
                .any(|p| p.price == summary.max_price && p.timestamp.date_naive() == summary.max_date);
            let min_attained = series
                .points()
                .iter()
                .any(|p| p.price == summary.min_price && p.timestamp.date_naive() == summary.min_date);
            prop_assert!(max_attained);
            prop_assert!(min_attained);
        }
    }
}
