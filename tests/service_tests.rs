mod common;

use common::{D, H, MemoryProvider, T0, flat};
use relative_candles::{
    CandlesRequest, RelativeChartService, RequestError, analysis::RelativeError,
    config::TimeframeTable,
};
use rstest::rstest;

fn service(provider: MemoryProvider) -> RelativeChartService<MemoryProvider> {
    RelativeChartService::new(provider, TimeframeTable::default())
}

#[tokio::test]
async fn lower_case_benchmark_is_upper_cased_in_response() {
    let provider = MemoryProvider::default()
        .with("MSFT", flat(&[10.0, 11.0], D))
        .with("SPY", flat(&[20.0, 20.0], D));

    let response = service(provider)
        .candles(&CandlesRequest::new("MSFT", "1d", Some("spy")))
        .await
        .unwrap();

    assert_eq!((response.symbol.as_str(), response.benchmark.as_str()), ("MSFT", "SPY"));
    assert_eq!(response.candles[1].close, 11.0);
}

#[tokio::test]
async fn daily_chart_echoes_request_and_tracks_excess() {
    let provider = MemoryProvider::default()
        .with("AAPL", flat(&[100.0, 110.0, 120.0], D))
        .with("QQQ", flat(&[50.0, 50.0, 55.0], D));

    let response = service(provider)
        .candles(&CandlesRequest::new("aapl", "1d", None))
        .await
        .unwrap();

    // Lookup is case-insensitive but the symbol comes back as requested.
    assert_eq!(response.symbol, "aapl");
    assert_eq!(response.benchmark, "QQQ");
    assert_eq!(response.timeframe, "1d");

    let closes: Vec<f64> = response.candles.iter().map(|c| c.close).collect();
    // +10% vs 0%, then +20% vs +10%
    assert_eq!(closes, vec![100.0, 110.0, 110.0]);
    assert_eq!(response.candles[0].time, T0 / 1000);
}

#[tokio::test]
async fn four_hour_chart_aggregates_hourly_bars() {
    let provider = MemoryProvider::default()
        .with("AAPL", flat(&[10.0, 10.0, 10.0, 12.0, 12.0, 12.0, 12.0, 15.0], H))
        .with("SPY", flat(&[1.0; 8], H));

    let response = service(provider)
        .candles(&CandlesRequest::new("AAPL", "4h", Some("spy")))
        .await
        .unwrap();

    assert_eq!(response.benchmark, "SPY");
    assert_eq!(response.candles.len(), 2);
    assert_eq!(response.candles[0].close, 12.0);
    assert_eq!(response.candles[1].close, 15.0);
    assert_eq!(response.candles[1].time - response.candles[0].time, 4 * 3600);
}

#[rstest]
#[case("2h")]
#[case("1D")]
#[case("")]
#[tokio::test]
async fn unknown_timeframes_are_rejected(#[case] label: &str) {
    let err = service(MemoryProvider::default())
        .candles(&CandlesRequest::new("AAPL", label, None))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::InvalidTimeframe(_)));
    assert_eq!(err.to_string(), "Invalid timeframe");
}

#[tokio::test]
async fn missing_instrument_is_reported_before_benchmark() {
    let err = service(MemoryProvider::default())
        .candles(&CandlesRequest::new("NOPE", "1d", Some("ALSO")))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Could not fetch data for NOPE");
}

#[tokio::test]
async fn failing_benchmark_is_a_fetch_error() {
    let provider = MemoryProvider::default()
        .with("AAPL", flat(&[1.0, 2.0], D))
        .failing("QQQ");

    let err = service(provider)
        .candles(&CandlesRequest::new("AAPL", "1d", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::FetchFailed(ref s) if s == "QQQ"));
}

#[tokio::test]
async fn empty_series_counts_as_no_data() {
    let provider = MemoryProvider::default()
        .with("AAPL", vec![])
        .with("QQQ", flat(&[1.0], D));

    let err = service(provider)
        .candles(&CandlesRequest::new("AAPL", "1d", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::FetchFailed(_)));
}

#[tokio::test]
async fn disjoint_histories_report_no_overlap() {
    let mut later = flat(&[1.0, 1.0], D);
    for c in &mut later {
        c.timestamp_ms += 30 * D;
    }
    let provider = MemoryProvider::default()
        .with("AAPL", flat(&[1.0, 2.0], D))
        .with("QQQ", later);

    let err = service(provider)
        .candles(&CandlesRequest::new("AAPL", "1d", None))
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Relative(RelativeError::NoOverlap)));
    assert_eq!(
        err.to_string(),
        "Failed to calculate relative candles - possibly no overlapping data"
    );
}
