//! Resampling raw bars into coarser bars.

use crate::{
    config::AggregationFactor,
    domain::Candle,
    models::OhlcTimeSeries,
    utils::TimeUtils,
};

/// Collapse every `factor` consecutive bars into one, starting at index 0.
///
/// Each output bar opens with the chunk's first open, closes with its last close,
/// spans the chunk's extreme high and low, and is stamped with the first bar's
/// timestamp. A trailing chunk shorter than `factor` is still emitted.
/// A factor of 1 hands the input back untouched.
pub fn aggregate_candles(series: OhlcTimeSeries, factor: AggregationFactor) -> OhlcTimeSeries {
    if factor.is_identity() {
        return series;
    }

    let width = factor.get();
    let len = series.klines();
    let mut aggregated = OhlcTimeSeries::empty(
        &series.symbol,
        series.interval_ms.saturating_mul(width as i64),
    );

    for start in (0..len).step_by(width) {
        let end = (start + width).min(len);
        aggregated.push(aggregate_chunk(&series, start, end));
    }

    log::debug!(
        "{}: aggregated {} bars into {} {} bars ({})",
        series.symbol,
        len,
        aggregated.klines(),
        TimeUtils::interval_to_string(aggregated.interval_ms),
        factor
    );
    aggregated
}

// `start..end` must be non-empty.
fn aggregate_chunk(series: &OhlcTimeSeries, start: usize, end: usize) -> Candle {
    let last = end - 1;
    let high = series.high_prices[start + 1..end]
        .iter()
        .fold(series.high_prices[start], |acc, &h| acc.max(h));
    let low = series.low_prices[start + 1..end]
        .iter()
        .fold(series.low_prices[start], |acc, &l| acc.min(l));

    Candle::new(
        series.timestamps[start],
        series.open_prices[start],
        high,
        low,
        series.close_prices[last],
    )
}
