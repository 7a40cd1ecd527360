//! Relative strength candles: the instrument's excess return over a benchmark,
//! drawn as an OHLC series anchored to the instrument's first aligned close.

use {
    crate::{
        config::{ClosePrice, OUTPUT_DECIMALS, PriceLike},
        domain::{Candle, RelativeCandle},
        models::OhlcTimeSeries,
        utils::{TimeUtils, round_to},
    },
    itertools::{EitherOrBoth, Itertools},
    strum_macros::Display,
    thiserror::Error,
};

/// Which side of the comparison a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Leg {
    #[strum(to_string = "instrument")]
    Instrument,
    #[strum(to_string = "benchmark")]
    Benchmark,
}

/// Structural reasons a relative series cannot be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelativeError {
    #[error("{0} series is missing or empty")]
    UnavailableInput(Leg),
    #[error("instrument and benchmark share no usable timestamps")]
    NoOverlap,
}

/// One timestamp present in both series with all eight prices usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedRow {
    pub timestamp_ms: i64,
    pub stock: Candle,
    pub bench: Candle,
}

/// Inner join on exact timestamp equality, ascending. Rows with a hole on either
/// side are dropped.
pub fn align_series(instrument: &OhlcTimeSeries, benchmark: &OhlcTimeSeries) -> Vec<AlignedRow> {
    let joined: Vec<(usize, usize)> = instrument
        .timestamps
        .iter()
        .enumerate()
        .merge_join_by(benchmark.timestamps.iter().enumerate(), |(_, a), (_, b)| {
            a.cmp(b)
        })
        .filter_map(|pair| match pair {
            EitherOrBoth::Both((i, _), (j, _)) => Some((i, j)),
            _ => None,
        })
        .collect();

    log::info!(
        "{} vs {}: {} rows after merge",
        instrument.symbol,
        benchmark.symbol,
        joined.len()
    );

    let rows: Vec<AlignedRow> = joined
        .into_iter()
        .map(|(i, j)| AlignedRow {
            timestamp_ms: instrument.timestamps[i],
            stock: instrument.get_candle(i),
            bench: benchmark.get_candle(j),
        })
        .filter(|row| row.stock.is_complete() && row.bench.is_complete())
        .collect();

    log::info!(
        "{} vs {}: {} rows after dropping incomplete bars",
        instrument.symbol,
        benchmark.symbol,
        rows.len()
    );
    rows
}

/// Derive the relative strength series.
///
/// For every aligned row the excess return is the instrument's cumulative close
/// return minus the benchmark's, both measured from the first aligned row. The
/// relative close is the instrument's base close grown by that excess; open, high
/// and low scale the excess by the instrument's own intraday shape (each price
/// over its close) before applying it.
///
/// Fails rather than returning an empty series when either input is empty or the
/// two never line up.
pub fn calculate_relative_candles(
    instrument: &OhlcTimeSeries,
    benchmark: &OhlcTimeSeries,
) -> Result<Vec<RelativeCandle>, RelativeError> {
    if instrument.is_empty() {
        log::warn!("{}: instrument series is empty", instrument.symbol);
        return Err(RelativeError::UnavailableInput(Leg::Instrument));
    }
    if benchmark.is_empty() {
        log::warn!("{}: benchmark series is empty", benchmark.symbol);
        return Err(RelativeError::UnavailableInput(Leg::Benchmark));
    }

    let rows = align_series(instrument, benchmark);
    let Some(first) = rows.first() else {
        log::warn!(
            "{} vs {}: no overlapping data after alignment",
            instrument.symbol,
            benchmark.symbol
        );
        return Err(RelativeError::NoOverlap);
    };

    let base_stock_close = first.stock.close_price;
    let base_bench_close = first.bench.close_price;
    log::info!(
        "Base stock close: {}, base benchmark close: {}",
        base_stock_close,
        base_bench_close
    );
    if base_stock_close.is_zero() || base_bench_close.is_zero() {
        log::warn!(
            "{} vs {}: zero baseline close, that leg contributes no return",
            instrument.symbol,
            benchmark.symbol
        );
    }

    let candles: Vec<RelativeCandle> = rows
        .iter()
        .map(|row| relative_candle(row, base_stock_close, base_bench_close))
        .collect();

    log::info!("Generated {} relative candles", candles.len());
    Ok(candles)
}

fn relative_candle(
    row: &AlignedRow,
    base_stock_close: ClosePrice,
    base_bench_close: ClosePrice,
) -> RelativeCandle {
    // Zero baselines are absorbed by return_since as a zero contribution.
    let stock_return = row.stock.close_price.return_since(&base_stock_close);
    let bench_return = row.bench.close_price.return_since(&base_bench_close);
    let excess = stock_return - bench_return;

    // Intentionally asymmetric: only the instrument's intraday shape scales the
    // excess. The benchmark's own open/high/low ratios are not applied. Keep this
    // until the owner of the chart confirms otherwise.
    let (open_ratio, high_ratio, low_ratio) = row.stock.ratios_to_close();

    let anchor = |scale: f64| round_to(base_stock_close * (1.0 + excess * scale), OUTPUT_DECIMALS);

    // No reordering: the emitted high is not guaranteed to be the largest price.
    RelativeCandle {
        time: TimeUtils::epoch_ms_to_secs(row.timestamp_ms),
        open: anchor(open_ratio),
        high: anchor(high_ratio),
        low: anchor(low_ratio),
        close: anchor(1.0),
    }
}
