use {
    crate::{
        analysis::{RelativeError, aggregate_candles, calculate_relative_candles},
        config::{AggregationFactor, constants::SLOW_PIPELINE_MICROS},
        domain::RelativeCandle,
        models::OhlcTimeSeries,
    },
};

/// Resample both legs with the same factor, then derive the relative series.
pub fn relative_pipeline(
    instrument: OhlcTimeSeries,
    benchmark: OhlcTimeSeries,
    factor: AggregationFactor,
) -> Result<Vec<RelativeCandle>, RelativeError> {
    crate::trace_time!("Relative pipeline", SLOW_PIPELINE_MICROS, {
        let instrument = aggregate_candles(instrument, factor);
        let benchmark = aggregate_candles(benchmark, factor);
        calculate_relative_candles(&instrument, &benchmark)
    })
}
