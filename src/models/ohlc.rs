use {
    crate::{
        config::{ClosePrice, HighPrice, LowPrice, OpenPrice},
        domain::{Candle, SeriesRequest},
    },
    anyhow::{Result, bail},
};

/// Column-oriented OHLC history for one symbol at one bar width.
/// Timestamps are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcTimeSeries {
    pub symbol: String,
    pub interval_ms: i64,
    pub timestamps: Vec<i64>,
    pub open_prices: Vec<OpenPrice>,
    pub high_prices: Vec<HighPrice>,
    pub low_prices: Vec<LowPrice>,
    pub close_prices: Vec<ClosePrice>,
}

impl OhlcTimeSeries {
    pub fn empty(symbol: &str, interval_ms: i64) -> Self {
        Self {
            symbol: symbol.to_string(),
            interval_ms,
            timestamps: vec![],
            open_prices: vec![],
            high_prices: vec![],
            low_prices: vec![],
            close_prices: vec![],
        }
    }

    pub fn for_request(request: &SeriesRequest, candles: Vec<Candle>) -> Result<Self> {
        Self::from_candles(&request.symbol, request.interval.duration_ms(), candles)
    }

    /// Build from row-oriented candles. Rejects out-of-order or duplicate timestamps.
    pub fn from_candles(symbol: &str, interval_ms: i64, candles: Vec<Candle>) -> Result<Self> {
        let len = candles.len();
        let mut series = Self::empty(symbol, interval_ms);
        series.timestamps.reserve(len);
        series.open_prices.reserve(len);
        series.high_prices.reserve(len);
        series.low_prices.reserve(len);
        series.close_prices.reserve(len);

        for c in candles {
            if let Some(&last) = series.timestamps.last() {
                if c.timestamp_ms <= last {
                    bail!(
                        "{}: timestamp {} does not follow {} (series must be strictly increasing)",
                        symbol,
                        c.timestamp_ms,
                        last
                    );
                }
            }
            series.push(c);
        }

        Ok(series)
    }

    pub(crate) fn push(&mut self, c: Candle) {
        self.timestamps.push(c.timestamp_ms);
        self.open_prices.push(c.open_price);
        self.high_prices.push(c.high_price);
        self.low_prices.push(c.low_price);
        self.close_prices.push(c.close_price);
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
        )
    }

    pub fn candles(&self) -> impl Iterator<Item = Candle> + '_ {
        (0..self.klines()).map(|idx| self.get_candle(idx))
    }

    pub fn klines(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn sample() -> Vec<Candle> {
        vec![
            Candle::new(0, 10.0, 12.0, 9.0, 11.0),
            Candle::new(60_000, 11.0, 13.0, 10.0, 12.0),
        ]
    }

    #[test]
    fn from_candles_keeps_rows_aligned() {
        let series = OhlcTimeSeries::from_candles("AAPL", TimeUtils::MS_IN_MIN, sample()).unwrap();
        assert_eq!(series.klines(), 2);
        assert_eq!(series.get_candle(1), sample()[1]);
        assert_eq!(series.candles().collect::<Vec<_>>(), sample());
    }

    #[test]
    fn rejects_unsorted_or_duplicate_timestamps() {
        let mut rows = sample();
        rows.reverse();
        assert!(OhlcTimeSeries::from_candles("AAPL", 1, rows).is_err());

        let dup = vec![Candle::new(5, 1.0, 1.0, 1.0, 1.0); 2];
        assert!(OhlcTimeSeries::from_candles("AAPL", 1, dup).is_err());
    }

    #[test]
    fn empty_series() {
        let series = OhlcTimeSeries::from_candles("QQQ", 1, vec![]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series, OhlcTimeSeries::empty("QQQ", 1));
    }
}
