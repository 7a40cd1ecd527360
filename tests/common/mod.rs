#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use relative_candles::{
    Candle, MarketDataProvider, OhlcTimeSeries, domain::SeriesRequest, utils::TimeUtils,
};
use std::collections::HashMap;

/// 2024-01-02T00:00:00Z, inside every default date range.
pub const T0: i64 = 1_704_153_600_000;
pub const H: i64 = TimeUtils::MS_IN_H;
pub const D: i64 = TimeUtils::MS_IN_D;

/// Serves canned candles keyed by symbol, ignoring interval and range.
#[derive(Default)]
pub struct MemoryProvider {
    series: HashMap<String, Vec<Candle>>,
    failing: Vec<String>,
}

impl MemoryProvider {
    pub fn with(mut self, symbol: &str, candles: Vec<Candle>) -> Self {
        self.series.insert(symbol.to_string(), candles);
        self
    }

    pub fn failing(mut self, symbol: &str) -> Self {
        self.failing.push(symbol.to_string());
        self
    }
}

#[async_trait]
impl MarketDataProvider for MemoryProvider {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Option<OhlcTimeSeries>> {
        if self.failing.contains(&request.symbol) {
            bail!("provider unavailable for {}", request.symbol);
        }
        match self.series.get(&request.symbol) {
            Some(candles) => OhlcTimeSeries::for_request(request, candles.clone()).map(Some),
            None => Ok(None),
        }
    }
}

/// Flat bars (O = H = L = C) at `step` spacing from T0.
pub fn flat(closes: &[f64], step: i64) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Candle::new(T0 + i as i64 * step, c, c, c, c))
        .collect()
}
