use crate::{config::ProviderInterval, utils::epoch_ms_to_date_string};

/// What to ask a provider for: one symbol at one bar width over `[start_ms, end_ms)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesRequest {
    pub symbol: String,
    pub interval: ProviderInterval,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl SeriesRequest {
    pub fn new(symbol: &str, interval: ProviderInterval, start_ms: i64, end_ms: i64) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            interval,
            start_ms,
            end_ms,
        }
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        (self.start_ms..self.end_ms).contains(&timestamp_ms)
    }
}

impl std::fmt::Display for SeriesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} [{} .. {})",
            self.symbol,
            self.interval,
            epoch_ms_to_date_string(self.start_ms),
            epoch_ms_to_date_string(self.end_ms)
        )
    }
}
