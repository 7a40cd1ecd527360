use {
    crate::{config::DEFAULT_BENCHMARK, domain::RelativeCandle},
    serde::{Deserialize, Serialize},
};

/// A request for one relative strength chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandlesRequest {
    pub symbol: String,
    pub timeframe: String,
    #[serde(default = "default_benchmark")]
    pub benchmark: String,
}

fn default_benchmark() -> String {
    DEFAULT_BENCHMARK.to_string()
}

impl CandlesRequest {
    /// The benchmark is upper-cased; the symbol is echoed back as given.
    pub fn new(symbol: &str, timeframe: &str, benchmark: Option<&str>) -> Self {
        Self {
            symbol: symbol.trim().to_string(),
            timeframe: timeframe.trim().to_string(),
            benchmark: benchmark
                .unwrap_or(DEFAULT_BENCHMARK)
                .trim()
                .to_uppercase(),
        }
    }
}

/// The chart returned to the consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlesResponse {
    pub symbol: String,
    pub benchmark: String,
    pub timeframe: String,
    pub candles: Vec<RelativeCandle>,
}

/// What a failed request serializes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl<E: std::fmt::Display> From<&E> for ErrorResponse {
    fn from(err: &E) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}
