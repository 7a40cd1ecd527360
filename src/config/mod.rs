//! Configuration module for the relative candles application.

// Can all be private now because we have a public re-export.
mod persistence;
mod timeframe;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{DEFAULT_BENCHMARK, LOG_PERFORMANCE, OUTPUT_DECIMALS};
pub use persistence::{PRICE_DATA, PriceDataConfig, price_data_filename};
pub use timeframe::{ProviderInterval, Timeframe, TimeframeSpec, TimeframeTable};
pub use types::{AggregationFactor, ClosePrice, HighPrice, LowPrice, OpenPrice, PriceLike};
