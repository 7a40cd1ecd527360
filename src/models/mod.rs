mod ohlc;

pub use ohlc::OhlcTimeSeries;
