// Domain types and value objects
mod candle;
mod relative_candle;
mod series_request;

// Re-export commonly used types to the world
pub use candle::Candle;
pub use relative_candle::RelativeCandle;
pub use series_request::SeriesRequest;
