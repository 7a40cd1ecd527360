// Pure transforms over in-memory series
mod aggregate;
mod pipeline;
mod relative;

pub use aggregate::aggregate_candles;
pub use pipeline::relative_pipeline;
pub use relative::{AlignedRow, Leg, RelativeError, align_series, calculate_relative_candles};
