mod messages;
mod service;

pub use messages::{CandlesRequest, CandlesResponse, ErrorResponse};
pub use service::{RelativeChartService, RequestError};
