mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{TimeUtils, epoch_ms_to_date_string};

pub(crate) use maths_utils::round_to;
