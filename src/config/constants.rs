// Top Level Constants

/// Benchmark used when a request does not name one.
pub const DEFAULT_BENCHMARK: &str = "QQQ";

/// Decimal places kept on every emitted relative price.
pub const OUTPUT_DECIMALS: u32 = 2;

/// Activates the `trace_time!` macro.
pub const LOG_PERFORMANCE: bool = true;

/// Pipeline runs slower than this (micros) get logged by `trace_time!`.
pub const SLOW_PIPELINE_MICROS: u128 = 50_000;
