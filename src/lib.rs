#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{RelativeError, aggregate_candles, calculate_relative_candles, relative_pipeline};
pub use data::{CsvProvider, MarketDataProvider};
pub use domain::{Candle, RelativeCandle};
pub use engine::{CandlesRequest, CandlesResponse, ErrorResponse, RelativeChartService, RequestError};
pub use models::OhlcTimeSeries;

// CLI argument parsing
use {
    clap::Parser,
    config::{DEFAULT_BENCHMARK, PRICE_DATA, TimeframeTable},
    std::path::PathBuf,
    ui::{OutputFormat, render_error, render_response},
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Instrument symbol, e.g. AAPL
    pub symbol: String,

    /// Chart timeframe: 1m, 15m, 1h, 4h, 1d, 1w or 1mo
    #[arg(default_value = "1d")]
    pub timeframe: String,

    /// Benchmark symbol the instrument is measured against
    #[arg(long, short, default_value = DEFAULT_BENCHMARK)]
    pub benchmark: String,

    /// Directory holding {SYMBOL}_{interval}.csv price files
    #[arg(long, default_value = PRICE_DATA.directory)]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Command line entry point. Returns the text to print and whether the request succeeded.
pub async fn run_cli(args: Cli) -> anyhow::Result<(String, bool)> {
    let service = RelativeChartService::new(CsvProvider::new(&args.data_dir), TimeframeTable::default());
    let request = CandlesRequest::new(&args.symbol, &args.timeframe, Some(&args.benchmark));

    match service.candles(&request).await {
        Ok(response) => Ok((render_response(&response, args.format)?, true)),
        Err(e) => {
            log::warn!("Request for {} failed: {}", request.symbol, e);
            Ok((render_error(&ErrorResponse::from(&e), args.format)?, false))
        }
    }
}
