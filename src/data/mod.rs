mod csv_file;
mod provider;

pub use {
    csv_file::{CsvProvider, parse_candles},
    provider::MarketDataProvider,
};
