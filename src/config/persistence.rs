//! On-disk layout of raw price history
use crate::config::ProviderInterval;

/// Configuration for the CSV price provider
pub struct PriceDataConfig {
    /// Directory path holding one CSV per symbol and interval
    pub directory: &'static str,
    /// File extension (without the dot)
    pub extension: &'static str,
}

pub const PRICE_DATA: PriceDataConfig = PriceDataConfig {
    directory: "price_data",
    extension: "csv",
};

/// Generate the file name for one symbol at one interval
/// Example: "AAPL_1d.csv"
pub fn price_data_filename(symbol: &str, interval: ProviderInterval) -> String {
    format!(
        "{}_{}.{}",
        symbol.to_uppercase(),
        interval.code(),
        PRICE_DATA.extension
    )
}
