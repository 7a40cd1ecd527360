use {
    crate::{domain::SeriesRequest, models::OhlcTimeSeries},
    anyhow::Result,
    async_trait::async_trait,
};

/// Abstract interface for fetching raw price history.
///
/// `Ok(None)` means the provider has nothing for this request (unknown symbol,
/// empty range). `Err` means the fetch itself failed. Callers treat both as
/// unusable input and do not retry.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Option<OhlcTimeSeries>>;
}
