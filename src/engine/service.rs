use {
    crate::{
        analysis::{RelativeError, relative_pipeline},
        config::{TimeframeSpec, TimeframeTable},
        data::MarketDataProvider,
        domain::SeriesRequest,
        engine::{CandlesRequest, CandlesResponse},
        models::OhlcTimeSeries,
    },
    thiserror::Error,
};

/// Request-level failures, worded for the person looking at the chart.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid timeframe")]
    InvalidTimeframe(String),
    #[error("Could not fetch data for {0}")]
    FetchFailed(String),
    #[error("Failed to calculate relative candles - possibly no overlapping data")]
    Relative(#[from] RelativeError),
}

/// Resolves chart requests against a provider and the timeframe table.
pub struct RelativeChartService<P: MarketDataProvider> {
    provider: P,
    timeframes: TimeframeTable,
}

impl<P: MarketDataProvider> RelativeChartService<P> {
    pub fn new(provider: P, timeframes: TimeframeTable) -> Self {
        Self {
            provider,
            timeframes,
        }
    }

    pub async fn candles(&self, request: &CandlesRequest) -> Result<CandlesResponse, RequestError> {
        log::info!(
            "Request: {} {} vs {}",
            request.symbol,
            request.timeframe,
            request.benchmark
        );

        let (_, spec) = self
            .timeframes
            .resolve(&request.timeframe)
            .ok_or_else(|| RequestError::InvalidTimeframe(request.timeframe.clone()))?;

        let instrument_req = series_request(&request.symbol, spec);
        let benchmark_req = series_request(&request.benchmark, spec);

        let (instrument, benchmark) = tokio::join!(
            self.fetch(&instrument_req),
            self.fetch(&benchmark_req)
        );
        let instrument = instrument?;
        let benchmark = benchmark?;

        let candles = relative_pipeline(instrument, benchmark, spec.aggregation)?;

        Ok(CandlesResponse {
            symbol: request.symbol.clone(),
            benchmark: request.benchmark.clone(),
            timeframe: request.timeframe.clone(),
            candles,
        })
    }

    // Any provider failure or empty answer collapses to FetchFailed for that symbol.
    async fn fetch(&self, request: &SeriesRequest) -> Result<OhlcTimeSeries, RequestError> {
        match self.provider.fetch_series(request).await {
            Ok(Some(series)) if !series.is_empty() => Ok(series),
            Ok(_) => {
                log::warn!("No data returned for {}", request);
                Err(RequestError::FetchFailed(request.symbol.clone()))
            }
            Err(e) => {
                log::error!("Error fetching {}: {:#}", request, e);
                Err(RequestError::FetchFailed(request.symbol.clone()))
            }
        }
    }
}

fn series_request(symbol: &str, spec: &TimeframeSpec) -> SeriesRequest {
    SeriesRequest::new(symbol, spec.interval, spec.start_ms(), spec.end_ms())
}
