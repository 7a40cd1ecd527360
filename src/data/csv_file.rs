//! Price history stored as one CSV file per symbol and interval.

use {
    crate::{
        config::{ClosePrice, HighPrice, LowPrice, OpenPrice, price_data_filename},
        data::MarketDataProvider,
        domain::{Candle, SeriesRequest},
        models::OhlcTimeSeries,
        utils::TimeUtils,
    },
    anyhow::{Context, Result, anyhow},
    async_trait::async_trait,
    std::path::{Path, PathBuf},
};

/// Reads `{directory}/{SYMBOL}_{interval}.csv`.
pub struct CsvProvider {
    directory: PathBuf,
}

impl CsvProvider {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, request: &SeriesRequest) -> PathBuf {
        self.directory
            .join(price_data_filename(&request.symbol, request.interval))
    }
}

#[async_trait]
impl MarketDataProvider for CsvProvider {
    async fn fetch_series(&self, request: &SeriesRequest) -> Result<Option<OhlcTimeSeries>> {
        let path = self.path_for(request);
        log::info!("Fetching {} from {:?}", request, path);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No data file for {} ({:?})", request.symbol, path);
                return Ok(None);
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("Failed to read {:?}", path)));
            }
        };

        let candles = parse_candles(bytes.as_slice())
            .with_context(|| format!("Malformed price file {:?}", path))?;
        let candles = select_range(candles, request);

        if candles.is_empty() {
            log::warn!("No data returned for {}", request);
            return Ok(None);
        }

        log::info!("Got {} rows for {}", candles.len(), request.symbol);
        OhlcTimeSeries::for_request(request, candles).map(Some)
    }
}

struct Columns {
    timestamp: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

impl Columns {
    fn detect(headers: &csv::StringRecord) -> Result<Self> {
        let lower: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |names: &[&str]| lower.iter().position(|h| names.contains(&h.as_str()));

        let timestamp = find(&["timestamp", "time", "date", "datetime"])
            .ok_or_else(|| anyhow!("no timestamp/time/date column in header {:?}", lower))?;
        let price = |name: &str| {
            find(&[name]).ok_or_else(|| anyhow!("no '{}' column in header {:?}", name, lower))
        };

        Ok(Self {
            timestamp,
            open: price("open")?,
            high: price("high")?,
            low: price("low")?,
            close: price("close")?,
        })
    }
}

// Holes and junk become NaN so alignment can drop the row later.
fn price_cell(record: &csv::StringRecord, idx: usize) -> f64 {
    record
        .get(idx)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse candles in file order. A row whose timestamp cannot be read is an error.
pub fn parse_candles<R: std::io::Read>(reader: R) -> Result<Vec<Candle>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::detect(reader.headers()?)?;
    let mut candles = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let record = result?;
        let raw_ts = record.get(columns.timestamp).unwrap_or("");
        let timestamp_ms = TimeUtils::parse_timestamp_ms(raw_ts)
            .ok_or_else(|| anyhow!("row {}: unreadable timestamp '{}'", line + 1, raw_ts))?;

        candles.push(Candle::new(
            timestamp_ms,
            OpenPrice::new(price_cell(&record, columns.open)),
            HighPrice::new(price_cell(&record, columns.high)),
            LowPrice::new(price_cell(&record, columns.low)),
            ClosePrice::new(price_cell(&record, columns.close)),
        ));
    }

    Ok(candles)
}

/// Keep rows inside the request window, sorted, first occurrence of each timestamp.
fn select_range(mut candles: Vec<Candle>, request: &SeriesRequest) -> Vec<Candle> {
    candles.retain(|c| request.contains(c.timestamp_ms));
    // Stable sort so the first occurrence of a duplicate stays in front.
    candles.sort_by_key(|c| c.timestamp_ms);
    candles.dedup_by_key(|c| c.timestamp_ms);
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PriceLike, ProviderInterval};

    const DAY: i64 = TimeUtils::MS_IN_D;

    #[test]
    fn detects_columns_in_any_order_and_case() {
        let text = "Close,Date,Volume,Low,High,Open\n11,2024-01-02,100,9,12,10\n";
        let candles = parse_candles(text.as_bytes()).unwrap();
        assert_eq!(candles.len(), 1);
        let c = candles[0];
        assert_eq!(c.open_price.value(), 10.0);
        assert_eq!(c.high_price.value(), 12.0);
        assert_eq!(c.low_price.value(), 9.0);
        assert_eq!(c.close_price.value(), 11.0);
        assert_eq!(c.timestamp_ms, 1_704_153_600_000);
    }

    #[test]
    fn empty_cells_become_holes() {
        let text = "timestamp,open,high,low,close\n0,1,,1,1\n60,1,2,0.5,abc\n";
        let candles = parse_candles(text.as_bytes()).unwrap();
        assert!(candles[0].high_price.is_missing());
        assert!(candles[1].close_price.is_missing());
        assert!(!candles[0].is_complete());
    }

    #[test]
    fn missing_columns_and_bad_timestamps_are_errors() {
        assert!(parse_candles("date,open,high,low\n2024-01-01,1,1,1\n".as_bytes()).is_err());
        assert!(parse_candles("open,high,low,close\n1,1,1,1\n".as_bytes()).is_err());
        assert!(parse_candles("date,open,high,low,close\nsoon,1,1,1,1\n".as_bytes()).is_err());
    }

    #[test]
    fn select_range_sorts_filters_and_dedups() {
        let request = SeriesRequest::new("AAPL", ProviderInterval::Day1, DAY, 4 * DAY);
        let candles = vec![
            Candle::new(3 * DAY, 3.0, 3.0, 3.0, 3.0),
            Candle::new(DAY, 1.0, 1.0, 1.0, 1.0),
            Candle::new(0, 0.0, 0.0, 0.0, 0.0),
            Candle::new(DAY, 9.0, 9.0, 9.0, 9.0),
            Candle::new(4 * DAY, 4.0, 4.0, 4.0, 4.0),
        ];
        let kept = select_range(candles, &request);
        let ts: Vec<i64> = kept.iter().map(|c| c.timestamp_ms).collect();
        assert_eq!(ts, vec![DAY, 3 * DAY]);
        assert_eq!(kept[0].open_price.value(), 1.0);
    }
}
