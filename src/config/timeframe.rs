//! Chart timeframes and how each one is resolved into a provider request.

use {
    crate::{config::AggregationFactor, utils::TimeUtils},
    chrono::NaiveDate,
    std::collections::BTreeMap,
    strum_macros::{Display, EnumIter, EnumString},
};

/// Timeframes a chart can be requested in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Timeframe {
    #[strum(to_string = "1m")]
    M1,
    #[strum(to_string = "15m")]
    M15,
    #[strum(to_string = "1h")]
    H1,
    #[strum(to_string = "4h")]
    H4,
    #[default]
    #[strum(to_string = "1d")]
    D1,
    #[strum(to_string = "1w")]
    W1,
    #[strum(to_string = "1mo")]
    Mo1,
}

/// Bar widths the upstream provider can deliver directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProviderInterval {
    #[strum(to_string = "1m")]
    Minute1,
    #[strum(to_string = "15m")]
    Minute15,
    #[strum(to_string = "1h")]
    Hour1,
    #[strum(to_string = "1d")]
    Day1,
    #[strum(to_string = "1wk")]
    Week1,
    #[strum(to_string = "1mo")]
    Month1,
}

impl ProviderInterval {
    /// Provider-side code, also used in data file names (e.g. `1wk`).
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn duration_ms(&self) -> i64 {
        match self {
            Self::Minute1 => TimeUtils::MS_IN_MIN,
            Self::Minute15 => TimeUtils::MS_IN_15_MIN,
            Self::Hour1 => TimeUtils::MS_IN_H,
            Self::Day1 => TimeUtils::MS_IN_D,
            Self::Week1 => TimeUtils::MS_IN_W,
            Self::Month1 => TimeUtils::MS_IN_1_M,
        }
    }
}

/// Everything needed to fetch and resample one timeframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeframeSpec {
    pub interval: ProviderInterval,
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
    pub aggregation: AggregationFactor,
}

impl TimeframeSpec {
    pub fn start_ms(&self) -> i64 {
        TimeUtils::date_to_epoch_ms(self.start)
    }

    pub fn end_ms(&self) -> i64 {
        TimeUtils::date_to_epoch_ms(self.end)
    }
}

/// Timeframe lookup handed to the request layer at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeTable {
    entries: BTreeMap<Timeframe, TimeframeSpec>,
}

impl TimeframeTable {
    pub fn new(entries: impl IntoIterator<Item = (Timeframe, TimeframeSpec)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, timeframe: Timeframe) -> Option<&TimeframeSpec> {
        self.entries.get(&timeframe)
    }

    /// Resolve a user supplied label such as `4h`.
    pub fn resolve(&self, label: &str) -> Option<(Timeframe, &TimeframeSpec)> {
        let timeframe: Timeframe = label.parse().ok()?;
        self.get(timeframe).map(|spec| (timeframe, spec))
    }
}

// Table entries are consts, so a bad date or a zero factor fails the build.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid timeframe table date"),
    }
}

const fn factor(n: usize) -> AggregationFactor {
    match AggregationFactor::new(n) {
        Some(f) => f,
        None => panic!("aggregation factor must be at least 1"),
    }
}

const INTRADAY_START: NaiveDate = ymd(2024, 1, 1);
const HOURLY_START: NaiveDate = ymd(2020, 1, 1);
const DAILY_START: NaiveDate = ymd(2000, 1, 1);
const LONG_START: NaiveDate = ymd(1990, 1, 1);
const TABLE_END: NaiveDate = ymd(2025, 12, 31);

const HOURS_PER_FOUR_HOURS: AggregationFactor = factor(4);

impl Default for TimeframeTable {
    fn default() -> Self {
        use {AggregationFactor as F, ProviderInterval as P, Timeframe as T};

        let spec = |interval, start, aggregation| TimeframeSpec {
            interval,
            start,
            end: TABLE_END,
            aggregation,
        };

        Self::new([
            (T::M1, spec(P::Minute1, INTRADAY_START, F::IDENTITY)),
            (T::M15, spec(P::Minute15, INTRADAY_START, F::IDENTITY)),
            (T::H1, spec(P::Hour1, HOURLY_START, F::IDENTITY)),
            // The provider has no 4h bars, so build them from 1h.
            (T::H4, spec(P::Hour1, HOURLY_START, HOURS_PER_FOUR_HOURS)),
            (T::D1, spec(P::Day1, DAILY_START, F::IDENTITY)),
            (T::W1, spec(P::Week1, LONG_START, F::IDENTITY)),
            (T::Mo1, spec(P::Month1, LONG_START, F::IDENTITY)),
        ])
    }
}
