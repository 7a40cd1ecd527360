use crate::config::{ClosePrice, HighPrice, LowPrice, OpenPrice, PriceLike};

// One raw OHLC bar as delivered by a provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open_price: OpenPrice,
    pub high_price: HighPrice,
    pub low_price: LowPrice,
    pub close_price: ClosePrice,
}

impl Candle {
    // A constructor for convenience
    pub fn new(
        timestamp_ms: i64,
        open: impl Into<OpenPrice>,
        high: impl Into<HighPrice>,
        low: impl Into<LowPrice>,
        close: impl Into<ClosePrice>,
    ) -> Self {
        Candle {
            timestamp_ms,
            open_price: open.into(),
            high_price: high.into(),
            low_price: low.into(),
            close_price: close.into(),
        }
    }

    /// False when any of the four prices is a hole.
    pub fn is_complete(&self) -> bool {
        !(self.open_price.is_missing()
            || self.high_price.is_missing()
            || self.low_price.is_missing()
            || self.close_price.is_missing())
    }

    /// Open, high and low expressed as multiples of this bar's own close.
    /// A zero close gives flat ratios of 1.
    pub fn ratios_to_close(&self) -> (f64, f64, f64) {
        (
            self.open_price.ratio_to(&self.close_price),
            self.high_price.ratio_to(&self.close_price),
            self.low_price.ratio_to(&self.close_price),
        )
    }
}
