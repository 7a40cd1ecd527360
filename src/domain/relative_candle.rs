use serde::{Deserialize, Serialize};

/// One candle of the relative strength series, ready for a charting surface.
/// Prices are already rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeCandle {
    /// Unix seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_chart_field_names() {
        let candle = RelativeCandle {
            time: 60,
            open: 1.5,
            high: 2.0,
            low: 1.0,
            close: 1.25,
        };
        let json = serde_json::to_value(candle).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"time": 60, "open": 1.5, "high": 2.0, "low": 1.0, "close": 1.25})
        );
    }
}
