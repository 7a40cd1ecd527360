use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_4_H: i64 = Self::MS_IN_MIN * 60 * 4;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const MS_IN_1_M: i64 = Self::MS_IN_D * 30;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Anything above this is treated as milliseconds rather than seconds.
    const EPOCH_MS_THRESHOLD: i64 = 100_000_000_000;

    /// Midnight UTC of `date` as epoch milliseconds.
    pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
    }

    /// Whole Unix seconds, truncated toward zero.
    pub fn epoch_ms_to_secs(epoch_ms: i64) -> i64 {
        epoch_ms / Self::MS_IN_S
    }

    /// Parse a timestamp cell into epoch milliseconds.
    /// Accepts epoch seconds, epoch milliseconds, RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
    pub fn parse_timestamp_ms(text: &str) -> Option<i64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Ok(n) = text.parse::<i64>() {
            return Some(if n.abs() >= Self::EPOCH_MS_THRESHOLD {
                n
            } else {
                n * Self::MS_IN_S
            });
        }
        if let Ok(f) = text.parse::<f64>() {
            if !f.is_finite() {
                return None;
            }
            let ms = if f.abs() >= Self::EPOCH_MS_THRESHOLD as f64 {
                f
            } else {
                f * Self::MS_IN_S as f64
            };
            return Some(ms.round() as i64);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.timestamp_millis());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Some(dt.and_utc().timestamp_millis());
        }
        // Some exports carry an offset after a space: "2024-01-02 09:30:00-05:00"
        if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%:z") {
            return Some(dt.timestamp_millis());
        }
        NaiveDate::parse_from_str(text, Self::STANDARD_TIME_FORMAT)
            .ok()
            .map(Self::date_to_epoch_ms)
    }

    /// Convert interval in milliseconds to a shorthand (e.g. `15m`, `4h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_15_MIN => "15m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_4_H => "4h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_W => "1w",
            Self::MS_IN_1_M => "1mo",
            _ => "unknown",
        }
    }
}

// Time Helper functions

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => format!("{}", dt.format(TimeUtils::STANDARD_TIME_FORMAT)),
        None => "invalid".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_formats() {
        let day = 1_704_153_600_000; // 2024-01-02T00:00:00Z
        assert_eq!(TimeUtils::parse_timestamp_ms("2024-01-02"), Some(day));
        assert_eq!(TimeUtils::parse_timestamp_ms("2024-01-02 00:00:00"), Some(day));
        assert_eq!(TimeUtils::parse_timestamp_ms("2024-01-02T00:00:00Z"), Some(day));
        assert_eq!(TimeUtils::parse_timestamp_ms("1704153600"), Some(day));
        assert_eq!(TimeUtils::parse_timestamp_ms("1704153600000"), Some(day));
        assert_eq!(TimeUtils::parse_timestamp_ms("1704153600.0"), Some(day));
        assert_eq!(
            TimeUtils::parse_timestamp_ms("2024-01-02 09:30:00-05:00"),
            Some(day + 14 * TimeUtils::MS_IN_H + 30 * TimeUtils::MS_IN_MIN)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(TimeUtils::parse_timestamp_ms(""), None);
        assert_eq!(TimeUtils::parse_timestamp_ms("yesterday"), None);
        assert_eq!(TimeUtils::parse_timestamp_ms("NaN"), None);
    }

    #[test]
    fn seconds_truncate_toward_zero() {
        assert_eq!(TimeUtils::epoch_ms_to_secs(1_500), 1);
        assert_eq!(TimeUtils::epoch_ms_to_secs(-1_500), -1);
        assert_eq!(TimeUtils::epoch_ms_to_secs(-2_000), -2);
    }

    #[test]
    fn date_string_round_trips() {
        let ms = TimeUtils::date_to_epoch_ms(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(epoch_ms_to_date_string(ms), "2020-01-01");
        assert_eq!(TimeUtils::interval_to_string(TimeUtils::MS_IN_4_H), "4h");
    }
}
