use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Parse a backend day string into a UTC midnight timestamp (milliseconds).
///
/// The stats backend delivers either bare dates ("2023-01-01") or full ISO
/// timestamps ("2023-01-01T00:00:00"); both land on the same bucket.
pub fn parse_day_to_epoch_ms(time: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(time, TimeUtils::STANDARD_TIME_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc3339(time)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

pub fn epoch_ms_to_day_string(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

pub fn local_now_as_timestamp_ms() -> i64 {
    let now_local = Local::now();
    now_local.timestamp_millis()
}

pub fn how_many_seconds_ago(past_timestamp_ms: i64) -> i64 {
    // How many seconds ago was the event described by `past_timestamp_ms` ?
    let now_timestamp_ms = local_now_as_timestamp_ms();
    (now_timestamp_ms - past_timestamp_ms) / 1000
}

#[allow(dead_code)]
pub fn utc_now_as_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_dates() {
        let ms = parse_day_to_epoch_ms("2023-01-01").unwrap();
        assert_eq!(ms, 1_672_531_200_000);
        assert_eq!(epoch_ms_to_day_string(ms), "2023-01-01");
    }

    #[test]
    fn parses_iso_timestamps() {
        let bare = parse_day_to_epoch_ms("2023-01-01").unwrap();
        let iso = parse_day_to_epoch_ms("2023-01-01T00:00:00").unwrap();
        assert_eq!(bare, iso, "both forms must land on the same bucket");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_day_to_epoch_ms("not-a-date").is_none());
        assert!(parse_day_to_epoch_ms("").is_none());
    }

    #[test]
    fn day_roundtrip_is_stable() {
        let ms = parse_day_to_epoch_ms("2024-02-29").unwrap();
        assert_eq!(epoch_ms_to_day_string(ms), "2024-02-29");
    }
}
