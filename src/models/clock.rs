use chrono::{NaiveTime, Timelike};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

const SECONDS_PER_DAY: u32 = 86_400;

/// Formats seconds since midnight as `HH:MM:SS`, wrapping past 24 hours.
pub fn convert_seconds_to_time(seconds: u32) -> String {
    NaiveTime::from_num_seconds_from_midnight_opt(seconds % SECONDS_PER_DAY, 0)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Parses `HH:MM` or `HH:MM:SS` into seconds since midnight.
pub fn parse_clock(text: &str) -> Option<u32> {
    let text = text.trim();
    let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()?;
    Some(time.num_seconds_from_midnight())
}

/// Accepts either integer seconds or a clock string.
pub fn deserialize_seconds<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct SecondsVisitor;

    impl Visitor<'_> for SecondsVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("seconds since midnight or an HH:MM[:SS] string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("{v} seconds is out of range")))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("{v} seconds is out of range")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            parse_clock(v).ok_or_else(|| E::custom(format!("invalid clock time {v:?}")))
        }
    }

    deserializer.deserialize_any(SecondsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_window_boundaries() {
        assert_eq!(convert_seconds_to_time(28800), "08:00:00");
        assert_eq!(convert_seconds_to_time(21600), "06:00:00");
        assert_eq!(convert_seconds_to_time(45_296), "12:34:56");
    }

    #[test]
    fn wraps_like_a_utc_clock() {
        assert_eq!(convert_seconds_to_time(SECONDS_PER_DAY + 3600), "01:00:00");
    }

    #[test]
    fn parses_dropdown_style_times() {
        assert_eq!(parse_clock("06:00"), Some(21600));
        assert_eq!(parse_clock("10:30:15"), Some(37815));
        assert_eq!(parse_clock("half past six"), None);
    }
}
