/// Snowflake helpers (Discord-agnostic)
use chrono::{DateTime, Utc};

use crate::constants::DISCORD_EPOCH_MS;

/// Milliseconds since the Unix epoch at which the snowflake was generated
pub fn snowflake_timestamp_ms(id: u64) -> u64 {
    (id >> 22) + DISCORD_EPOCH_MS
}

/// Creation instant embedded in a snowflake
pub fn snowflake_created_at(id: u64) -> Option<DateTime<Utc>> {
    let millis = i64::try_from(snowflake_timestamp_ms(id)).ok()?;
    DateTime::from_timestamp_millis(millis)
}

/// Parse a snowflake given as a decimal string
pub fn parse_snowflake(id: &str) -> Option<u64> {
    id.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_snowflake_timestamp_ms() {
        // Example from the Discord developer documentation
        assert_eq!(snowflake_timestamp_ms(175928847299117063), 1462015105796);
        assert_eq!(snowflake_timestamp_ms(0), DISCORD_EPOCH_MS);
    }

    #[test]
    fn test_snowflake_created_at() {
        let created = snowflake_created_at(175928847299117063).unwrap();
        assert_eq!(created.timestamp_millis(), 1462015105796);
        assert_eq!((created.year(), created.month(), created.day()), (2016, 4, 30));
        assert_eq!((created.hour(), created.minute(), created.second()), (11, 18, 25));
    }

    #[test]
    fn test_snowflake_created_at_max_id() {
        assert!(snowflake_created_at(u64::MAX).is_some());
    }

    #[test]
    fn test_parse_snowflake() {
        assert_eq!(parse_snowflake("123"), Some(123));
        assert_eq!(parse_snowflake(" 175928847299117063 "), Some(175928847299117063));
        assert_eq!(parse_snowflake("abc"), None);
        assert_eq!(parse_snowflake("-5"), None);
        assert_eq!(parse_snowflake(""), None);
    }
}
