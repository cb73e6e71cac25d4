use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de::Error};

/// Offset-less layouts emitted for `timestamp without time zone` columns.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339 with an offset, or an offset-less ISO timestamp taken as UTC.
pub fn parse_utc_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// `deserialize_with` adapter for [`parse_utc_datetime`].
pub fn deserialize_utc_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_datetime(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn accepts_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap();

        assert_eq!(parse_utc_datetime("2026-01-01T10:00:00Z"), Some(expected));
        assert_eq!(parse_utc_datetime("2026-01-01T07:00:00-03:00"), Some(expected));
        assert_eq!(parse_utc_datetime("2026-01-01T10:00:00"), Some(expected));
        assert_eq!(parse_utc_datetime("2026-01-01 10:00:00"), Some(expected));
        assert_eq!(
            parse_utc_datetime("2026-01-01T10:00:00.250000").map(|dt| dt.timestamp_millis()),
            Some(expected.timestamp_millis() + 250)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_utc_datetime(""), None);
        assert_eq!(parse_utc_datetime("yesterday"), None);
        assert_eq!(parse_utc_datetime("2026-01-01"), None);
    }
}
