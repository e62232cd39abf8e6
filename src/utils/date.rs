//! Feed date parsing and Google News timestamp formatting.
//!
//! RSS `pubDate` values are RFC 2822 (`Mon, 15 Jan 2024 10:30:45 GMT`).
//! Some feeds emit RFC 3339 instead, which is accepted as a fallback.
//! Everything is normalized to UTC before formatting.
//!
//! # Examples
//!
//! ```ignore
//! let dt = parse_feed_date("Sat, 15 Jun 2024 14:30:45 +0200").unwrap();
//! assert_eq!(to_news_timestamp(&dt), "2024-06-15T12:30:45Z");
//! ```

use chrono::{DateTime, Utc};

/// `news:publication_date` format.
pub const NEWS_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a feed date (RFC 2822, falling back to RFC 3339) into UTC.
pub fn parse_feed_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn to_news_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(NEWS_DATE_FORMAT).to_string()
}

/// Check that a string has the exact `YYYY-MM-DDTHH:MM:SSZ` shape.
#[cfg(test)]
pub fn is_news_timestamp(s: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(s, NEWS_DATE_FORMAT).is_ok() && s.len() == 20
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc2822_gmt() {
        let dt = parse_feed_date("Mon, 15 Jan 2024 10:30:45 GMT").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap());
    }

    #[test]
    fn test_parse_rfc2822_offset_normalized_to_utc() {
        let dt = parse_feed_date("Sat, 15 Jun 2024 14:30:45 +0200").unwrap();
        assert_eq!(to_news_timestamp(&dt), "2024-06-15T12:30:45Z");
    }

    #[test]
    fn test_parse_rfc2822_crosses_day_boundary() {
        let dt = parse_feed_date("Sun, 31 Dec 2023 22:00:00 -0500").unwrap();
        assert_eq!(to_news_timestamp(&dt), "2024-01-01T03:00:00Z");
    }

    #[test]
    fn test_parse_rfc3339_fallback() {
        let dt = parse_feed_date("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(to_news_timestamp(&dt), "2024-06-15T14:30:45Z");
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        assert!(parse_feed_date("\n  Mon, 15 Jan 2024 10:30:45 GMT  \n").is_some());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_feed_date(""), None);
        assert_eq!(parse_feed_date("   "), None);
        assert_eq!(parse_feed_date("yesterday"), None);
        assert_eq!(parse_feed_date("Mon, 32 Jan 2024 10:30:45 GMT"), None);
    }

    #[test]
    fn test_news_timestamp_shape() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let s = to_news_timestamp(&dt);
        assert_eq!(s, "2024-02-29T00:00:00Z");
        assert!(is_news_timestamp(&s));
        assert!(!is_news_timestamp("2024-02-29"));
        assert!(!is_news_timestamp("2024-02-29T00:00:00+00:00"));
    }
}
