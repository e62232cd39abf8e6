//! `[feed]` configuration.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default feed location.
pub const DEFAULT_FEED_URL: &str = "https://boringmoney.substack.com/feed";

/// Source feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// RSS feed URL.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.into(),
            timeout_secs: 30,
        }
    }
}

impl FeedConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => diag.error_with_hint(
                "feed.url",
                format!("unsupported scheme `{}`", parsed.scheme()),
                "use an http:// or https:// URL",
            ),
            Err(e) => diag.error("feed.url", format!("invalid URL `{}`: {e}", self.url)),
        }

        if self.timeout_secs == 0 {
            diag.error_with_hint(
                "feed.timeout_secs",
                "timeout must be greater than zero",
                "the default is 30",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.feed.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_custom_values() {
        let config = test_parse_config(
            "[feed]\nurl = \"https://example.substack.com/feed\"\ntimeout_secs = 5",
        );
        assert_eq!(config.feed.url, "https://example.substack.com/feed");
        assert_eq!(config.feed.timeout_secs, 5);
    }

    #[test]
    fn test_validate_default_ok() {
        let mut diag = ConfigDiagnostics::new();
        FeedConfig::default().validate(&mut diag);
        assert!(diag.fields().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut diag = ConfigDiagnostics::new();
        let config = FeedConfig {
            url: "not a url".into(),
            ..FeedConfig::default()
        };
        config.validate(&mut diag);
        assert_eq!(diag.fields(), vec!["feed.url"]);
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut diag = ConfigDiagnostics::new();
        let config = FeedConfig {
            url: "ftp://example.com/feed".into(),
            ..FeedConfig::default()
        };
        config.validate(&mut diag);
        assert_eq!(diag.fields(), vec!["feed.url"]);
        assert!(diag.to_string().contains("unsupported scheme `ftp`"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut diag = ConfigDiagnostics::new();
        let config = FeedConfig {
            timeout_secs: 0,
            ..FeedConfig::default()
        };
        config.validate(&mut diag);
        assert_eq!(diag.fields(), vec!["feed.timeout_secs"]);
    }
}
