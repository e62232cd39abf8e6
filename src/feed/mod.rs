//! Feed fetching.
//!
//! Downloads the blog's RSS feed and turns each `<item>` into a [`Post`]:
//!
//! - **fetch**: one blocking HTTP GET with a bounded timeout
//! - **parse**: RSS 2.0 channel → `Vec<Post>`
//!
//! A failed fetch or parse never aborts the run. It is logged and treated
//! as an empty feed, so the sitemap is still written.

mod fetch;
mod parse;

pub use parse::parse_posts;

use crate::{config::FeedConfig, log};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// One article entry extracted from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub published: DateTime<Utc>,
}

/// Errors raised while fetching or parsing the feed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid RSS feed: {0}")]
    Parse(#[from] rss::Error),
}

/// Fetch and parse the configured feed.
///
/// Returns an empty list on any failure.
pub fn fetch_posts(config: &FeedConfig) -> Vec<Post> {
    let result = fetch::fetch_body(&config.url, config.timeout())
        .and_then(|body| parse_posts(&body));

    match result {
        Ok(posts) => {
            log!("feed"; "fetched {} posts from {}", posts.len(), config.url);
            posts
        }
        Err(e) => {
            log!("error"; "failed to fetch feed {}: {}", config.url, e);
            Vec::new()
        }
    }
}
