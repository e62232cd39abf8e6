//! RSS 2.0 channel → posts.

use super::{FetchError, Post};
use crate::{debug, utils::date::parse_feed_date};
use chrono::Utc;
use rss::{Channel, Item};

/// Parse an RSS document and extract every item, in feed order.
pub fn parse_posts(body: &[u8]) -> Result<Vec<Post>, FetchError> {
    let channel = Channel::read_from(body)?;
    Ok(channel.items().iter().map(Post::from_item).collect())
}

impl Post {
    /// Build a post from direct child lookups on an `<item>`.
    ///
    /// Missing title or link become empty strings. A missing or unparsable
    /// `pubDate` becomes the current time.
    fn from_item(item: &Item) -> Self {
        let link = item.link().unwrap_or_default().to_string();
        let raw_date = item.pub_date();
        let published = raw_date.and_then(parse_feed_date).unwrap_or_else(|| {
            debug!("feed"; "unusable pubDate {:?} for {}, using current time", raw_date, link);
            Utc::now()
        });

        Self {
            title: item.title().unwrap_or_default().to_string(),
            link,
            published,
        }
    }
}
