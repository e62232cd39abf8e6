//! Configuration section definitions.
//!
//! Each module corresponds to a section in `news-sitemap.toml`:
//!
//! | Module    | TOML Section  | Purpose                              |
//! |-----------|---------------|--------------------------------------|
//! | `feed`    | `[feed]`      | Source feed URL and request timeout  |
//! | `sitemap` | `[sitemap]`   | Output path, minify, publication     |

mod feed;
mod sitemap;

pub use feed::FeedConfig;
pub use sitemap::{PublicationConfig, SitemapConfig};
