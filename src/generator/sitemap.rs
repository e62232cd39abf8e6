//! Google News sitemap generation.
//!
//! Generates a news sitemap listing every fetched post for search engine
//! discovery.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:news="http://www.google.com/schemas/sitemap-news/0.9">
//!   <url>
//!     <loc>https://boringmoney.substack.com/p/example</loc>
//!     <news:news>
//!       <news:publication>
//!         <news:name>Boring Money</news:name>
//!         <news:language>en</news:language>
//!       </news:publication>
//!       <news:publication_date>2025-01-01T09:00:00Z</news:publication_date>
//!       <news:title>Example</news:title>
//!     </news:news>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{PublicationConfig, SitemapConfig},
    feed::Post,
    log,
    utils::date::to_news_timestamp,
};
use anyhow::{Context, Result};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::{fs, path::Path};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

/// Build the news sitemap from `posts` and write it to the configured path.
///
/// The output file is always overwritten, even when `posts` is empty.
pub fn build_news_sitemap(posts: &[Post], config: &SitemapConfig) -> Result<()> {
    if posts.is_empty() {
        log!("sitemap"; "no posts found, creating empty sitemap");
    }

    let sitemap = NewsSitemap::from_posts(posts, &config.publication);
    let count = sitemap.len();
    sitemap.write(&config.path, config.minify)?;

    log!("sitemap"; "generated news sitemap with {} articles", count);
    Ok(())
}

pub struct NewsSitemap<'a> {
    publication: &'a PublicationConfig,
    entries: Vec<NewsEntry<'a>>,
}

struct NewsEntry<'a> {
    loc: &'a str,
    title: &'a str,
    publication_date: String,
}

impl<'a> NewsSitemap<'a> {
    pub fn from_posts(posts: &'a [Post], publication: &'a PublicationConfig) -> Self {
        let entries = posts
            .iter()
            .map(|post| NewsEntry {
                loc: &post.link,
                title: &post.title,
                publication_date: to_news_timestamp(&post.published),
            })
            .collect();

        Self {
            publication,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serialize with an XML declaration, indented by two spaces unless
    /// `minify` is set.
    pub fn to_xml(&self, minify: bool) -> Result<String> {
        let buf = Vec::with_capacity(4096);
        let mut writer = if minify {
            Writer::new(buf)
        } else {
            Writer::new_with_indent(buf, b' ', 2)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("urlset")
                .with_attributes([("xmlns", SITEMAP_NS), ("xmlns:news", NEWS_NS)]),
        ))?;

        for entry in &self.entries {
            writer.write_event(Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", entry.loc)?;

            writer.write_event(Event::Start(BytesStart::new("news:news")))?;
            writer.write_event(Event::Start(BytesStart::new("news:publication")))?;
            write_text_element(&mut writer, "news:name", &self.publication.name)?;
            write_text_element(&mut writer, "news:language", &self.publication.language)?;
            writer.write_event(Event::End(BytesEnd::new("news:publication")))?;
            write_text_element(
                &mut writer,
                "news:publication_date",
                &entry.publication_date,
            )?;
            write_text_element(&mut writer, "news:title", entry.title)?;
            writer.write_event(Event::End(BytesEnd::new("news:news")))?;

            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let mut xml = String::from_utf8(writer.into_inner())
            .context("sitemap serialization produced invalid UTF-8")?;
        if !minify {
            xml.push('\n');
        }
        Ok(xml)
    }

    /// Write to `path`, creating parent directories and overwriting any
    /// existing file.
    pub fn write(&self, path: &Path, minify: bool) -> Result<()> {
        let xml = self.to_xml(minify)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        fs::write(path, xml.as_bytes())
            .with_context(|| format!("failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", path.display());
        Ok(())
    }
}

/// Write `<name>text</name>`, escaping the text.
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
