//! `[sitemap]` configuration.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path for the news sitemap.
    pub path: PathBuf,
    /// Strip indentation and line breaks.
    pub minify: bool,
    /// `news:publication` block.
    pub publication: PublicationConfig,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "news-sitemap.xml".into(),
            minify: false,
            publication: PublicationConfig::default(),
        }
    }
}

/// Publication metadata repeated in every `news:news` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationConfig {
    pub name: String,
    /// ISO 639 language code.
    pub language: String,
}

impl Default for PublicationConfig {
    fn default() -> Self {
        Self {
            name: "Boring Money".into(),
            language: "en".into(),
        }
    }
}

impl SitemapConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error("sitemap.path", "output path is empty");
        }
        if self.publication.name.trim().is_empty() {
            diag.error("sitemap.publication.name", "publication name is empty");
        }
        if self.publication.language.trim().is_empty() {
            diag.error_with_hint(
                "sitemap.publication.language",
                "publication language is empty",
                "use an ISO 639 code such as \"en\"",
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
        assert_eq!(config.sitemap.path, PathBuf::from("news-sitemap.xml"));
        assert!(!config.sitemap.minify);
        assert_eq!(config.sitemap.publication.name, "Boring Money");
        assert_eq!(config.sitemap.publication.language, "en");
    }

    #[test]
    fn test_publication_override() {
        let config = test_parse_config(
            "[sitemap]\npath = \"out/news.xml\"\n\n[sitemap.publication]\nname = \"Other\"\nlanguage = \"de\"",
        );
        assert_eq!(config.sitemap.path, PathBuf::from("out/news.xml"));
        assert_eq!(config.sitemap.publication.name, "Other");
        assert_eq!(config.sitemap.publication.language, "de");
    }

    #[test]
    fn test_validate_empty_fields() {
        let mut diag = ConfigDiagnostics::new();
        let config = SitemapConfig {
            path: PathBuf::new(),
            minify: false,
            publication: PublicationConfig {
                name: " ".into(),
                language: String::new(),
            },
        };
        config.validate(&mut diag);
        assert_eq!(
            diag.fields(),
            vec![
                "sitemap.path",
                "sitemap.publication.name",
                "sitemap.publication.language",
            ]
        );
        assert!(diag.to_string().contains("ISO 639"));
    }
}
