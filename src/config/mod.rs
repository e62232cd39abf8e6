//! Configuration management for `news-sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [feed] and [sitemap] definitions
//! ├── error          # ConfigError, ConfigDiagnostics
//! └── mod.rs         # Config (this file)
//! ```
//!
//! Values are resolved as: built-in defaults, then the config file (if it
//! exists), then CLI flags. Running with no arguments and no config file
//! fetches the Boring Money feed and writes `news-sitemap.xml`.

mod error;
pub mod section;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{FeedConfig, PublicationConfig, SitemapConfig};

use crate::{cli::Cli, debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing news-sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path of the config file that was loaded, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Source feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Output sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            let mut config = Self::from_path(&cli.config)?;
            config.config_path = Some(cli.config.clone());
            debug!("config"; "loaded {}", cli.config.display());
            config
        } else {
            debug!("config"; "{} not found, using defaults", cli.config.display());
            Self::default()
        };

        config.apply_cli_args(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI overrides on top of file/default values.
    fn apply_cli_args(&mut self, cli: &Cli) {
        Self::update_option(&mut self.feed.url, cli.feed_url.as_ref());
        Self::update_option(&mut self.feed.timeout_secs, cli.timeout.as_ref());
        Self::update_option(&mut self.sitemap.path, cli.output.as_ref());
        Self::update_option(&mut self.sitemap.minify, cli.minify.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, collecting every error before failing.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.feed.validate(&mut diag);
        self.sitemap.validate(&mut diag);

        diag.into_result()?;
        Ok(())
    }
}

/// Parse a config snippet, failing the test on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
