//! Configuration error types.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // No #[from]: the violations are already listed in the message.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One rejected config value.
#[derive(Debug, Clone)]
struct Violation {
    field: &'static str,
    message: String,
    hint: Option<String>,
}

/// Validation errors collected across all sections before failing.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    violations: Vec<Violation>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn error_with_hint(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.violations.push(Violation {
            field,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// `Ok` when nothing was rejected.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }

    /// Rejected field paths, in the order they were reported.
    #[cfg(test)]
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

/// Render `text` in `style` when stderr supports color.
fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style))
        .to_string()
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            paint("invalid configuration:", Style::new().red().bold())
        )?;
        for v in &self.violations {
            write!(
                f,
                "\n  {} {}",
                paint(v.field, Style::new().cyan()),
                v.message
            )?;
            if let Some(hint) = &v.hint {
                write!(f, " ({} {hint})", paint("hint:", Style::new().yellow()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("news-sitemap.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("news-sitemap.toml"));
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }

    #[test]
    fn test_diagnostics_listing_without_color() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error("feed.url", "invalid URL");
        diag.error_with_hint("feed.timeout_secs", "zero", "the default is 30");
        assert_eq!(diag.fields(), vec!["feed.url", "feed.timeout_secs"]);

        let err = diag.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration:\n  feed.url invalid URL\n  feed.timeout_secs zero (hint: the default is 30)"
        );
    }
}
