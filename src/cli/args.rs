//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate a Google News sitemap from a blog's RSS feed
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (ignored if it does not exist)
    #[arg(short = 'C', long, default_value = "news-sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// RSS feed URL to read posts from
    #[arg(short = 'u', long, value_hint = clap::ValueHint::Url)]
    pub feed_url: Option<String>,

    /// Output sitemap path
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Feed request timeout in seconds
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Minify the sitemap XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,
}
