//! news-sitemap - Generate a Google News sitemap from a blog's RSS feed.

mod cli;
mod config;
mod feed;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::Config;
use feed::fetch_posts;
use generator::sitemap::build_news_sitemap;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    // Fetch failures degrade to an empty sitemap; write failures abort.
    let posts = fetch_posts(&config.feed);
    build_news_sitemap(&posts, &config.sitemap)
}
