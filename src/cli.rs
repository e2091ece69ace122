//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The feed path can also be provided via environment variable.

use clap::Parser;

/// Command-line arguments for the news-content renderer.
///
/// # Examples
///
/// ```sh
/// # Render the fragment from a pre-fetched feed document
/// climate_news_content -f ./news_feed.json -o ./public
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the pre-fetched feed JSON document
    #[arg(short, long, env = "NEWS_FEED_JSON")]
    pub feed_json: String,

    /// Output directory for the rendered HTML fragment
    #[arg(short, long)]
    pub output_dir: String,
}
