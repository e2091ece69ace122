//! # Climate News Content
//!
//! Renders a curated list of climate news-article links into a static HTML
//! fragment. The feed is pre-fetched by an upstream data layer and handed
//! over as a JSON document; this program owns no fetching, caching,
//! pagination, or sorting. It reads the document, derives the display
//! values (freshness label, per-row markup), and writes the fragment.
//!
//! ## Usage
//!
//! ```sh
//! climate_news_content -f ./news_feed.json -o ./public
//! ```
//!
//! ## Pipeline
//!
//! 1. **Read**: load and parse the feed JSON document
//! 2. **Render**: one pass through the memoizing fragment renderer
//! 3. **Write**: `{output_dir}/news_content.html`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod models;
mod render;
mod time;
mod utils;

use cli::Cli;
use models::NewsFeed;
use render::list::NewsContent;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_content render starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.feed_json, ?args.output_dir, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Read the pre-fetched feed ----
    let raw = match tokio::fs::read_to_string(&args.feed_json).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(path = %args.feed_json, error = %e, "Failed to read feed document");
            return Err(Box::new(e));
        }
    };
    let feed: NewsFeed = match serde_json::from_str(&raw) {
        Ok(feed) => feed,
        Err(e) => {
            error!(
                path = %args.feed_json,
                error = %e,
                preview = %utils::truncate_for_log(&raw, 300),
                "Feed document is not valid feed JSON"
            );
            return Err(Box::new(e));
        }
    };
    info!(
        links = feed.newsFeedUrls.len(),
        has_status = feed.newsFeedStatus.is_some(),
        "Loaded feed document"
    );

    // ---- Render the fragment ----
    let mut renderer = NewsContent::new();
    let html = renderer.render(&feed);

    // ---- Write output ----
    let output_path = format!(
        "{}/news_content.html",
        args.output_dir.trim_end_matches('/')
    );
    if let Err(e) = tokio::fs::write(&output_path, &html).await {
        error!(path = %output_path, error = %e, "Failed writing HTML fragment");
        return Err(Box::new(e));
    }
    info!(path = %output_path, bytes = html.len(), "Wrote news-content fragment");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        items = feed.newsFeedUrls.len(),
        "Execution complete"
    );

    Ok(())
}
