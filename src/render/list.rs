//! List assembly: header plus the order-preserving article list.
//!
//! [`NewsContent`] is the top-level renderer. It owns the memoization
//! caches that survive across render passes: the freshness label (keyed on
//! the completion timestamp) and one rendered row per slug (keyed on the
//! record's value). A pass over an unchanged feed therefore reassembles the
//! fragment from cached pieces without re-deriving any of them.

use crate::models::NewsFeed;
use crate::render::header::{render_header, LastUpdatedLabel};
use crate::render::item::render_item;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, warn};

/// Renderer for the news-content fragment.
///
/// Create once and call [`render`](Self::render) per pass; the caches carry
/// over between passes. The input order of the feed is preserved verbatim:
/// no sorting, filtering, deduplication, or pagination happens here.
#[derive(Debug, Default)]
pub struct NewsContent {
    last_updated: LastUpdatedLabel,
    rows: HashMap<String, (crate::models::NewsFeedUrl, String)>,
    /// Cumulative count of rows actually rendered (cache misses), for
    /// diagnostics.
    pub rows_rendered: usize,
}

impl NewsContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the full fragment for one pass over `feed`.
    ///
    /// Emits the header followed by a `<ul>` with exactly one
    /// `<li data-key="{slug}">` per input record, in input order. Rows whose
    /// record compares equal to the previous pass are reused from the cache;
    /// cache entries for slugs no longer present are dropped.
    pub fn render(&mut self, feed: &NewsFeed) -> String {
        let duplicate_slugs: Vec<&str> = feed
            .newsFeedUrls
            .iter()
            .map(|l| l.urlSlug.as_str())
            .duplicates()
            .collect();
        if !duplicate_slugs.is_empty() {
            // Slugs are the list keys; duplicates make row reuse ambiguous.
            warn!(slugs = ?duplicate_slugs, "Duplicate url slugs in feed");
        }

        let completed_at = feed.newsFeedStatus.as_ref().and_then(|s| s.completedAt);
        let label = self.last_updated.get(completed_at).to_string();

        let mut html = render_header(&label);
        writeln!(html, r#"<div class="container w-full px-4 mx-auto md:max-w-3xl">"#).unwrap();
        writeln!(html, "<ul>").unwrap();

        let mut next_rows = HashMap::with_capacity(feed.newsFeedUrls.len());
        let mut reused = 0usize;
        for link in &feed.newsFeedUrls {
            let row = match self.rows.get(&link.urlSlug) {
                Some((cached, cached_row)) if cached == link => {
                    reused += 1;
                    cached_row.clone()
                }
                _ => {
                    self.rows_rendered += 1;
                    render_item(link)
                }
            };
            html.push_str(&row);
            next_rows.insert(link.urlSlug.clone(), (link.clone(), row));
        }
        self.rows = next_rows;

        writeln!(html, "</ul>").unwrap();
        writeln!(html, "</div>").unwrap();

        debug!(
            items = feed.newsFeedUrls.len(),
            reused,
            "Rendered news-content fragment"
        );
        html
    }
}
