//! Feed header rendering: static subtitle and the freshness line.
//!
//! The relative-time label is derived from the feed status' completion
//! timestamp and memoized on it, so repeated render passes over an
//! unchanged feed reuse the cached label instead of re-deriving it.

use crate::time::time_since;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use tracing::debug;

/// Subtitle shown above the article list.
pub const SUBTITLE: &str = "Trending climate related articles shared by \
leading climate scientists, organizations, journalists and activists.";

/// Memoized "last updated" label.
///
/// The cache key is the optional completion timestamp; the label is only
/// recomputed when that key changes between passes. An absent timestamp
/// yields the empty string, which suppresses the freshness line entirely.
#[derive(Debug, Default)]
pub struct LastUpdatedLabel {
    cache: Option<(Option<DateTime<Utc>>, String)>,
    /// Cumulative recompute count, for diagnostics.
    pub recomputes: usize,
}

impl LastUpdatedLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the label for `completed_at`, recomputing only on key change.
    pub fn get(&mut self, completed_at: Option<DateTime<Utc>>) -> &str {
        let stale = match &self.cache {
            Some((key, _)) => *key != completed_at,
            None => true,
        };
        if stale {
            let label = completed_at
                .map(|t| time_since(t, Utc::now()))
                .unwrap_or_default();
            self.recomputes += 1;
            debug!(?completed_at, %label, "Recomputed last-updated label");
            self.cache = Some((completed_at, label));
        }
        self.cache.as_ref().map(|(_, l)| l.as_str()).unwrap_or("")
    }
}

/// Render the feed header.
///
/// Always emits the subtitle; emits the `Updated {label}` line only when
/// the label is non-empty, so a feed with unknown freshness shows no stale
/// placeholder text.
pub fn render_header(last_updated: &str) -> String {
    let mut html = String::new();
    writeln!(html, r#"<header class="container w-full px-4 mx-auto md:max-w-3xl">"#).unwrap();
    writeln!(html, r#"<p class="text-base text-gray-700">{}</p>"#, SUBTITLE).unwrap();
    if !last_updated.is_empty() {
        writeln!(
            html,
            r#"<p class="text-sm text-gray-500">Updated {}</p>"#,
            crate::utils::escape_html(last_updated)
        )
        .unwrap();
    }
    writeln!(html, "</header>").unwrap();
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_label_empty_without_timestamp() {
        let mut label = LastUpdatedLabel::new();
        assert_eq!(label.get(None), "");
    }

    #[test]
    fn test_label_one_hour_ago() {
        let mut label = LastUpdatedLabel::new();
        let completed = Utc::now() - Duration::hours(1);
        assert_eq!(label.get(Some(completed)), "1 hour ago");
    }

    #[test]
    fn test_label_memoized_on_unchanged_timestamp() {
        let mut label = LastUpdatedLabel::new();
        let completed = Utc::now() - Duration::hours(3);

        label.get(Some(completed));
        label.get(Some(completed));
        label.get(Some(completed));
        assert_eq!(label.recomputes, 1);

        // Key change invalidates the cache.
        label.get(Some(completed + Duration::minutes(5)));
        assert_eq!(label.recomputes, 2);

        // Dropping the timestamp is a key change too.
        label.get(None);
        assert_eq!(label.recomputes, 3);
        assert_eq!(label.get(None), "");
        assert_eq!(label.recomputes, 3);
    }

    #[test]
    fn test_header_includes_subtitle() {
        let html = render_header("");
        assert!(html.contains(SUBTITLE));
    }

    #[test]
    fn test_header_omits_freshness_line_when_label_empty() {
        let html = render_header("");
        assert!(!html.contains("Updated"));
    }

    #[test]
    fn test_header_shows_freshness_line() {
        let html = render_header("1 hour ago");
        assert!(html.contains("Updated 1 hour ago"));
    }
}
