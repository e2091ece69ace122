//! Data models for the pre-fetched news feed document.
//!
//! This module defines the structures the renderer consumes:
//! - [`NewsFeed`]: the full input document produced by the data-fetching layer
//! - [`NewsFeedUrl`]: one curated article link with display and routing metadata
//! - [`NewsFeedStatus`]: freshness metadata for the overall feed
//!
//! The models use camelCase field names to match the JSON emitted by the
//! upstream data layer, hence the `#[allow(non_snake_case)]` attributes.
//! All of them are read-only from the renderer's point of view: the feed is
//! constructed upstream and never mutated during a render pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One shared news-article link.
///
/// Every field except `urlSlug` is optional; absent fields degrade the
/// rendered row (no host parenthetical, placeholder image, non-navigating
/// title anchor) rather than failing the render.
///
/// # Invariant
///
/// `urlSlug` is unique within a rendering pass. It is the stable list key
/// and the internal route segment (`/news_feed/{urlSlug}`).
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsFeedUrl {
    /// The fully resolved external article URL.
    pub expandedUrlParsed: Option<String>,
    /// The external host name (e.g. "nature.com"), precomputed upstream.
    pub expandedUrlHost: Option<String>,
    /// Thumbnail URL for the article preview image.
    pub previewImageThumbnailUrl: Option<String>,
    /// The article headline.
    pub title: Option<String>,
    /// Unique human-readable identifier used for internal routing and list keys.
    pub urlSlug: String,
    /// Screen names of the accounts that shared this article, most
    /// prominent first. Feeds the attribution line.
    #[serde(default)]
    pub sharedByScreenNames: Vec<String>,
}

impl NewsFeedUrl {
    /// The host name to show next to the title.
    ///
    /// Prefers the precomputed `expandedUrlHost`; when that is absent or
    /// empty, falls back to parsing the host out of the resolved URL.
    /// Returns `None` when neither yields a host, in which case the row
    /// omits the parenthetical entirely.
    pub fn display_host(&self) -> Option<String> {
        if let Some(host) = self.expandedUrlHost.as_deref().filter(|h| !h.is_empty()) {
            return Some(host.to_string());
        }
        self.expandedUrlParsed.as_deref().and_then(|raw| {
            let parsed = url::Url::parse(raw).ok()?;
            parsed.host_str().map(|h| h.to_string())
        })
    }
}

/// Freshness metadata for the feed as a whole.
///
/// `completedAt` is the instant the last upstream refresh finished. When it
/// is absent the header shows no freshness line at all.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewsFeedStatus {
    /// When the most recent feed refresh completed, if known.
    pub completedAt: Option<DateTime<Utc>>,
}

/// The full input document: an ordered list of article links plus optional
/// feed status. Order is significant and preserved verbatim by the renderer.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsFeed {
    /// Curated article links, already ordered upstream.
    #[serde(default)]
    pub newsFeedUrls: Vec<NewsFeedUrl>,
    /// Feed freshness metadata, if the upstream layer supplied it.
    pub newsFeedStatus: Option<NewsFeedStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn minimal_link(slug: &str) -> NewsFeedUrl {
        NewsFeedUrl {
            expandedUrlParsed: None,
            expandedUrlHost: None,
            previewImageThumbnailUrl: None,
            title: None,
            urlSlug: slug.to_string(),
            sharedByScreenNames: vec![],
        }
    }

    #[test]
    fn test_feed_deserialization_camel_case() {
        let json = r#"{
            "newsFeedUrls": [
                {
                    "expandedUrlParsed": "https://www.nature.com/articles/glacier",
                    "expandedUrlHost": "nature.com",
                    "previewImageThumbnailUrl": null,
                    "title": "Glacier Melt Accelerates",
                    "urlSlug": "glacier-melt"
                }
            ],
            "newsFeedStatus": { "completedAt": "2026-08-23T10:00:00Z" }
        }"#;

        let feed: NewsFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.newsFeedUrls.len(), 1);
        assert_eq!(feed.newsFeedUrls[0].urlSlug, "glacier-melt");
        assert_eq!(feed.newsFeedUrls[0].sharedByScreenNames.len(), 0);
        let status = feed.newsFeedStatus.unwrap();
        assert_eq!(
            status.completedAt.unwrap(),
            Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_feed_defaults_when_fields_missing() {
        let feed: NewsFeed = serde_json::from_str(r#"{ "newsFeedStatus": null }"#).unwrap();
        assert!(feed.newsFeedUrls.is_empty());
        assert!(feed.newsFeedStatus.is_none());
    }

    #[test]
    fn test_display_host_prefers_precomputed_field() {
        let mut link = minimal_link("a");
        link.expandedUrlHost = Some("nature.com".to_string());
        link.expandedUrlParsed = Some("https://lite.cnn.com/article".to_string());
        assert_eq!(link.display_host(), Some("nature.com".to_string()));
    }

    #[test]
    fn test_display_host_falls_back_to_url_parse() {
        let mut link = minimal_link("a");
        link.expandedUrlHost = Some(String::new());
        link.expandedUrlParsed = Some("https://text.npr.org/article/123".to_string());
        assert_eq!(link.display_host(), Some("text.npr.org".to_string()));
    }

    #[test]
    fn test_display_host_none_when_nothing_available() {
        let mut link = minimal_link("a");
        assert_eq!(link.display_host(), None);

        link.expandedUrlParsed = Some("not a url".to_string());
        assert_eq!(link.display_host(), None);
    }

    #[test]
    fn test_link_value_equality_drives_memo_invalidation() {
        let a = minimal_link("slug");
        let mut b = a.clone();
        assert_eq!(a, b);

        b.title = Some("changed".to_string());
        assert_ne!(a, b);
    }
}
