//! Renders one article link as a list row.
//!
//! Each row holds the linked title with its host parenthetical, the
//! attribution line pointing at the internal per-article route, and the
//! preview image with a placeholder fallback. Missing optional fields
//! simplify the row instead of failing it: no host means no parentheses,
//! no external URL means a non-navigating anchor, no thumbnail means the
//! placeholder asset.

use crate::models::NewsFeedUrl;
use crate::utils::{escape_html, shared_by_text};
use std::fmt::Write;

/// Asset served when an article has no preview thumbnail.
pub const PLACEHOLDER_IMAGE: &str = "/news_article_placeholder.png";

/// Alt text used when an article has no title.
const GENERIC_ALT: &str = "News article preview";

/// Render one `<li>` row for an article link.
///
/// The row is keyed by the slug via `data-key`, which the list renderer
/// relies on as the stable list key.
pub fn render_item(link: &NewsFeedUrl) -> String {
    let mut html = String::new();

    let slug = escape_html(&link.urlSlug);
    // Anchors with no href don't navigate; that's the degraded form for a
    // record whose external URL is missing.
    let href_attr = link
        .expandedUrlParsed
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(|u| format!(r#" href="{}""#, escape_html(u)))
        .unwrap_or_default();

    writeln!(
        html,
        r#"<li class="grid grid-cols-12 my-4 gap-2" data-key="{slug}">"#
    )
    .unwrap();

    // Title & shares
    writeln!(html, r#"<div class="col-span-10">"#).unwrap();
    writeln!(
        html,
        r#"<a{href_attr} target="_blank" rel="noopener noreferrer" class="hover:underline">"#
    )
    .unwrap();
    let title = link.title.as_deref().unwrap_or_default();
    let host_parenthetical = link
        .display_host()
        .map(|h| format!(r#" <span class="text-gray-600">({})</span>"#, escape_html(&h)))
        .unwrap_or_default();
    writeln!(
        html,
        r#"<p class="text-base"><strong>{}</strong>{}</p>"#,
        escape_html(title),
        host_parenthetical
    )
    .unwrap();
    writeln!(html, "</a>").unwrap();

    writeln!(
        html,
        r#"<p class="mt-1 text-base text-gray-500"><a href="/news_feed/{}" class="hover:underline">{}</a></p>"#,
        urlencoding::encode(&link.urlSlug),
        escape_html(&shared_by_text(link))
    )
    .unwrap();
    writeln!(html, "</div>").unwrap();

    // Image preview
    let image_src = link
        .previewImageThumbnailUrl
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);
    let alt = link.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(GENERIC_ALT);

    writeln!(html, r#"<div class="col-span-2 flex items-start justify-center">"#).unwrap();
    writeln!(
        html,
        r#"<a{href_attr} target="_blank" rel="noopener noreferrer">"#
    )
    .unwrap();
    writeln!(
        html,
        r#"<img src="{}" alt="{}" width="80" height="80" loading="lazy" sizes="(min-width: 1024px) 80px, 60px" class="h-15 w-15 rounded lg:h-20 lg:w-20 lg:rounded-md object-cover">"#,
        escape_html(image_src),
        escape_html(alt)
    )
    .unwrap();
    writeln!(html, "</a>").unwrap();
    writeln!(html, "</div>").unwrap();

    writeln!(html, "</li>").unwrap();
    html
}
