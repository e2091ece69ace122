//! Utility functions for HTML escaping, attribution text, and file system
//! operations.
//!
//! This module provides helper functions used throughout the renderer:
//! - HTML escaping for interpolated text and attribute values
//! - Attribution line formatting ("Shared by …")
//! - String truncation for logging
//! - File system validation for the output directory

use crate::models::NewsFeedUrl;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Escape a string for interpolation into HTML text or attribute values.
///
/// Replaces the five characters with reserved meaning (`&`, `<`, `>`, `"`,
/// `'`) with their entity forms. Safe for both element content and
/// double-quoted attributes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the attribution line for one article link.
///
/// The phrasing scales with the number of sharer handles:
/// - one handle: `Shared by @name`
/// - two handles: `Shared by @a and @b`
/// - more: `Shared by @a, @b and N others`
///
/// A record with no handles degrades to the neutral "View shares" so the
/// attribution link still renders with a target to click.
pub fn shared_by_text(link: &NewsFeedUrl) -> String {
    match link.sharedByScreenNames.as_slice() {
        [] => "View shares".to_string(),
        [one] => format!("Shared by @{one}"),
        [a, b] => format!("Shared by @{a} and @{b}"),
        [a, b, rest @ ..] => format!("Shared by @{a}, @{b} and {} others", rest.len()),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
