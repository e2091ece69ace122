//! HTML fragment rendering for the news feed.
//!
//! This module contains the submodules that turn a [`crate::models::NewsFeed`]
//! into markup:
//!
//! # Submodules
//!
//! - [`header`]: subtitle plus the memoized "Updated …" freshness line
//! - [`item`]: one article link → one `<li>` row
//! - [`list`]: header + order-preserving `<ul>` with per-row memoization
//!
//! # Fragment Structure
//!
//! ```text
//! <header>…subtitle, freshness…</header>
//! <div class="container …">
//!   <ul>
//!     <li data-key="{slug}">…title, attribution, preview image…</li>
//!     …one per input record, input order preserved…
//!   </ul>
//! </div>
//! ```

pub mod header;
pub mod item;
pub mod list;
