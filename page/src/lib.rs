//! # mindread-page
//!
//! Leptos SSR renderer for the *Read Your Mind* by Oz deep-dive page.
//!
//! The page is a summary of the book laid out as a header banner, four topic
//! sections and a closing roadmap. All text lives in const tables; rendering
//! is a pure function of that data and produces byte-identical HTML on every
//! call.
//!
//! ## Quick Start
//!
//! ```rust
//! use mindread_page::render_page;
//!
//! let html = render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Read Your Mind by Oz"));
//! ```
//!
//! Rendering a single section from your own entries:
//!
//! ```rust
//! use mindread_page::{render_section, types::TopicEntry};
//!
//! let entries = [TopicEntry::new("Layered Forcing", "Nudges and asymmetric choices.")];
//! let html = render_section("Methods", "How it is done", &entries);
//! assert!(html.contains("Layered Forcing"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Topic entries, section ids and page blocks
//! - [`content`] - The four topic lists
//! - [`validate`] - Title and key checks run before serving
//! - [`layout`] - Section renderer and page composition, as data
//! - [`components`] - Leptos components turning blocks into markup
//! - [`styles`] - Inline CSS and CSP
//!
//! No reactive runtime or hydration is involved - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod layout;
pub mod styles;
pub mod types;
pub mod validate;

use components::{InsightSection, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{PageLayout, TopicEntry};

/// Render the complete page from the content repository.
///
/// # Example
///
/// ```rust
/// let html = mindread_page::render_page();
/// assert!(html.contains("Reading Roadmap"));
/// ```
pub fn render_page() -> String {
    render_layout(layout::compose_page())
}

/// Render a composed layout as a full HTML document, `<!DOCTYPE html>` included.
pub fn render_layout(layout: PageLayout) -> String {
    let doc = view! { <PageDocument layout=layout /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render one section as an HTML fragment.
///
/// `entries` may be empty; the fragment then holds the heading, the subtitle
/// and an empty list.
pub fn render_section(
    heading: impl Into<String>,
    subtitle: impl Into<String>,
    entries: &[TopicEntry],
) -> String {
    let block = layout::section_block(heading, subtitle, entries);
    view! { <InsightSection block=block /> }.to_html()
}
