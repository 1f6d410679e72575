//! Page data types.
//!
//! Everything the page shows is modelled here as plain data before any HTML
//! is produced. The types are:
//!
//! - **Literal-backed** - topic text is `&'static str` taken from const tables
//! - **Clone-friendly** - components take their blocks by value
//! - **Serializable** - the content repository can be exported as JSON
//!
//! # Example
//!
//! ```rust
//! use mindread_page::types::{SectionId, TopicEntry};
//!
//! let entry = TopicEntry::new("Layered Forcing", "Nudges plus asymmetric choices.");
//! assert_eq!(entry.key(), "layered-forcing");
//! assert_eq!(SectionId::SignatureMethods.as_label(), "signature_methods");
//! ```

use serde::Serialize;

/// One discrete idea, technique or application drawn from the book.
///
/// The title doubles as the item's identity key when rendered, so it must be
/// unique inside the list that owns it (see [`crate::validate`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TopicEntry {
    /// Short display title
    pub title: &'static str,
    /// Multi-sentence explanation
    pub description: &'static str,
}

impl TopicEntry {
    /// Builds an entry; usable in `const` tables.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }

    /// Stable rendering key derived from the title.
    pub fn key(&self) -> String {
        slugify(self.title)
    }
}

/// The four named lists held by the content repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Themes the book keeps returning to
    CoreIdeas,
    /// Routines whose mechanics are explained
    SignatureMethods,
    /// Disclosures about how the impossible moments are built
    SecretReveals,
    /// Uses of the craft outside performance
    Applications,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::CoreIdeas,
        SectionId::SignatureMethods,
        SectionId::SecretReveals,
        SectionId::Applications,
    ];

    /// Lowercase label used for element ids, log fields and JSON.
    pub fn as_label(&self) -> &'static str {
        match self {
            SectionId::CoreIdeas => "core_ideas",
            SectionId::SignatureMethods => "signature_methods",
            SectionId::SecretReveals => "secret_reveals",
            SectionId::Applications => "applications",
        }
    }

    /// Section heading shown on the page.
    pub fn heading(&self) -> &'static str {
        match self {
            SectionId::CoreIdeas => "Core Ideas the Book Hammers Home",
            SectionId::SignatureMethods => "Signature Methods the Book Demystifies",
            SectionId::SecretReveals => "Biggest Secrets He Explicitly Reveals",
            SectionId::Applications => "How Oz Recommends Translating Skills Beyond the Stage",
        }
    }

    /// One-sentence subtitle under the heading.
    pub fn subtitle(&self) -> &'static str {
        match self {
            SectionId::CoreIdeas => {
                "These chapters frame mind reading as a disciplined craft grounded in observation, rehearsal, and empathy."
            }
            SectionId::SignatureMethods => {
                "Oz dissects the mechanics behind fan-favorite routines, swapping vague anecdotes for reproducible systems."
            }
            SectionId::SecretReveals => {
                "These disclosures show how the 'impossible' moments are engineered without betraying the volunteer's trust."
            }
            SectionId::Applications => {
                "The closing chapters reframe performance tactics as tools for daily communication and leadership."
            }
        }
    }
}

/// Document metadata handed to `<head>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Contents of `<title>`
    pub title: &'static str,
    /// Contents of `<meta name="description">`
    pub description: &'static str,
}

/// A rendered list item: the entry plus its key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionItem {
    /// Slug of the title, emitted as `data-key`
    pub key: String,
    /// Entry title
    pub title: &'static str,
    /// Entry description
    pub description: &'static str,
}

/// Output of the section renderer: heading, subtitle and items in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionBlock {
    /// Section heading (`<h2>`)
    pub heading: String,
    /// Subtitle paragraph
    pub subtitle: String,
    /// One item per input entry, same order
    pub items: Vec<SectionItem>,
}

/// Banner at the top of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    /// Small pill label above the title
    pub eyebrow: &'static str,
    /// Title text before the emphasised book name
    pub title_lead: &'static str,
    /// Book name, rendered in `<em>`
    pub title_emphasis: &'static str,
    /// Title text after the book name
    pub title_tail: &'static str,
    /// Intro paragraph
    pub intro: &'static str,
}

/// Closing "roadmap" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoadmapBlock {
    /// Block heading
    pub heading: &'static str,
    /// Closing paragraph
    pub body: &'static str,
}

/// One row of the page's main column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Header banner
    Header(HeaderBlock),
    /// A full-width section
    Section(SectionBlock),
    /// Two sections side by side on wide viewports, stacked otherwise
    SideBySide {
        /// Left (or upper) section
        left: SectionBlock,
        /// Right (or lower) section
        right: SectionBlock,
    },
    /// Closing roadmap
    Roadmap(RoadmapBlock),
}

/// The composed page, before it becomes HTML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    /// Document metadata
    pub metadata: PageMetadata,
    /// Rows of the main column, top to bottom
    pub blocks: Vec<Block>,
}

/// Lowercases ASCII alphanumerics and joins every other run of characters
/// into a single `-`. Leading and trailing separators are dropped.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Negotiations & Sales"), "negotiations-sales");
        assert_eq!(slugify("Time-Misdirection"), "time-misdirection");
        assert_eq!(slugify("  Dual Reality Climaxes! "), "dual-reality-climaxes");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn section_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            SectionId::ALL.iter().map(|s| s.as_label()).collect();
        assert_eq!(labels.len(), SectionId::ALL.len());
    }

    #[test]
    fn section_id_serializes_as_label() {
        let json = serde_json::to_string(&SectionId::SecretReveals).unwrap();
        assert_eq!(json, "\"secret_reveals\"");
    }
}
