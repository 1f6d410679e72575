//! Page composition as data.
//!
//! [`section_block`] is the section renderer: a pure mapping from
//! `(heading, subtitle, entries)` to a [`SectionBlock`]. [`compose_page`] calls
//! it once per list and arranges the results:
//!
//! ```text
//! frame
//! └── main
//!     ├── header
//!     ├── core ideas
//!     ├── signature methods
//!     ├── side-by-side row
//!     │   ├── secret reveals
//!     │   └── applications
//!     └── roadmap
//! ```

use crate::content;
use crate::types::{
    Block, HeaderBlock, PageLayout, PageMetadata, RoadmapBlock, SectionBlock, SectionId,
    SectionItem, TopicEntry,
};

/// Document metadata for the page.
pub const METADATA: PageMetadata = PageMetadata {
    title: "Read Your Mind by Oz | Deep-Dive & Hidden Lessons",
    description: "Explore the core ideas, mentalism insights, and biggest secrets revealed in Oz's book Read Your Mind.",
};

/// Header banner copy.
pub const HEADER: HeaderBlock = HeaderBlock {
    eyebrow: "Deep-Dive Overview",
    title_lead: "Inside ",
    title_emphasis: "Read Your Mind",
    title_tail: " by Oz: Mentalism Blueprints & Human Insight",
    intro: "Oz pulls back the curtain on how elite mentalists engineer jaw-dropping predictions. \
            The book blends memoir, rehearsal journals from TV specials, and step-by-step walkthroughs \
            of signature pieces. Rather than mysticism, Oz highlights deliberate practice, ethics, \
            and emotional intelligence as the real superpowers.",
};

/// Closing roadmap copy.
pub const ROADMAP: RoadmapBlock = RoadmapBlock {
    heading: "Reading Roadmap",
    body: "Start with Oz's origin story to understand the why, then move through the toolkit \
           chapters to pick up observation drills and forcing techniques. Save the dual-reality \
           breakdown and ethics manifesto for last\u{2014}they contextualize how these skills \
           should be used responsibly in the wild.",
};

/// Page frame and main column wrap every row.
const WRAPPER_BLOCKS: usize = 2;

/// Maps a heading, subtitle and entries to a section block.
///
/// Items keep input order. Nothing is sorted, filtered or deduplicated, and an
/// empty `entries` slice yields a block with zero items.
pub fn section_block(
    heading: impl Into<String>,
    subtitle: impl Into<String>,
    entries: &[TopicEntry],
) -> SectionBlock {
    SectionBlock {
        heading: heading.into(),
        subtitle: subtitle.into(),
        items: entries
            .iter()
            .map(|entry| SectionItem {
                key: entry.key(),
                title: entry.title,
                description: entry.description,
            })
            .collect(),
    }
}

/// Section block for one named list, using its page copy.
pub fn section_for(id: SectionId) -> SectionBlock {
    section_block(id.heading(), id.subtitle(), content::entries(id))
}

/// Builds the full page layout from the content repository.
pub fn compose_page() -> PageLayout {
    PageLayout {
        metadata: METADATA,
        blocks: vec![
            Block::Header(HEADER),
            Block::Section(section_for(SectionId::CoreIdeas)),
            Block::Section(section_for(SectionId::SignatureMethods)),
            Block::SideBySide {
                left: section_for(SectionId::SecretReveals),
                right: section_for(SectionId::Applications),
            },
            Block::Roadmap(ROADMAP),
        ],
    }
}

impl Block {
    /// Structural elements this row contributes, counting nested sections.
    pub fn structural_count(&self) -> usize {
        match self {
            Block::Header(_) | Block::Section(_) | Block::Roadmap(_) => 1,
            Block::SideBySide { .. } => 3,
        }
    }
}

impl PageLayout {
    /// Number of structural blocks on the page, wrappers included.
    pub fn structural_block_count(&self) -> usize {
        WRAPPER_BLOCKS + self.blocks.iter().map(Block::structural_count).sum::<usize>()
    }

    /// Every section block in top-to-bottom, left-to-right order.
    pub fn sections(&self) -> Vec<&SectionBlock> {
        self.blocks
            .iter()
            .flat_map(|block| match block {
                Block::Section(section) => vec![section],
                Block::SideBySide { left, right } => vec![left, right],
                Block::Header(_) | Block::Roadmap(_) => Vec::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn section_block_preserves_order_and_count() {
        let entries = [
            TopicEntry::new("C", "third letter"),
            TopicEntry::new("A", "first letter"),
            TopicEntry::new("B", "second letter"),
        ];
        let block = section_block("Letters", "Out of order on purpose", &entries);

        let titles: Vec<_> = block.items.iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        assert_eq!(block.items[1].description, "first letter");
    }

    #[test]
    fn section_block_keeps_duplicates() {
        let entries = [TopicEntry::new("Echo", "one"), TopicEntry::new("Echo", "two")];
        let block = section_block("Echoes", "Duplicates pass through", &entries);
        assert_eq!(block.items.len(), 2);
        assert_eq!(block.items[0].key, block.items[1].key);
    }

    #[test]
    fn section_block_accepts_empty_entries() {
        let block = section_block("Nothing Yet", "Placeholder", &[]);
        assert_eq!(block.heading, "Nothing Yet");
        assert_eq!(block.subtitle, "Placeholder");
        assert!(block.items.is_empty());
    }

    #[test]
    fn section_block_is_pure() {
        let first = section_for(SectionId::CoreIdeas);
        let second = section_for(SectionId::CoreIdeas);
        assert_eq!(first, second);
    }

    #[test]
    fn page_has_fixed_order() {
        let layout = compose_page();
        let headings: Vec<_> = layout.sections().iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Core Ideas the Book Hammers Home",
                "Signature Methods the Book Demystifies",
                "Biggest Secrets He Explicitly Reveals",
                "How Oz Recommends Translating Skills Beyond the Stage",
            ]
        );
        assert!(matches!(layout.blocks.first(), Some(Block::Header(_))));
        assert!(matches!(layout.blocks.last(), Some(Block::Roadmap(_))));
    }

    #[test]
    fn page_sections_mirror_repository() {
        let layout = compose_page();
        for (section, (_, entries)) in layout.sections().into_iter().zip(content::all()) {
            assert_eq!(section.items.len(), entries.len());
            let rendered: Vec<_> = section.items.iter().map(|i| i.title).collect();
            let source: Vec<_> = entries.iter().map(|e| e.title).collect();
            assert_eq!(rendered, source);
        }
    }

    #[test]
    fn page_counts_nine_structural_blocks() {
        assert_eq!(compose_page().structural_block_count(), 9);
    }

    #[test]
    fn metadata_names_the_book() {
        assert!(compose_page().metadata.title.contains("Read Your Mind by Oz"));
    }
}
