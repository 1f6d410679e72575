//! Startup checks for the content repository.
//!
//! Titles are the identity keys of rendered items, so each list must have
//! non-empty, unique titles (and unique slugs, since the slug is what lands in
//! `data-key`). Rendering never calls into this module; the server runs
//! [`validate_repository`] once before it starts listening.

use std::collections::HashMap;

use thiserror::Error;

use crate::content;
use crate::types::TopicEntry;

/// A defect in literal content data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Title is empty or whitespace
    #[error("{section}: entry #{index} has an empty title")]
    EmptyTitle {
        /// List label
        section: &'static str,
        /// Zero-based position in the list
        index: usize,
    },

    /// Description is empty or whitespace
    #[error("{section}: entry \"{title}\" has an empty description")]
    EmptyDescription {
        /// List label
        section: &'static str,
        /// Offending entry's title
        title: &'static str,
    },

    /// Same title used twice in one list
    #[error("{section}: title \"{title}\" appears more than once")]
    DuplicateTitle {
        /// List label
        section: &'static str,
        /// Repeated title
        title: &'static str,
    },

    /// Two distinct titles slugify to the same key
    #[error("{section}: titles \"{first}\" and \"{second}\" share the item key \"{key}\"")]
    DuplicateKey {
        /// List label
        section: &'static str,
        /// Earlier title
        first: &'static str,
        /// Later title
        second: &'static str,
        /// Shared key
        key: String,
    },
}

/// Checks one list. Reports the first defect found, scanning in order.
pub fn validate_entries(section: &'static str, entries: &[TopicEntry]) -> Result<(), ContentError> {
    let mut seen_keys: HashMap<String, &'static str> = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(ContentError::EmptyTitle { section, index });
        }
        if entry.description.trim().is_empty() {
            return Err(ContentError::EmptyDescription {
                section,
                title: entry.title,
            });
        }

        let key = entry.key();
        if let Some(&first) = seen_keys.get(&key) {
            if first == entry.title {
                return Err(ContentError::DuplicateTitle {
                    section,
                    title: entry.title,
                });
            }
            return Err(ContentError::DuplicateKey {
                section,
                first,
                second: entry.title,
                key,
            });
        }
        seen_keys.insert(key, entry.title);
    }

    Ok(())
}

/// Checks every list in the repository.
pub fn validate_repository() -> Result<(), ContentError> {
    for (id, entries) in content::all() {
        validate_entries(id.as_label(), entries)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(validate_repository(), Ok(()));
    }

    #[test]
    fn empty_list_is_valid() {
        assert!(validate_entries("empty", &[]).is_ok());
    }

    #[test]
    fn rejects_duplicate_title() {
        let entries = [
            TopicEntry::new("Leadership", "First."),
            TopicEntry::new("Coaching", "Second."),
            TopicEntry::new("Leadership", "Third."),
        ];
        assert_eq!(
            validate_entries("applications", &entries),
            Err(ContentError::DuplicateTitle {
                section: "applications",
                title: "Leadership",
            })
        );
    }

    #[test]
    fn rejects_titles_that_collide_as_keys() {
        let entries = [
            TopicEntry::new("Time Misdirection", "First."),
            TopicEntry::new("Time-Misdirection", "Second."),
        ];
        let err = validate_entries("signature_methods", &entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "signature_methods: titles \"Time Misdirection\" and \"Time-Misdirection\" share the item key \"time-misdirection\""
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let blank_title = [TopicEntry::new("  ", "Body.")];
        assert_eq!(
            validate_entries("core_ideas", &blank_title),
            Err(ContentError::EmptyTitle {
                section: "core_ideas",
                index: 0,
            })
        );

        let blank_description = [TopicEntry::new("Ethical Influence", "")];
        assert!(matches!(
            validate_entries("core_ideas", &blank_description),
            Err(ContentError::EmptyDescription { title: "Ethical Influence", .. })
        ));
    }
}
