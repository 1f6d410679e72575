//! Content repository: the four topic lists, authored once as const tables.
//!
//! Lists are read by name ([`entries`]) and iterated in definition order.
//! There is no mutation API.

use serde::Serialize;

use crate::types::{SectionId, TopicEntry};

/// Themes the book keeps returning to.
pub const CORE_IDEAS: &[TopicEntry] = &[
    TopicEntry::new(
        "Mindset as the Real Stage",
        "Oz frames mentalism as disciplined attention. The book focuses on how noticing micro-signals, emotional cues, and context allows anyone to anticipate reactions more accurately.",
    ),
    TopicEntry::new(
        "Preparation Beats Instinct",
        "Every routine is reverse-engineered from the desired reaction. Oz highlights meticulous scripting, stacked memory systems, and rehearsed outs that make 'thought reading' feel improvisational.",
    ),
    TopicEntry::new(
        "Ethical Influence",
        "Rather than manipulating, Oz stresses consent, psychological safety, and using these skills to build trust. The show succeeds only when the participant feels seen, not exposed.",
    ),
];

/// Routines whose mechanics the book explains.
pub const SIGNATURE_METHODS: &[TopicEntry] = &[
    TopicEntry::new(
        "Layered Forcing",
        "He combines subtle linguistic nudges, asymmetric choices, and prop design so spectators land on preselected answers while believing they were free to decide.",
    ),
    TopicEntry::new(
        "Time-Misdirection",
        "Crucial information is gathered or encoded minutes before a reveal. By letting the audience's memory cool, the eventual 'mind read' looks impossible.",
    ),
    TopicEntry::new(
        "Spectator-Centric Storylines",
        "Oz scripts reveals around personal milestones pulled from casual pre-show chats, converting trivia into emotionally charged climaxes.",
    ),
];

/// Secrets the book discloses outright.
pub const SECRET_REVEALS: &[TopicEntry] = &[
    TopicEntry::new(
        "Pre-Show Intelligence Gathering",
        "Assistants and casual lobby conversations funnel background details into a subtle briefing system. The book discloses how these intel cards are coded and passed on-stage.",
    ),
    TopicEntry::new(
        "Stacked Memory Systems",
        "A hybrid of the Major System and the PAO (Person\u{2013}Action\u{2013}Object) technique lets Oz memorize long strings of numbers, names, and drawings that later appear as spontaneous hits.",
    ),
    TopicEntry::new(
        "Dual Reality Climaxes",
        "In key finales, the volunteer experiences a different sequence than the audience. When narratives are stitched together, the gap reads as genuine clairvoyance.",
    ),
];

/// Off-stage uses of the craft.
pub const APPLICATIONS: &[TopicEntry] = &[
    TopicEntry::new(
        "Negotiations & Sales",
        "Mirroring posture, calibrating language, and strategic silence are repurposed as tools for reading reluctance and buying signals in real-world deals.",
    ),
    TopicEntry::new(
        "Leadership",
        "Oz argues that leaders who track team micro-behaviors can intervene early, coach with empathy, and frame messages in a way that feels bespoke.",
    ),
    TopicEntry::new(
        "Creative Brainstorming",
        "His rehearsal diagrams double as ideation frameworks: start from the desired emotional outcome, then build an experience backwards that guarantees it.",
    ),
];

/// Returns the list stored under `id`.
pub fn entries(id: SectionId) -> &'static [TopicEntry] {
    match id {
        SectionId::CoreIdeas => CORE_IDEAS,
        SectionId::SignatureMethods => SIGNATURE_METHODS,
        SectionId::SecretReveals => SECRET_REVEALS,
        SectionId::Applications => APPLICATIONS,
    }
}

/// Every list paired with its id, in page order.
pub fn all() -> impl Iterator<Item = (SectionId, &'static [TopicEntry])> {
    SectionId::ALL.into_iter().map(|id| (id, entries(id)))
}

/// A list together with its display copy, for JSON export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionExport {
    /// Section id
    pub id: SectionId,
    /// Heading shown on the page
    pub heading: &'static str,
    /// Subtitle shown on the page
    pub subtitle: &'static str,
    /// Entries in definition order
    pub entries: &'static [TopicEntry],
}

/// Snapshot of the whole repository.
pub fn export() -> Vec<SectionExport> {
    all()
        .map(|(id, entries)| SectionExport {
            id,
            heading: id.heading(),
            subtitle: id.subtitle(),
            entries,
        })
        .collect()
}
