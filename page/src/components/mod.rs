//! Leptos UI components for the page.
//!
//! Each component is a Leptos `#[component]` function taking one block from
//! [`crate::types`] by value and producing static markup.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── PageBlock (per layout row)
//!     ├── HeaderBanner
//!     ├── InsightSection
//!     ├── section-pair
//!     │   ├── InsightSection
//!     │   └── InsightSection
//!     └── RoadmapPanel
//! ```
//!
//! # Usage
//!
//! Components are normally driven by [`crate::render_page`], but can be used
//! directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use mindread_page::components::InsightSection;
//! use mindread_page::layout::section_for;
//! use mindread_page::types::SectionId;
//!
//! view! { <InsightSection block=section_for(SectionId::CoreIdeas) /> }
//! ```

mod document;
mod header;
mod insight_section;
mod roadmap;

pub use document::{PageBlock, PageDocument};
pub use header::HeaderBanner;
pub use insight_section::InsightSection;
pub use roadmap::RoadmapPanel;
