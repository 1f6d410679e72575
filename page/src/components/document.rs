//! Root document component - the complete HTML page
//!
//! Wraps the layout rows in the page frame and main column and fills
//! `<head>` from the layout metadata.

use leptos::prelude::*;

use super::{HeaderBanner, InsightSection, RoadmapPanel};
use crate::styles::{CSP, PAGE_CSS};
use crate::types::{Block, PageLayout};

/// The complete HTML document for the page
#[component]
pub fn PageDocument(layout: PageLayout) -> impl IntoView {
    let PageLayout { metadata, blocks } = layout;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{metadata.title}</title>
                <meta name="description" content=metadata.description />
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="page-frame" data-block="frame">
                    <main class="page-main" data-block="main">
                        {blocks.into_iter().map(|block| {
                            view! { <PageBlock block=block /> }
                        }).collect::<Vec<_>>()}
                    </main>
                </div>
            </body>
        </html>
    }
}

/// One row of the main column
#[component]
pub fn PageBlock(block: Block) -> impl IntoView {
    match block {
        Block::Header(header) => view! { <HeaderBanner block=header /> }.into_any(),
        Block::Section(section) => view! { <InsightSection block=section /> }.into_any(),
        // Stacked below 1024px, two columns above (see `.section-pair`)
        Block::SideBySide { left, right } => view! {
            <section class="section-pair" data-block="pair">
                <InsightSection block=left />
                <InsightSection block=right />
            </section>
        }
        .into_any(),
        Block::Roadmap(roadmap) => view! { <RoadmapPanel block=roadmap /> }.into_any(),
    }
}
