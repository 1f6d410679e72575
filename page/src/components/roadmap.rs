use leptos::prelude::*;

use crate::types::RoadmapBlock;

/// Closing roadmap card.
#[component]
pub fn RoadmapPanel(block: RoadmapBlock) -> impl IntoView {
    view! {
        <section class="card roadmap" data-block="roadmap">
            <h2 class="section-heading">{block.heading}</h2>
            <p>{block.body}</p>
        </section>
    }
}
