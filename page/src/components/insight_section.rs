//! Insight section - heading, subtitle and the keyed item list.

use leptos::prelude::*;

use crate::types::{SectionBlock, slugify};

/// One topic section card.
///
/// Renders every item in the order given; an empty block still renders its
/// heading, subtitle and an empty list.
#[component]
pub fn InsightSection(block: SectionBlock) -> impl IntoView {
    let anchor = slugify(&block.heading);

    view! {
        <section id=anchor class="card insight-section" data-block="section">
            <div class="section-intro">
                <h2 class="section-heading">{block.heading}</h2>
                <p class="section-subtitle">{block.subtitle}</p>
            </div>
            <ul class="insight-list">
                {block.items.into_iter().map(|item| {
                    view! {
                        <li class="insight-item" data-key=item.key>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
