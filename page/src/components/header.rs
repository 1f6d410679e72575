//! Header banner

use leptos::prelude::*;

use crate::types::HeaderBlock;

/// Banner with eyebrow pill, page title and intro paragraph.
#[component]
pub fn HeaderBanner(block: HeaderBlock) -> impl IntoView {
    view! {
        <header class="card page-header" data-block="header">
            <p class="eyebrow">{block.eyebrow}</p>
            <h1 class="page-title">
                {block.title_lead}
                <em>{block.title_emphasis}</em>
                {block.title_tail}
            </h1>
            <p class="lead">{block.intro}</p>
        </header>
    }
}
