//! Collapsible card for one section entry.
//!
//! DESIGN
//! ======
//! The card is controlled: its open flag comes from the tab container's
//! `TabsState` and clicks are reported back through `on_toggle`. The body is
//! only mounted while open.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

use crate::components::content_view::ContentView;
use crate::content::{ContentNode, ContentValue, normalize};

/// The body to mount, if any. A closed card mounts nothing.
#[must_use]
pub fn card_body(open: bool, node: &ContentNode) -> Option<ContentNode> {
    open.then(|| node.clone())
}

#[component]
pub fn Card(
    title: String,
    content: ContentValue,
    #[prop(into)] open: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let node = normalize(&content);

    view! {
        <div class="card" class:open=move || open.get()>
            <button class="card-header" on:click=move |_| on_toggle.run(())>
                <span class="card-title">{title}</span>
                <span class="chev" aria-hidden="true">"▸"</span>
            </button>
            {move || {
                card_body(open.get(), &node)
                    .map(|node| view! { <div class="card-body"><ContentView node=node/></div> })
            }}
        </div>
    }
}
