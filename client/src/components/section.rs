//! Grid of cards for one bundle section.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::card::Card;
use crate::content::{Entry, extract_entries};
use crate::state::ui::{TabsState, card_key};

/// What a section renders: the placeholder, or one keyed card per entry.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Placeholder,
    Cards(Vec<(String, Entry)>),
}

/// Cards are keyed by `section_id` so expansion never leaks across sections.
#[must_use]
pub fn section_body(section_id: &str, data: &Value) -> SectionBody {
    let entries = extract_entries(data);
    if entries.is_empty() {
        return SectionBody::Placeholder;
    }
    SectionBody::Cards(entries.into_iter().map(|entry| (card_key(section_id, &entry.title), entry)).collect())
}

/// Renders every entry of `data` as a card, or a "No data" placeholder.
#[component]
pub fn Section(section_id: &'static str, data: Value) -> impl IntoView {
    let tabs = expect_context::<RwSignal<TabsState>>();
    let SectionBody::Cards(cards) = section_body(section_id, &data) else {
        return view! { <div class="muted">"No data"</div> }.into_any();
    };

    let cards = cards
        .into_iter()
        .map(|(key, entry)| {
            let toggle_key = key.clone();
            let open = Signal::derive(move || tabs.with(|t| t.is_expanded(&key)));
            let on_toggle = Callback::new(move |()| tabs.update(|t| t.toggle(&toggle_key)));
            view! { <Card title=entry.title content=entry.content open=open on_toggle=on_toggle/> }
        })
        .collect::<Vec<_>>();

    view! { <div class="grid">{cards}</div> }.into_any()
}
