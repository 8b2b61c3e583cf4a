//! Tab strip plus the single mounted panel.
//!
//! ARCHITECTURE
//! ============
//! The container owns `TabsState` and provides it as context so sections can
//! read and flip card expansion. Only the active panel is rendered; the
//! others are not mounted at all.

#[cfg(test)]
#[path = "tab_container_test.rs"]
mod tab_container_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::arena_panel::ArenaPanel;
use crate::components::highlights_panel::HighlightsPanel;
use crate::components::section::Section;
use crate::net::types::Bundle;
use crate::state::ui::{TabId, TabsState};

#[component]
pub fn TabContainer(bundle: Bundle) -> impl IntoView {
    let tabs = RwSignal::new(TabsState::new(TabId::ALL[0]));
    provide_context(tabs);

    // Toggling a card must not remount the panel, so track only the tab id.
    let active = Memo::new(move |_| tabs.with(|t| t.active));

    view! {
        <div>
            <div class="tabs">
                {TabId::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || active.get() == tab
                                on:click=move |_| tabs.update(|t| t.select(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="tab-content">{move || render_panel(active.get(), &bundle)}</div>
        </div>
    }
}

/// Section data behind a plain card-grid tab. Highlights and Arena have
/// their own panels.
#[must_use]
pub fn section_data(tab: TabId, bundle: &Bundle) -> Option<&Value> {
    match tab {
        TabId::Champions => Some(&bundle.champions),
        TabId::Items => Some(&bundle.items),
        TabId::Other => Some(&bundle.other),
        TabId::Highlights | TabId::Arena => None,
    }
}

fn render_panel(tab: TabId, bundle: &Bundle) -> AnyView {
    match tab {
        TabId::Highlights => view! { <HighlightsPanel highlights=bundle.highlights.clone()/> }.into_any(),
        TabId::Arena => view! { <ArenaPanel arena=bundle.arena.clone()/> }.into_any(),
        TabId::Champions | TabId::Items | TabId::Other => {
            let data = section_data(tab, bundle).cloned().unwrap_or_default();
            view! { <Section section_id=tab.id() data=data/> }.into_any()
        }
    }
}
