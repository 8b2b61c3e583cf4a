//! Arena tab: the arena section plus arena mentions from the rest of the notes.

#[cfg(test)]
#[path = "arena_panel_test.rs"]
mod arena_panel_test;

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::components::section::Section;
use crate::net::types::{Arena, ArenaMention};

pub const MENTIONS_HEADING: &str = "Arena, all changes (See \"other\" tab)";
const ARENA_SECTION: &str = "arena";
const MENTIONS_SECTION: &str = "arena-mentions";

/// Mentions shown as one `Mentions` card with a `context: text` line each.
#[must_use]
pub fn mentions_section(mentions: &[ArenaMention]) -> Value {
    let lines: Vec<String> = mentions.iter().map(|m| format!("{}: {}", m.context, m.text)).collect();
    json!({ "Mentions": lines })
}

#[component]
pub fn ArenaPanel(arena: Arena) -> impl IntoView {
    let mentions = (!arena.mentions.is_empty()).then(|| mentions_section(&arena.mentions));

    view! {
        <h3 class="arena__heading">"Arena"</h3>
        <Section section_id=ARENA_SECTION data=arena.arena/>
        {mentions.map(|data| {
            view! {
                <div class="arena__mentions">
                    <h4 class="arena__heading">{MENTIONS_HEADING}</h4>
                    <Section section_id=MENTIONS_SECTION data=data/>
                </div>
            }
        })}
    }
}
