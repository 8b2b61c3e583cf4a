//! Patch highlights infographic panel.

#[cfg(test)]
#[path = "highlights_panel_test.rs"]
mod highlights_panel_test;

use leptos::prelude::*;

use crate::net::types::Highlights;

/// Alt text used when the backend supplies none.
pub const DEFAULT_ALT: &str = "Patch Highlights";

/// Image source, when the bundle carries a non-empty one.
fn image_src(highlights: &Highlights) -> Option<String> {
    highlights.image.clone().filter(|src| !src.is_empty())
}

fn image_alt(highlights: &Highlights) -> String {
    if highlights.alt.is_empty() {
        DEFAULT_ALT.to_owned()
    } else {
        highlights.alt.clone()
    }
}

#[component]
pub fn HighlightsPanel(highlights: Highlights) -> impl IntoView {
    let Some(src) = image_src(&highlights) else {
        return view! { <div class="status">"No highlights image found."</div> }.into_any();
    };
    let alt = image_alt(&highlights);
    let caption = (!highlights.caption.is_empty()).then_some(highlights.caption);

    view! {
        <div class="highlights">
            <img class="highlights__image" src=src alt=alt/>
            {caption.map(|text| view! { <p class="highlights__caption">{text}</p> })}
        </div>
    }
    .into_any()
}
