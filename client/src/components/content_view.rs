//! Renders a normalized `ContentNode` tree.

use leptos::prelude::*;

use crate::content::ContentNode;

/// Card body content.
#[component]
pub fn ContentView(node: ContentNode) -> impl IntoView {
    render_node(node)
}

fn render_node(node: ContentNode) -> AnyView {
    match node {
        ContentNode::Text(text) => view! { <div>{text}</div> }.into_any(),
        ContentNode::List(lines) => view! {
            <ul class="list">
                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
        ContentNode::Note(note) => view! { <div class="note">{note}</div> }.into_any(),
        ContentNode::KeyValues(block) => view! { <pre class="json">{block}</pre> }.into_any(),
        ContentNode::Stack(children) => view! {
            <div class="stack">{children.into_iter().map(render_node).collect::<Vec<_>>()}</div>
        }
        .into_any(),
    }
}
