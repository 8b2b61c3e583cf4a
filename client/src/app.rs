//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::viewer::ViewerPage;
use crate::state::viewer::ViewerState;
use crate::util::version::document_title;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the loader state and keeps the browser title on the loaded version.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = RwSignal::new(ViewerState::default());
    provide_context(viewer);

    view! {
        <Stylesheet id="leptos" href="/pkg/patchnotes.css"/>
        <Title text=move || document_title(&viewer.with(ViewerState::display_version))/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ViewerPage/>
            </Routes>
        </Router>
    }
}
