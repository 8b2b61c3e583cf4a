//! Patch-note viewer page: version picker, tagline, and the tabbed bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount (browser only) it loads the latest bundle
//! and the version list together, then the AI summary in the background.
//! Picking a version reloads the bundle and then that version's summary.
//!
//! CONCURRENCY
//! ===========
//! Loads are detached `spawn_local` tasks. A flag cleared in `on_cleanup`
//! turns replies that land after unmount into no-ops; requests in flight are
//! not aborted. Overlapping loads are ordered by the request tokens in
//! `ViewerState`, so the most recently started load wins.

use leptos::prelude::*;

use crate::components::tab_container::TabContainer;
use crate::state::viewer::ViewerState;

const RIOT_NOTES_URL: &str = "https://www.leagueoflegends.com/en-us/news/game-updates/";
const JAALIP_URL: &str = "https://jaalip.com/";

#[component]
pub fn ViewerPage() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        leptos::task::spawn_local(load::initial(viewer, alive.clone()));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_select_version = Callback::new(move |dotted: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(load::version(viewer, alive.clone(), dotted));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dotted;
        }
    });

    view! {
        <div class="container">
            <header class="header">
                <h1>"League of Legends Patchnote Summarizer"</h1>
                <Show when=move || viewer.with(|s| !s.versions.is_empty())>
                    <select
                        aria-label="Select patch version"
                        class="version-select"
                        disabled=move || viewer.with(|s| s.loading)
                        on:change=move |ev| on_select_version.run(event_target_value(&ev))
                    >
                        {move || {
                            let (current, versions) = viewer.with(|s| (s.display_version(), s.versions.clone()));
                            versions
                                .into_iter()
                                .map(|v| {
                                    let selected = v == current;
                                    let label = v.clone();
                                    view! { <option value=v selected=selected>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </Show>
            </header>

            <Show when=move || viewer.with(ViewerState::shows_tagline)>
                <div class="tagline" title="Summaries">
                    {move || viewer.with(|s| s.bundle.tagline.clone())}
                    {move || {
                        viewer
                            .with(ViewerState::tagline_suffix)
                            .map(|suffix| view! { <span class="muted tagline__summary">{suffix}</span> })
                    }}
                </div>
            </Show>

            <Show when=move || viewer.with(|s| s.loading)>
                <div class="status">"Loading…"</div>
            </Show>
            {move || viewer.with(|s| s.error.clone()).map(|message| view! { <div class="status error">{message}</div> })}

            <Show when=move || viewer.with(ViewerState::shows_tabs)>
                // Read untracked: a late summary must not remount the tabs.
                <TabContainer bundle=viewer.with_untracked(|s| s.bundle.clone())/>
            </Show>

            <footer class="footer">
                <a class="source-link" href=RIOT_NOTES_URL target="_blank" rel="noopener noreferrer">
                    "Official patch notes — Riot Games"
                </a>
                <span class="muted">" · "</span>
                <a class="source-link" href=JAALIP_URL target="_blank" rel="noopener noreferrer">
                    "JaaLip.com"
                </a>
            </footer>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod load {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use leptos::prelude::*;

    use crate::net::api;
    use crate::state::viewer::ViewerState;
    use crate::util::version::to_dashed;

    /// Mount-time load: latest bundle and version list together, then the summary.
    pub(super) async fn initial(viewer: RwSignal<ViewerState>, alive: Arc<AtomicBool>) {
        let Some(token) = viewer.try_update(ViewerState::begin_initial_load) else {
            return;
        };
        let (bundle, versions) = futures::join!(api::fetch_bundle(None), api::fetch_versions());
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        let result = bundle.and_then(|b| versions.map(|v| (b, v)));
        if let Err(message) = &result {
            log::warn!("bundle load failed: {message}");
        }
        let current = viewer.try_update(|s| s.finish_initial_load(token, result)).unwrap_or(false);
        if !current {
            return;
        }
        let dashed = viewer.with_untracked(|s| s.version.clone());
        summary(viewer, &alive, &dashed).await;
    }

    /// User picked `dotted` from the selector.
    pub(super) async fn version(viewer: RwSignal<ViewerState>, alive: Arc<AtomicBool>, dotted: String) {
        let dashed = to_dashed(&dotted);
        let Some(token) = viewer.try_update(ViewerState::begin_version_load) else {
            return;
        };
        let result = api::fetch_bundle(Some(&dashed)).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        if let Err(message) = &result {
            log::warn!("bundle load for {dashed} failed: {message}");
        }
        let current = viewer.try_update(|s| s.finish_version_load(token, &dashed, result)).unwrap_or(false);
        if !current {
            return;
        }
        summary(viewer, &alive, &dashed).await;
    }

    /// Background summary fetch; failures only empty the summary.
    async fn summary(viewer: RwSignal<ViewerState>, alive: &AtomicBool, dashed: &str) {
        let Some(token) = viewer.try_update(ViewerState::begin_summary) else {
            return;
        };
        let result = api::fetch_summary(Some(dashed)).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        if let Err(message) = &result {
            log::warn!("summary load for {dashed} failed: {message}");
        }
        viewer.try_update(|s| s.finish_summary(token, result));
    }
}
