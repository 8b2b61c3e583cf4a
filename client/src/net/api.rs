//! REST API helpers for the patch-notes backend (proxied under `/api`).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the viewer only loads
//! data after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of
//! panics; the loader decides whether a failure is fatal (bundle) or
//! silently recovered (summary).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Bundle, SummaryResponse, VersionList};

/// Path prefix the server proxies to the backend.
pub const API_BASE: &str = "/api";

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// `/api/bundle/` for the latest patch, `/api/bundle/{dashed}` otherwise.
#[must_use]
pub fn bundle_endpoint(dashed_version: Option<&str>) -> String {
    versioned_endpoint("bundle", dashed_version)
}

/// `/api/summary/` for the latest patch, `/api/summary/{dashed}` otherwise.
#[must_use]
pub fn summary_endpoint(dashed_version: Option<&str>) -> String {
    versioned_endpoint("summary", dashed_version)
}

#[must_use]
pub fn versions_endpoint() -> String {
    format!("{API_BASE}/versions/")
}

fn versioned_endpoint(resource: &str, dashed_version: Option<&str>) -> String {
    match dashed_version.filter(|v| !v.is_empty()) {
        Some(version) => format!("{API_BASE}/{resource}/{version}"),
        None => format!("{API_BASE}/{resource}/"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("Fetch failed: {status}")
}

/// Fetch the bundle for `dashed_version`, or the latest when `None`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or a body
/// that is not a bundle.
pub async fn fetch_bundle(dashed_version: Option<&str>) -> Result<Bundle, String> {
    fetch_json(&bundle_endpoint(dashed_version)).await
}

/// Fetch the recent version list.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_versions() -> Result<VersionList, String> {
    fetch_json(&versions_endpoint()).await
}

/// Fetch the one-line AI summary for `dashed_version`, or the latest.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_summary(dashed_version: Option<&str>) -> Result<String, String> {
    let body: SummaryResponse = fetch_json(&summary_endpoint(dashed_version)).await?;
    Ok(body.into_text())
}

async fn fetch_json<T>(url: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}
