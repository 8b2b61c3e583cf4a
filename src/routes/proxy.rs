//! Read-only proxy to the patch-notes backend.
//!
//! Only the backend's public resources are forwarded; anything else is a 404
//! here and never reaches upstream. Upstream status codes and bodies pass
//! through unchanged so the viewer sees exactly what the backend reported.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::Json;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// First path segments the backend serves.
pub const ALLOWED_RESOURCES: &[&str] = &[
    "bundle",
    "versions",
    "version",
    "summary",
    "champions",
    "items",
    "other",
    "arena",
    "tagline",
    "highlights",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown endpoint: /api/{0}")]
    UnknownEndpoint(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("invalid upstream base url: {0}")]
    UpstreamBase(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::UnknownEndpoint(_) => StatusCode::NOT_FOUND,
            ProxyError::Upstream(_) | ProxyError::UpstreamBase(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Map `/api/{path}?{query}` onto the backend.
///
/// Each path segment is percent-encoded onto the base URL, so the result
/// always stays under the API root.
///
/// # Errors
///
/// Returns `UnknownEndpoint` for resources outside `ALLOWED_RESOURCES` or
/// paths that try to climb out of the API root, and `UpstreamBase` when the
/// configured base URL cannot carry a path.
pub fn upstream_url(api_url: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let unknown = || ProxyError::UnknownEndpoint(path.to_owned());

    let mut segments = path.split('/');
    let resource = segments.next().unwrap_or_default();
    if !ALLOWED_RESOURCES.contains(&resource) || segments.any(is_unsafe_segment) {
        return Err(unknown());
    }

    let base = reqwest::Url::parse(api_url).map_err(|e| ProxyError::UpstreamBase(format!("{api_url}: {e}")))?;
    let root = base.path().trim_end_matches('/').to_owned();

    let mut url = base;
    url.path_segments_mut()
        .map_err(|()| ProxyError::UpstreamBase(api_url.to_owned()))?
        .pop_if_empty()
        .extend(path.split('/'));
    url.set_query(query.filter(|q| !q.is_empty()));

    if !url.path().starts_with(&format!("{root}/{resource}")) {
        return Err(unknown());
    }
    Ok(url.into())
}

fn is_unsafe_segment(segment: &str) -> bool {
    matches!(segment, "." | "..") || segment.contains(['\\', '%'])
}

/// `GET /api/{*path}`: forward to the backend and relay its reply.
pub async fn proxy_get(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_url, &path, query.as_deref())?;

    let upstream = state.http.get(&url).send().await.inspect_err(|e| {
        tracing::warn!(%url, error = %e, "upstream request failed");
    })?;
    let status = upstream.status();
    let body = upstream.bytes().await?;

    if status.is_success() {
        tracing::debug!(%url, %status, bytes = body.len(), "proxied");
    } else {
        tracing::warn!(%url, %status, "upstream returned error status");
    }

    Ok((status, [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, "no-store")], body).into_response())
}
