use super::*;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

// =============================================================
// Helpers
// =============================================================

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/bundle/", get(|| async { Json(json!({"version": "15-12", "champions": {"Ahri": "buffed Q"}})) }))
        .route(
            "/bundle/{version}",
            get(|Path(version): Path<String>| async move {
                if version == "0-0" {
                    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"}))).into_response()
                } else {
                    Json(json!({"version": version})).into_response()
                }
            }),
        )
        .route("/versions/", get(|| async { Json(json!({"versions": ["15-12", "15-11"]})) }))
        .route("/summary/", get(|RawQuery(query): RawQuery| async move { Json(json!({"summary": query})) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn call(state: AppState, path: &str, query: Option<&str>) -> Response {
    match proxy_get(State(state), Path(path.to_owned()), RawQuery(query.map(str::to_owned))).await {
        Ok(resp) => resp,
        Err(err) => err.into_response(),
    }
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_keeps_trailing_slash() {
    assert_eq!(upstream_url("http://b", "bundle/", None).unwrap(), "http://b/bundle/");
    assert_eq!(upstream_url("http://b", "bundle/15-12", None).unwrap(), "http://b/bundle/15-12");
}

#[test]
fn upstream_url_appends_query() {
    assert_eq!(upstream_url("http://b", "summary/", Some("x=1")).unwrap(), "http://b/summary/?x=1");
    assert_eq!(upstream_url("http://b", "summary/", Some("")).unwrap(), "http://b/summary/");
}

#[test]
fn upstream_url_rejects_unknown_resources() {
    assert!(matches!(upstream_url("http://b", "admin/", None), Err(ProxyError::UnknownEndpoint(_))));
    assert!(matches!(upstream_url("http://b", "", None), Err(ProxyError::UnknownEndpoint(_))));
    assert!(matches!(upstream_url("http://b", "bundle/../admin", None), Err(ProxyError::UnknownEndpoint(_))));
}

#[test]
fn upstream_url_rejects_backslash_and_encoded_traversal() {
    for path in [
        "bundle/x\\..\\..\\admin",
        "bundle/%2e%2e/%2e%2e/admin",
        "bundle/./x",
        "bundle/x/..",
    ] {
        assert!(
            matches!(upstream_url("http://backend/api", path, None), Err(ProxyError::UnknownEndpoint(_))),
            "{path} should be rejected"
        );
    }
}

#[test]
fn upstream_url_stays_under_api_root() {
    let url = upstream_url("http://backend/api/", "bundle/15-12", Some("fresh=1")).unwrap();
    assert_eq!(url, "http://backend/api/bundle/15-12?fresh=1");

    let parsed = reqwest::Url::parse(&url).unwrap();
    assert!(parsed.path().starts_with("/api/bundle/"));
}

#[test]
fn upstream_url_rejects_base_without_path() {
    assert!(matches!(upstream_url("mailto:ops@example.com", "bundle/", None), Err(ProxyError::UpstreamBase(_))));
    assert!(matches!(upstream_url("not a url", "bundle/", None), Err(ProxyError::UpstreamBase(_))));
}

// =============================================================
// proxy_get
// =============================================================

#[tokio::test]
async fn forwards_latest_bundle() {
    let base = spawn_upstream().await;
    let resp = call(AppState::with_client(reqwest::Client::new(), &base), "bundle/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(body_json(resp).await["champions"]["Ahri"], "buffed Q");
}

#[tokio::test]
async fn forwards_versioned_bundle_and_version_list() {
    let base = spawn_upstream().await;
    let state = AppState::with_client(reqwest::Client::new(), &base);

    let bundle = call(state.clone(), "bundle/15-11", None).await;
    assert_eq!(body_json(bundle).await, json!({"version": "15-11"}));

    let versions = call(state, "versions/", None).await;
    assert_eq!(body_json(versions).await, json!({"versions": ["15-12", "15-11"]}));
}

#[tokio::test]
async fn forwards_query_string() {
    let base = spawn_upstream().await;
    let resp = call(AppState::with_client(reqwest::Client::new(), &base), "summary/", Some("fresh=1")).await;
    assert_eq!(body_json(resp).await, json!({"summary": "fresh=1"}));
}

#[tokio::test]
async fn relays_upstream_error_status() {
    let base = spawn_upstream().await;
    let resp = call(AppState::with_client(reqwest::Client::new(), &base), "bundle/0-0", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn unknown_endpoint_is_not_found() {
    let resp = call(AppState::with_client(reqwest::Client::new(), "http://127.0.0.1:9"), "admin/", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"detail": "unknown endpoint: /api/admin/"}));
}

#[tokio::test]
async fn encoded_traversal_never_reaches_upstream() {
    let state = AppState::with_client(reqwest::Client::new(), "http://127.0.0.1:9");
    let resp = call(state, "bundle/%2e%2e/%2e%2e/admin", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resp = call(AppState::with_client(reqwest::Client::new(), &format!("http://{addr}")), "bundle/", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(resp).await["detail"].as_str().unwrap().starts_with("upstream request failed"));
}
