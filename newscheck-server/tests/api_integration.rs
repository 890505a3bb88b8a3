//! API integration tests for newscheck-server.
//!
//! These tests drive the full router with realistic JSON requests, covering
//! the verify flow, error mapping and health probes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use newscheck_core::{
    fingerprint, Fingerprint, LookupFailurePolicy, MemoryStore, NewLogEntry, StoreError,
    VerificationStore, VerifiedArticleRecord,
};
use newscheck_server::{create_router, create_router_with_state, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

/// Store whose every operation fails with the given error.
struct BrokenStore(StoreError);

#[async_trait]
impl VerificationStore for BrokenStore {
    async fn lookup_by_fingerprint(
        &self,
        _fingerprint: &Fingerprint,
    ) -> Result<Option<VerifiedArticleRecord>, StoreError> {
        Err(self.0.clone())
    }

    async fn append_log_entry(&self, _entry: &NewLogEntry) -> Result<Uuid, StoreError> {
        Err(self.0.clone())
    }

    async fn check_health(&self) -> Result<(), StoreError> {
        Err(self.0.clone())
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

const CURATED_ARTICLE: &str =
    "The state assembly passed the water management bill on Monday after a long debate.";

fn curated_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_articles([VerifiedArticleRecord {
        fingerprint: fingerprint(CURATED_ARTICLE),
        title_en: "Assembly passes water bill".into(),
        title_ta: "சட்டமன்றம் நீர் மசோதாவை நிறைவேற்றியது".into(),
        source_name_en: "The Hindu".into(),
        source_name_ta: "தி இந்து".into(),
        published_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 4),
        original_url: Some("https://news.example/water-bill".into()),
    }]))
}

fn app_with_store(store: Arc<dyn VerificationStore>, config: Config) -> Router {
    let state = AppState::new(store, &config);
    create_router_with_state(&config, state)
}

fn broken_app(policy: LookupFailurePolicy) -> Router {
    let config = Config {
        lookup_failure_policy: policy,
        ..Config::default()
    };
    app_with_store(
        Arc::new(BrokenStore(StoreError::Unavailable("connection refused".into()))),
        config,
    )
}

fn verify_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

// ============================================================================
// Health & Readiness Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(create_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["service"], "newscheck-server");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_degraded_store() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(broken_app(LookupFailurePolicy::DegradeToMiss), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store"], "broken");
}

#[tokio::test]
async fn test_ready_endpoint_returns_ok() {
    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(create_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ready"], true);
}

#[tokio::test]
async fn test_ready_is_unavailable_without_store() {
    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(broken_app(LookupFailurePolicy::DegradeToMiss), request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["ready"], false);
}

// ============================================================================
// Verify Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_verify_sensational_text_is_fake() {
    let body = json!({
        "contentType": "text",
        "content": "BREAKING!! You won't believe this SHOCKING viral story!!!"
    });
    let (status, json) = send(create_router(), verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "fake");
    assert_eq!(json["classification"], "man_made");
    assert!(json["id"].is_string());

    let confidence = json["confidence"].as_f64().unwrap();
    assert!((0.65..=0.95).contains(&confidence));
    assert!(json["details"]["analysis_en"]
        .as_str()
        .unwrap()
        .contains("emotional language"));
    assert!(json["details"]["analysis_ta"].is_string());
    assert!(json["details"].get("title_en").is_none());
}

#[tokio::test]
async fn test_verify_alias_route() {
    let body = json!({
        "contentType": "text",
        "content": "According to official statement, the event was confirmed by witnesses. https://example.com/report"
    });
    let (status, json) = send(create_router(), verify_request("/verify", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "true");
    assert_eq!(json["classification"], "authentic");
}

#[tokio::test]
async fn test_verify_cache_hit_returns_article_details() {
    let store = curated_store();
    let app = app_with_store(store.clone(), Config::default());

    // Same article, different case and spacing
    let body = json!({
        "contentType": "text",
        "content": "  THE STATE ASSEMBLY passed the water\tmanagement bill on Monday   after a long debate. "
    });
    let (status, json) = send(app, verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "true");
    assert_eq!(json["classification"], "authentic");
    assert_eq!(json["confidence"], 0.95);
    assert_eq!(json["details"]["title_en"], "Assembly passes water bill");
    assert_eq!(json["details"]["source_name_ta"], "தி இந்து");
    assert_eq!(json["details"]["published_date"], "2024-03-04");
    assert_eq!(
        json["details"]["original_url"],
        "https://news.example/water-bill"
    );
    assert_eq!(store.log_len(), 1);
}

#[tokio::test]
async fn test_verify_media_is_logged_by_reference() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with_store(store.clone(), Config::default());

    let body = json!({
        "contentType": "image",
        "content": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg=="
    });
    let (status, json) = send(app, verify_request("/verify-news", &body)).await;
    assert_eq!(status, StatusCode::OK);

    let id: Uuid = json["id"].as_str().unwrap().parse().unwrap();
    let logged = store.log_entry(&id).unwrap();
    assert!(logged.entry.content_text.is_none());
    assert!(logged
        .entry
        .content_ref
        .as_deref()
        .unwrap()
        .starts_with("image/png;sha256="));
}

#[tokio::test]
async fn test_verify_empty_content_is_accepted() {
    let body = json!({ "contentType": "text", "content": "" });
    let (status, json) = send(create_router(), verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "fake");
    assert_eq!(json["classification"], "man_made");
}

#[tokio::test]
async fn test_verify_missing_content_is_bad_request() {
    let body = json!({ "contentType": "text" });
    let (status, json) = send(create_router(), verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Failed to verify content");
    assert_eq!(json["code"], "MALFORMED_SUBMISSION");
}

#[tokio::test]
async fn test_verify_unknown_content_type_is_bad_request() {
    let body = json!({ "contentType": "audio", "content": "hello" });
    let (status, json) = send(create_router(), verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_SUBMISSION");
}

#[tokio::test]
async fn test_verify_invalid_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/verify-news")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(create_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Failed to verify content");
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_verify_oversized_content_is_rejected() {
    let config = Config {
        max_content_size_mb: 0,
        ..Config::default()
    };
    let app = app_with_store(Arc::new(MemoryStore::new()), config);

    let body = json!({ "contentType": "text", "content": "anything at all" });
    let (status, json) = send(app, verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "CONTENT_TOO_LARGE");
}

#[tokio::test]
async fn test_verify_accepts_multi_megabyte_media() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with_store(store.clone(), Config::default());

    // Larger than axum's built-in 2 MB JSON extractor default
    let content = format!("data:image/png;base64,{}", "A".repeat(3 * 1024 * 1024));
    let body = json!({ "contentType": "image", "content": content });
    let (status, json) = send(app, verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["confidence"].as_f64().unwrap() <= 0.95);
    assert_eq!(store.log_len(), 1);
}

#[tokio::test]
async fn test_body_over_transport_limit_uses_error_shape() {
    let config = Config {
        body_limit_mb: 0,
        ..Config::default()
    };
    let app = app_with_store(Arc::new(MemoryStore::new()), config);

    let body = json!({ "contentType": "text", "content": "anything at all" }).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/verify-news")
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Body::from(body))
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"], "Failed to verify content");
    assert_eq!(json["code"], "CONTENT_TOO_LARGE");
}

#[tokio::test]
async fn test_body_without_length_over_limit_uses_error_shape() {
    let config = Config {
        body_limit_mb: 0,
        ..Config::default()
    };
    let app = app_with_store(Arc::new(MemoryStore::new()), config);

    let body = json!({ "contentType": "text", "content": "anything at all" });
    let (status, json) = send(app, verify_request("/verify-news", &body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"], "Failed to verify content");
    assert_eq!(json["code"], "CONTENT_TOO_LARGE");
}

#[tokio::test]
async fn test_verify_degrades_when_store_is_down() {
    let body = json!({ "contentType": "text", "content": "must see!!" });
    let (status, json) = send(
        broken_app(LookupFailurePolicy::DegradeToMiss),
        verify_request("/verify-news", &body),
    )
    .await;

    // Lookup degrades to the heuristic; the failed log append leaves id null
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "fake");
    assert!(json["id"].is_null());
}

#[tokio::test]
async fn test_verify_fail_policy_hides_store_error() {
    let body = json!({ "contentType": "text", "content": "must see!!" });
    let (status, json) = send(
        broken_app(LookupFailurePolicy::FailRequest),
        verify_request("/verify-news", &body),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Failed to verify content");
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json.to_string().contains("connection refused"));
}

#[tokio::test]
async fn test_repeated_submission_is_deterministic() {
    let store: Arc<dyn VerificationStore> = Arc::new(MemoryStore::new());
    let body = json!({
        "contentType": "text",
        "content": "Sources say the report is unverified and it is rumored to be fake"
    });

    let (_, first) = send(
        app_with_store(store.clone(), Config::default()),
        verify_request("/verify-news", &body),
    )
    .await;
    let (_, second) = send(
        app_with_store(store, Config::default()),
        verify_request("/verify-news", &body),
    )
    .await;

    assert_eq!(first["result"], second["result"]);
    assert_eq!(first["classification"], second["classification"]);
    assert_eq!(first["confidence"], second["confidence"]);
    assert_ne!(first["id"], second["id"]);
}

// ============================================================================
// Documentation & CORS Tests
// ============================================================================

#[tokio::test]
async fn test_openapi_document_is_served() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(create_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/verify-news"]["post"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_in_dev() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/verify-news")
        .header("Origin", "https://client.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = create_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_allows_browser_client_headers() {
    let config = Config {
        allowed_origins: Some(vec!["https://client.example".to_string()]),
        ..Config::default()
    };
    let app = app_with_store(Arc::new(MemoryStore::new()), config);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/verify-news")
        .header("Origin", "https://client.example")
        .header("Access-Control-Request-Method", "POST")
        .header(
            "Access-Control-Request-Headers",
            "authorization,x-client-info,apikey,content-type",
        )
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://client.example"
    );
    let allowed = response.headers()["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("x-client-info"));
    assert!(allowed.contains("apikey"));
}
