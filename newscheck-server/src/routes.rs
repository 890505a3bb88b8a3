//! Router configuration module
//!
//! Configures all routes, middleware layers, and creates the application router.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::error::ApiError;
use crate::handlers::{health, ready, verify_handler};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the application router with default config and an empty
/// in-memory store (for testing)
pub fn create_router() -> Router {
    let config = Config::default();
    create_router_with_state(&config, AppState::in_memory(&config))
}

/// Create the application router with custom configuration and state
pub fn create_router_with_state(config: &Config, state: AppState) -> Router {
    // Configure CORS based on allowed_origins
    let cors = match &config.allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            tracing::info!("CORS: Restricting to {} origin(s)", origins.len());
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::AUTHORIZATION,
                    HeaderName::from_static("x-client-info"),
                    HeaderName::from_static("apikey"),
                ])
        }
        _ => {
            tracing::warn!("CORS: Allowing all origins (dev mode)");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    // Request body limit, for both the transport and the JSON extractor
    let max_body = config.body_limit();
    let body_limit = RequestBodyLimitLayer::new(max_body);
    let extractor_limit = DefaultBodyLimit::max(max_body);

    // Request timeout
    let timeout_secs = config.timeout_secs;
    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(timeout_secs),
    );

    let router = Router::new()
        .route("/verify-news", post(verify_handler))
        .route("/verify", post(verify_handler))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(extractor_limit)
        .layer(body_limit)
        .layer(timeout)
        .layer(middleware::map_response(move |response: Response| async move {
            rewrite_layer_rejection(response, max_body, timeout_secs)
        }))
        .layer(cors);

    // Conditionally apply rate limiting (disabled in tests, enabled in production)
    if !config.rate_limit_enabled {
        tracing::warn!("Rate limiting: DISABLED");
        return router.layer(TraceLayer::new_for_http());
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_per_sec)
        .burst_size(config.rate_limit_burst)
        .finish();

    match governor_conf {
        Some(governor_conf) => {
            tracing::info!(
                "Rate limiting: {} req/s (burst: {})",
                config.rate_limit_per_sec,
                config.rate_limit_burst
            );
            router
                .layer(GovernorLayer::new(Arc::new(governor_conf)))
                .layer(TraceLayer::new_for_http())
        }
        None => {
            tracing::warn!(
                per_sec = config.rate_limit_per_sec,
                burst = config.rate_limit_burst,
                "Rate limiting: invalid settings, limiter not installed"
            );
            router.layer(TraceLayer::new_for_http())
        }
    }
}

/// Give the bare 408 and 413 responses of the timeout and body-limit layers
/// the same JSON error body as handler failures. Handler errors are already
/// JSON and pass through.
fn rewrite_layer_rejection(response: Response, max_body: usize, timeout_secs: u64) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => {
            ApiError::timeout(format!("no response within {}s", timeout_secs)).into_response()
        }
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::BodyTooLarge { max: max_body }.into_response(),
        _ => response,
    }
}
