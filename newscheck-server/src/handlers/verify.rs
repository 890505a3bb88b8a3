//! Content verification handler
//!
//! Handles POST /verify-news (and its /verify alias).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use newscheck_core::{ContentSubmission, VerdictResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::validate_content_size;

/// Verification request body
///
/// Both fields are optional at the JSON level so that a missing field is
/// reported as a malformed submission rather than a deserializer error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// One of `text`, `image`, `video`
    #[schema(example = "text")]
    pub content_type: Option<String>,
    /// Free text, or a `data:` URL for image/video
    #[schema(example = "BREAKING!! You won't believe what happened next")]
    pub content: Option<String>,
}

/// Verify a piece of content
///
/// Fingerprints the content, checks it against the curated verified-article
/// store and falls back to the lexical heuristic when there is no match.
/// Every request is logged; `id` is null when logging failed.
#[utoipa::path(
    post,
    path = "/verify-news",
    tag = "Verification",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification completed", body = VerdictResponse),
        (status = 400, description = "Malformed submission (missing or invalid contentType/content)"),
        (status = 413, description = "Content exceeds the configured size limit"),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Verified-article store unavailable")
    )
)]
pub async fn verify_handler(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerdictResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::BodyTooLarge {
            max: state.body_limit,
        },
        _ => ApiError::bad_request(format!("Invalid JSON body: {}", e)),
    })?;

    let submission =
        ContentSubmission::from_parts(request.content_type.as_deref(), request.content)?;
    validate_content_size(submission.content.len(), state.max_content_size)?;

    // Run on its own task so a panic in the engine surfaces as a 500
    // instead of tearing down the connection.
    let engine = state.engine.clone();
    let verified = tokio::spawn(async move { engine.verify(&submission).await })
        .await
        .map_err(|e| ApiError::internal(format!("Verification task failed: {}", e)))??;

    Ok(Json(VerdictResponse::from(verified)))
}
