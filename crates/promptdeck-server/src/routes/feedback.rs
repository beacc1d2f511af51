//! Feedback Routes - Write endpoint
//!
//! `POST /` with a JSON body. The body is read as raw bytes so that
//! `text/plain` posts from browser frontends are accepted too.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;

use promptdeck::{DomainError, FeedbackSubmission};

use crate::error::ApiError;
use crate::models::{SubmissionRequest, SubmissionResponse, SUBMIT_FEEDBACK_ACTION};
use crate::AppState;

/// Submit feedback and/or a signup address
#[utoipa::path(
    post,
    path = "/",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "SubmissionResponse when relayed, ErrorResponse on failure", body = SubmissionResponse)
    ),
    tag = "Feedback"
)]
pub async fn handle_submission(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    // Oversized or unreadable bodies still get the JSON envelope
    let body = body.map_err(|e| ApiError::from(DomainError::MalformedRequest(e.body_text())))?;
    let submission = parse_submission(&body)?;

    let id = state.feedback_service.submit(submission).await?;
    tracing::debug!("Submission {} complete", id);

    Ok(Json(SubmissionResponse::ok()))
}

fn parse_submission(body: &[u8]) -> Result<FeedbackSubmission, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::from(DomainError::MalformedRequest(e.to_string())))?;

    if value.get("action").and_then(Value::as_str) != Some(SUBMIT_FEEDBACK_ACTION) {
        return Err(ApiError::InvalidPostAction);
    }

    let request: SubmissionRequest = serde_json::from_value(value)
        .map_err(|e| ApiError::from(DomainError::MalformedRequest(e.to_string())))?;

    Ok(request.into())
}
