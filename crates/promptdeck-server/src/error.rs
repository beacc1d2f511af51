//! API error envelope
//!
//! Every failure is answered with HTTP 200 and `{success: false, error}`.
//! Clients rely on the `success` flag alone.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use std::any::Any;
use thiserror::Error;

use promptdeck::DomainError;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Assistant '{0}' not found.")]
    AssistantNotFound(String),

    #[error("Could not load prompt for '{0}'. Check server logs.")]
    PromptUnavailable(String),

    #[error("Invalid action or missing parameters.")]
    InvalidQuery,

    #[error("Invalid POST action.")]
    InvalidPostAction,

    #[error("Invalid rating provided.")]
    InvalidRating,

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a prompt lookup failure for assistant `name`.
    ///
    /// Content failures are logged with their cause and reported generically.
    pub fn from_prompt_error(name: &str, err: DomainError) -> Self {
        match err {
            DomainError::AssistantNotFound(n) => Self::AssistantNotFound(n),
            e if e.is_content_failure() => {
                tracing::error!("Failed to load prompt for '{}': {}", name, e);
                Self::PromptUnavailable(name.to_string())
            }
            e => Self::from(e),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidRating => Self::InvalidRating,
            DomainError::AssistantNotFound(name) => Self::AssistantNotFound(name),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }
        (StatusCode::OK, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Convert a handler panic into the internal-error envelope
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(detail).into_response()
}
