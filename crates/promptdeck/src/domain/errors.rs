//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Assistant '{0}' not found.")]
    AssistantNotFound(String),

    #[error("No content available for template '{template_id}': {reason}")]
    ContentUnavailable { template_id: String, reason: String },

    #[error("Template '{0}' has no content")]
    EmptyContent(String),

    #[error("Invalid rating provided.")]
    InvalidRating,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Mail dispatch failed: {0}")]
    DispatchFailure(String),

    #[error("Failed to render notification: {0}")]
    Rendering(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn content_unavailable<T: AsRef<str>>(template_id: T, reason: impl ToString) -> Self {
        Self::ContentUnavailable {
            template_id: template_id.as_ref().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error came from prompt retrieval.
    ///
    /// These are reported to callers with a generic message; the detail
    /// stays in the server log.
    pub fn is_content_failure(&self) -> bool {
        matches!(self, Self::ContentUnavailable { .. } | Self::EmptyContent(_))
    }
}
