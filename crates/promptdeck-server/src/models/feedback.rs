//! Submission DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use promptdeck::FeedbackSubmission;

pub const SUBMIT_FEEDBACK_ACTION: &str = "submitFeedback";

/// Body of the write endpoint
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    /// Must be `submitFeedback`
    pub action: String,
    /// Star rating, 1-5
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub rating: serde_json::Value,
    pub feedback_text: Option<String>,
    pub assistant_name: Option<String>,
    /// Signup address
    pub email: Option<String>,
}

impl From<SubmissionRequest> for FeedbackSubmission {
    fn from(request: SubmissionRequest) -> Self {
        FeedbackSubmission {
            rating: request.rating,
            feedback_text: request.feedback_text,
            assistant_name: request.assistant_name,
            email: request.email,
        }
    }
}

/// Successful submission response
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Submission successful.".to_string(),
        }
    }
}
