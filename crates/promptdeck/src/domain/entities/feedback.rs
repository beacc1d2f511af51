//! Feedback - A single feedback and/or signup submission
//!
//! Submissions are transient: validated, turned into one notification
//! email, and discarded.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Rating;

/// Submission fields as they arrive over the wire.
///
/// `rating` is kept as raw JSON so that type and range problems both
/// surface as `InvalidRating`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub rating: Value,
    pub feedback_text: Option<String>,
    pub assistant_name: Option<String>,
    pub email: Option<String>,
}

impl FeedbackSubmission {
    /// Validate the raw submission.
    ///
    /// Blank strings are treated as missing.
    pub fn validate(self) -> Result<Feedback, DomainError> {
        let rating = Rating::from_json(&self.rating)?;

        Ok(Feedback {
            id: Uuid::new_v4(),
            rating,
            feedback_text: non_blank(self.feedback_text),
            assistant_name: non_blank(self.assistant_name),
            email: non_blank(self.email).map(|e| e.trim().to_string()),
            received_at: Utc::now(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A validated submission
#[derive(Debug, Clone)]
pub struct Feedback {
    /// Correlation id for logs; never persisted
    pub id: Uuid,
    pub rating: Option<Rating>,
    pub feedback_text: Option<String>,
    pub assistant_name: Option<String>,
    pub email: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl Feedback {
    /// Neither a rating nor a signup address was supplied
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.email.is_none()
    }
}
