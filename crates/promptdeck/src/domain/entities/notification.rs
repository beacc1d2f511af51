//! NotificationEmail - Operator email rendered from a submission

use askama::Template;

use crate::domain::entities::Feedback;
use crate::domain::errors::DomainError;

pub const BANNER: &str = "A visitor just sent something through the assistant library.";
pub const NO_FEEDBACK_PLACEHOLDER: &str = "No detailed feedback provided.";
pub const NO_ASSISTANT_PLACEHOLDER: &str = "N/A";

/// Outbound operator notification, built for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Template)]
#[template(path = "notification.html")]
struct NotificationTemplate<'a> {
    banner: &'a str,
    rating: Option<RatingBlock<'a>>,
    signup_email: Option<&'a str>,
    submission_id: String,
    received_at: String,
}

struct RatingBlock<'a> {
    assistant: &'a str,
    stars: String,
    value: u8,
    feedback: &'a str,
}

impl NotificationEmail {
    /// Render the notification for `feedback`, addressed to `to`.
    ///
    /// User-supplied text is HTML-escaped by the template.
    pub fn for_feedback(feedback: &Feedback, to: impl Into<String>) -> Result<Self, DomainError> {
        let template = NotificationTemplate {
            banner: BANNER,
            rating: feedback.rating.map(|rating| RatingBlock {
                assistant: feedback
                    .assistant_name
                    .as_deref()
                    .unwrap_or(NO_ASSISTANT_PLACEHOLDER),
                stars: rating.stars(),
                value: rating.value(),
                feedback: feedback
                    .feedback_text
                    .as_deref()
                    .unwrap_or(NO_FEEDBACK_PLACEHOLDER),
            }),
            signup_email: feedback.email.as_deref(),
            submission_id: feedback.id.to_string(),
            received_at: feedback.received_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        let html_body = template
            .render()
            .map_err(|e| DomainError::Rendering(e.to_string()))?;

        Ok(Self {
            to: to.into(),
            subject: subject_for(feedback),
            html_body,
        })
    }
}

/// Subject line for a submission
pub fn subject_for(feedback: &Feedback) -> String {
    match (&feedback.email, feedback.rating) {
        (Some(_), Some(rating)) => format!("New Signup & Feedback: {}★", rating),
        (Some(_), None) => "New Signup & Feedback: Email Only".to_string(),
        (None, Some(rating)) => format!("New Feedback: {}★", rating),
        (None, None) => "New Feedback: No Rating".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FeedbackSubmission;
    use serde_json::json;

    const OPERATOR: &str = "ops@example.com";

    fn feedback(value: serde_json::Value) -> Feedback {
        serde_json::from_value::<FeedbackSubmission>(value)
            .unwrap()
            .validate()
            .unwrap()
    }

    #[test]
    fn test_rating_without_email() {
        let fb = feedback(json!({
            "rating": 4,
            "feedbackText": "Great",
            "assistantName": "Item Writer"
        }));
        let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();

        assert_eq!(email.to, OPERATOR);
        assert_eq!(email.subject, "New Feedback: 4★");
        assert!(email.html_body.starts_with("<div"));
        assert!(email.html_body.contains(BANNER));
        assert!(email.html_body.contains("Item Writer"));
        assert!(email.html_body.contains("★★★★☆"));
        assert!(email.html_body.contains("Great"));
        assert!(!email.html_body.contains("New Signup"));
    }

    #[test]
    fn test_email_only() {
        let fb = feedback(json!({ "email": "a@b.com" }));
        let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();

        assert_eq!(email.subject, "New Signup & Feedback: Email Only");
        assert!(email.html_body.contains("New Signup"));
        assert!(email.html_body.contains("a@b.com"));
        assert!(!email.html_body.contains('★'));
        assert!(!email.html_body.contains("Assistant used"));
    }

    #[test]
    fn test_rating_and_email() {
        let fb = feedback(json!({ "rating": 2, "email": "a@b.com" }));
        let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();

        assert_eq!(email.subject, "New Signup & Feedback: 2★");
        assert!(email.html_body.contains("★★☆☆☆"));
        assert!(email.html_body.contains(NO_ASSISTANT_PLACEHOLDER));
        assert!(email.html_body.contains(NO_FEEDBACK_PLACEHOLDER));
        assert!(email.html_body.contains("a@b.com"));
    }

    #[test]
    fn test_star_counts_for_every_rating() {
        for r in 1..=5usize {
            let fb = feedback(json!({ "rating": r }));
            let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();
            assert_eq!(email.html_body.matches('★').count(), r);
            assert_eq!(email.html_body.matches('☆').count(), 5 - r);
        }
    }

    #[test]
    fn test_empty_submission_still_renders() {
        let fb = feedback(json!({}));
        let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();

        assert_eq!(email.subject, "New Feedback: No Rating");
        assert!(email.html_body.contains(BANNER));
        assert!(!email.html_body.contains("Assistant used"));
        assert!(!email.html_body.contains("New Signup"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let fb = feedback(json!({
            "rating": 5,
            "feedbackText": "<script>alert(1)</script>",
            "assistantName": "A & B"
        }));
        let email = NotificationEmail::for_feedback(&fb, OPERATOR).unwrap();

        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
        assert!(email.html_body.contains("A &amp; B"));
    }
}
