//! Feedback Application Service (Use Case)
//!
//! Validates a submission, renders the operator email, and sends it once.

use std::sync::Arc;
use uuid::Uuid;

use promptdeck::{DomainError, FeedbackSubmission, MailSender, NotificationEmail};

/// Application service for feedback and signup submissions
pub struct FeedbackService<M: MailSender + ?Sized> {
    mailer: Arc<M>,
    operator_email: String,
}

impl<M: MailSender + ?Sized> FeedbackService<M> {
    pub fn new(mailer: Arc<M>, operator_email: impl Into<String>) -> Self {
        Self {
            mailer,
            operator_email: operator_email.into(),
        }
    }

    /// Process one submission, returning its correlation id
    ///
    /// Nothing is sent unless validation and rendering succeed. A failed
    /// dispatch is returned to the caller and the submission is dropped.
    pub async fn submit(&self, submission: FeedbackSubmission) -> Result<Uuid, DomainError> {
        let feedback = submission.validate()?;

        if feedback.is_empty() {
            tracing::warn!(
                "Submission {} has neither a rating nor an email address",
                feedback.id
            );
        }

        let email = NotificationEmail::for_feedback(&feedback, &self.operator_email)?;

        if let Err(e) = self.mailer.send(&email).await {
            tracing::error!("Failed to send notification for {}: {}", feedback.id, e);
            return Err(e);
        }

        tracing::info!("Submission {} relayed: {}", feedback.id, email.subject);

        Ok(feedback.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingMailer, OPERATOR_EMAIL};
    use serde_json::json;

    fn submission(value: serde_json::Value) -> FeedbackSubmission {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_feedback_without_email() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = FeedbackService::new(mailer.clone(), OPERATOR_EMAIL);

        svc.submit(submission(json!({
            "rating": 4,
            "feedbackText": "Great",
            "assistantName": "Item Writer"
        })))
        .await
        .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, OPERATOR_EMAIL);
        assert_eq!(sent[0].subject, "New Feedback: 4★");
        assert!(sent[0].html_body.contains("Item Writer"));
        assert!(sent[0].html_body.contains("★★★★☆"));
        assert!(sent[0].html_body.contains("Great"));
        assert!(!sent[0].html_body.contains("New Signup"));
    }

    #[tokio::test]
    async fn test_signup_only() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = FeedbackService::new(mailer.clone(), OPERATOR_EMAIL);

        svc.submit(submission(json!({ "email": "a@b.com" }))).await.unwrap();

        let sent = mailer.sent();
        assert_eq!(sent[0].subject, "New Signup & Feedback: Email Only");
        assert!(sent[0].html_body.contains("a@b.com"));
    }

    #[tokio::test]
    async fn test_invalid_rating_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = FeedbackService::new(mailer.clone(), OPERATOR_EMAIL);

        for rating in [json!(0), json!(6), json!("abc")] {
            let err = svc
                .submit(submission(json!({ "rating": rating })))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::InvalidRating));
        }
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_failure_propagates() {
        let mailer = Arc::new(RecordingMailer::failing());
        let svc = FeedbackService::new(mailer.clone(), OPERATOR_EMAIL);

        let err = svc
            .submit(submission(json!({ "rating": 5 })))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DispatchFailure(_)));
    }

    #[tokio::test]
    async fn test_empty_submission_still_sends() {
        let mailer = Arc::new(RecordingMailer::default());
        let svc = FeedbackService::new(mailer.clone(), OPERATOR_EMAIL);

        svc.submit(submission(json!({}))).await.unwrap();
        assert_eq!(mailer.sent().len(), 1);
    }
}
