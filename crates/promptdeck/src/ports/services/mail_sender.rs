//! Mail Sender Port
//!
//! Abstract interface for dispatching operator notification emails.

use async_trait::async_trait;

use crate::domain::entities::NotificationEmail;
use crate::domain::errors::DomainError;

/// Outbound email delivery
///
/// A single attempt per call. Failures surface as
/// `DomainError::DispatchFailure` and are never retried.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send one email to `email.to`
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError>;
}
