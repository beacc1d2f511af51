//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - AssistantEntry / AssistantRegistry: name → prompt template table
//! - FeedbackSubmission / Feedback: incoming feedback and signups
//! - NotificationEmail: rendered operator email

mod assistant;
mod feedback;
mod notification;

pub use assistant::*;
pub use feedback::*;
pub use notification::*;
