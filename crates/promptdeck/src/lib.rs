//! Promptdeck Domain Library
//!
//! Core domain types and interfaces for the Promptdeck assistant catalog:
//! a fixed table of named prompt templates plus a feedback/signup relay
//! that turns each submission into one operator email.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Assistant registry, feedback submissions, notification emails
//!   - `value_objects/`: Immutable value types (Rating)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Content store and mail sender interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use promptdeck::{AssistantRegistry, FeedbackSubmission, NotificationEmail};
//! use promptdeck::ports::{ContentStore, MailSender};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AssistantEntry, AssistantRegistry, DomainError, Feedback, FeedbackSubmission,
    NotificationEmail, Rating,
};
pub use ports::{ContentStore, MailSender};
