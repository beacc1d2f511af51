//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the registry, content store, and mail sender.

mod feedback_service;
mod prompt_service;

pub use feedback_service::FeedbackService;
pub use prompt_service::PromptService;
