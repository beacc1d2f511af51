//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod content_store;
pub mod mail;

// Re-exports
pub use content_store::FsContentStore;
pub use mail::{HttpMailSender, LogMailSender};
