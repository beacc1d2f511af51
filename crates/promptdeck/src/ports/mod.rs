//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (content store, mail).
//!
//! Implementations of these traits live in the server crate.

pub mod services;

// Re-exports
pub use services::*;
