//! Service Ports
//!
//! Abstract interfaces for external services.

mod content_store;
mod mail_sender;

pub use content_store::*;
pub use mail_sender::*;
