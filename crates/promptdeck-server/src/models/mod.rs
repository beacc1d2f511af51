//! Promptdeck API Models
//!
//! - Assistant queries: list assistants, fetch a prompt
//! - Submissions: feedback and signups
//! - Error envelope

mod assistant;
mod error;
mod feedback;

pub use assistant::*;
pub use error::*;
pub use feedback::*;
