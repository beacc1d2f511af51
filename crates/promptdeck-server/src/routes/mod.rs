//! Promptdeck API Routes
//!
//! - GET  / - Assistant list and prompt lookup (`action` query parameter)
//! - POST / - Feedback and signup submissions (JSON body)

pub mod assistant;
pub mod feedback;
pub mod swagger;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(assistant::handle_query).post(feedback::handle_submission),
    )
}
