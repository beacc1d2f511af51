//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AssistantListResponse, ErrorResponse, PromptResponse, SubmissionRequest, SubmissionResponse,
};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::assistant::handle_query,
        super::feedback::handle_submission,
    ),
    info(
        title = "Promptdeck API",
        version = "0.1.0",
        description = "Assistant prompt catalog and feedback relay.\n\nEvery response is HTTP 200; check the `success` field.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Assistants", description = "Assistant list and prompt lookup"),
        (name = "Feedback", description = "Feedback and signup submissions"),
    ),
    components(
        schemas(
            HealthCheck,
            AssistantListResponse,
            PromptResponse,
            SubmissionRequest,
            SubmissionResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
