//! Assistant Routes - Read endpoint
//!
//! `GET /?action=listAssistants` and `GET /?action=getPrompt&assistant=<name>`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::models::{AssistantListResponse, AssistantQuery, PromptResponse, QueryAction};
use crate::AppState;

/// List assistants or fetch an assistant's prompt
#[utoipa::path(
    get,
    path = "/",
    params(AssistantQuery),
    responses(
        (status = 200, description = "AssistantListResponse for listAssistants, PromptResponse for getPrompt, ErrorResponse on failure", body = AssistantListResponse)
    ),
    tag = "Assistants"
)]
pub async fn handle_query(
    State(state): State<AppState>,
    query: Result<Query<AssistantQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!("Rejected query string: {}", e);
        ApiError::InvalidQuery
    })?;

    let action = query
        .action
        .as_deref()
        .and_then(|a| a.parse::<QueryAction>().ok())
        .ok_or(ApiError::InvalidQuery)?;

    match action {
        QueryAction::ListAssistants => {
            let names = state.prompt_service.list_names();
            Ok(Json(AssistantListResponse::new(names)).into_response())
        }
        QueryAction::GetPrompt => {
            let name = query.assistant.ok_or(ApiError::InvalidQuery)?;
            let prompt = state
                .prompt_service
                .get_prompt(&name)
                .await
                .map_err(|e| ApiError::from_prompt_error(&name, e))?;

            tracing::info!("Served prompt for '{}'", name);
            Ok(Json(PromptResponse::new(name, prompt)).into_response())
        }
    }
}
