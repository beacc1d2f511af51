//! Assistant query DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the read endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AssistantQuery {
    /// `listAssistants` or `getPrompt`
    pub action: Option<String>,
    /// Assistant display name (required for `getPrompt`)
    pub assistant: Option<String>,
}

/// Supported read actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    ListAssistants,
    GetPrompt,
}

impl std::str::FromStr for QueryAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "listAssistants" => Ok(QueryAction::ListAssistants),
            "getPrompt" => Ok(QueryAction::GetPrompt),
            _ => Err(()),
        }
    }
}

/// `listAssistants` response
#[derive(Debug, Serialize, ToSchema)]
pub struct AssistantListResponse {
    pub success: bool,
    /// Names in registry order
    pub assistants: Vec<String>,
}

impl AssistantListResponse {
    pub fn new(assistants: Vec<String>) -> Self {
        Self {
            success: true,
            assistants,
        }
    }
}

/// `getPrompt` response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub success: bool,
    pub assistant: String,
    /// Prompt text, verbatim
    pub prompt: String,
}

impl PromptResponse {
    pub fn new(assistant: String, prompt: String) -> Self {
        Self {
            success: true,
            assistant,
            prompt,
        }
    }
}
