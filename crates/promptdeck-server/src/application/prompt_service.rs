//! Prompt Application Service (Use Case)
//!
//! Lists registered assistants and loads their prompt text.

use std::sync::Arc;

use promptdeck::{AssistantRegistry, ContentStore, DomainError};

/// Application service for assistant prompt lookups
pub struct PromptService<C: ContentStore + ?Sized> {
    registry: Arc<AssistantRegistry>,
    store: Arc<C>,
}

impl<C: ContentStore + ?Sized> PromptService<C> {
    pub fn new(registry: Arc<AssistantRegistry>, store: Arc<C>) -> Self {
        Self { registry, store }
    }

    /// Assistant names in registry order
    pub fn list_names(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }

    /// Load the prompt for an assistant by display name
    ///
    /// Content is fetched fresh on every call and returned verbatim. Text
    /// that is blank after trimming is an `EmptyContent` error.
    pub async fn get_prompt(&self, name: &str) -> Result<String, DomainError> {
        let template_id = self
            .registry
            .resolve(name)
            .ok_or_else(|| DomainError::AssistantNotFound(name.to_string()))?;

        let content = self.store.get_content(template_id).await?;

        if content.trim().is_empty() {
            return Err(DomainError::EmptyContent(template_id.to_string()));
        }

        tracing::debug!(
            "Loaded prompt for '{}' from template '{}' ({} bytes)",
            name,
            template_id,
            content.len()
        );

        Ok(content)
    }
}
