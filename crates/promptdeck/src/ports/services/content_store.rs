//! Content Store Port
//!
//! Abstract interface for retrieving prompt text by template id.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Source of prompt text, keyed by template id
///
/// # Example
///
/// ```rust,ignore
/// use promptdeck::ports::ContentStore;
///
/// struct BundledPrompts { /* directory of prompt files */ }
///
/// #[async_trait]
/// impl ContentStore for BundledPrompts {
///     async fn get_content(&self, template_id: &str) -> Result<String, DomainError> {
///         // Read the prompt file for `template_id`
///     }
/// }
/// ```
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the raw prompt text for a template id
    ///
    /// Fails with `DomainError::ContentUnavailable` when the store has no
    /// content for the id. Content is returned as stored; blank-content
    /// checks belong to the caller.
    async fn get_content(&self, template_id: &str) -> Result<String, DomainError>;
}
