//! Assistant - Named prompt templates served to clients
//!
//! The registry is fixed at deploy time and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::errors::DomainError;

/// A registered assistant: display name plus the handle of its prompt text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantEntry {
    /// Human-readable name, unique within the registry
    pub name: String,
    /// Opaque handle used to look up the prompt in the content store
    pub template_id: String,
}

impl AssistantEntry {
    pub fn new(name: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_id: template_id.into(),
        }
    }
}

/// Ordered, read-only name → template id table
#[derive(Debug, Clone, Default)]
pub struct AssistantRegistry {
    entries: Vec<AssistantEntry>,
    index: HashMap<String, usize>,
}

impl AssistantRegistry {
    /// Build a registry, keeping definition order.
    ///
    /// Names must be unique; names and template ids must be non-blank.
    pub fn new(entries: Vec<AssistantEntry>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(DomainError::Configuration(format!(
                    "assistant #{} has an empty name",
                    position + 1
                )));
            }
            if entry.template_id.trim().is_empty() {
                return Err(DomainError::Configuration(format!(
                    "assistant '{}' has an empty template id",
                    entry.name
                )));
            }
            if index.insert(entry.name.clone(), position).is_some() {
                return Err(DomainError::Configuration(format!(
                    "assistant '{}' is defined more than once",
                    entry.name
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Display names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Template id for a display name
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].template_id.as_str())
    }

    pub fn entries(&self) -> &[AssistantEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssistantRegistry {
        AssistantRegistry::new(vec![
            AssistantEntry::new("Item Writer", "item_writer"),
            AssistantEntry::new("Rubric Builder", "rubric_builder"),
            AssistantEntry::new("Alignment Checker", "alignment_checker"),
        ])
        .unwrap()
    }

    #[test]
    fn test_names_keep_definition_order() {
        let registry = sample();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Item Writer", "Rubric Builder", "Alignment Checker"]);

        // Re-iteration yields the same sequence
        let again: Vec<&str> = registry.names().collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_resolve() {
        let registry = sample();
        assert_eq!(registry.resolve("Rubric Builder"), Some("rubric_builder"));
        assert_eq!(registry.resolve("rubric builder"), None);
        assert_eq!(registry.resolve("Unknown"), None);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = AssistantRegistry::new(vec![
            AssistantEntry::new("Item Writer", "a"),
            AssistantEntry::new("Item Writer", "b"),
        ]);
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(AssistantRegistry::new(vec![AssistantEntry::new("  ", "a")]).is_err());
        assert!(AssistantRegistry::new(vec![AssistantEntry::new("Item Writer", "")]).is_err());
    }

    #[test]
    fn test_empty_registry() {
        let registry = AssistantRegistry::new(vec![]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.names().count(), 0);
    }
}
