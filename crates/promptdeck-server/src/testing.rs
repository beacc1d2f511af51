//! In-memory port implementations for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use promptdeck::{
    AssistantEntry, AssistantRegistry, ContentStore, DomainError, MailSender, NotificationEmail,
};

use crate::application::{FeedbackService, PromptService};
use crate::AppState;

pub const OPERATOR_EMAIL: &str = "ops@example.com";

pub fn sample_registry() -> AssistantRegistry {
    AssistantRegistry::new(vec![
        AssistantEntry::new("Item Writer", "item_writer"),
        AssistantEntry::new("Rubric Builder", "rubric_builder"),
        AssistantEntry::new("Alignment Checker", "alignment_checker"),
    ])
    .unwrap()
}

/// ContentStore holding prompts in a map
#[derive(Default)]
pub struct StaticContentStore {
    contents: Mutex<HashMap<String, String>>,
}

impl StaticContentStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (id, content) in pairs {
            store.insert(id, content);
        }
        store
    }

    pub fn insert(&self, template_id: &str, content: &str) {
        self.contents
            .lock()
            .unwrap()
            .insert(template_id.to_string(), content.to_string());
    }
}

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn get_content(&self, template_id: &str) -> Result<String, DomainError> {
        self.contents
            .lock()
            .unwrap()
            .get(template_id)
            .cloned()
            .ok_or_else(|| DomainError::content_unavailable(template_id, "not in test store"))
    }
}

/// MailSender that records every email, or fails every send
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<NotificationEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<NotificationEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::DispatchFailure("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// AppState wired to in-memory ports
pub fn test_state(store: StaticContentStore, mailer: Arc<RecordingMailer>) -> AppState {
    let store: Arc<dyn ContentStore> = Arc::new(store);
    let mailer: Arc<dyn MailSender> = mailer;

    AppState {
        prompt_service: Arc::new(PromptService::new(Arc::new(sample_registry()), store)),
        feedback_service: Arc::new(FeedbackService::new(mailer, OPERATOR_EMAIL)),
    }
}
