//! Mail Sender Implementations
//!
//! - `HttpMailSender`: delivers through a transactional-mail HTTP API using reqwest
//! - `LogMailSender`: writes the email to the log instead of sending it

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use promptdeck::{DomainError, MailSender, NotificationEmail};

use crate::config::MailConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Promptdeck-Mailer/1.0";
const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// Request body accepted by the mail API
#[derive(Debug, Serialize, PartialEq)]
struct SendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

/// HTTP implementation of MailSender
pub struct HttpMailSender {
    client: Client,
    api_key: String,
    api_url: String,
    from_address: String,
    from_name: String,
}

impl HttpMailSender {
    pub fn new(api_key: impl Into<String>, config: &MailConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_url: config.api_url.clone(),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
        })
    }

    fn request_body<'a>(&self, email: &'a NotificationEmail) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: format!("{} <{}>", self.from_name, self.from_address),
            to: vec![email.to.as_str()],
            subject: &email.subject,
            html: &email.html_body,
        }
    }
}

#[async_trait]
impl MailSender for HttpMailSender {
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(email))
            .send()
            .await
            .map_err(|e| DomainError::DispatchFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::warn!("Mail API rejected '{}' ({}): {}", email.subject, status, body);
            return Err(DomainError::DispatchFailure(format!(
                "mail API returned {}: {}",
                status,
                truncate_detail(&body)
            )));
        }

        tracing::debug!("Mail API accepted '{}' ({})", email.subject, status);
        Ok(())
    }
}

/// Shorten a provider error body before it reaches callers
fn truncate_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_DETAIL_CHARS {
        return trimmed.to_string();
    }
    let mut short: String = trimmed.chars().take(MAX_ERROR_DETAIL_CHARS).collect();
    short.push('…');
    short
}

/// MailSender that only logs; used when no mail API key is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Mail delivery disabled, notification logged only:\n{}",
            email.html_body
        );
        Ok(())
    }
}
