//! Service configuration
//!
//! Secrets come from the Shuttle secret store (`Secrets.toml`); the
//! assistant table comes from a TOML file bundled with the deployment.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use promptdeck::{AssistantEntry, AssistantRegistry};

const DEFAULT_ASSISTANTS_FILE: &str = "assistants.toml";
const DEFAULT_PROMPTS_DIR: &str = "prompts";
const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com/emails";
const DEFAULT_FROM_ADDRESS: &str = "noreply@promptdeck.app";
const DEFAULT_FROM_NAME: &str = "Assistant Library";

/// Outbound mail settings
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// API key for the mail provider; `None` means log-only delivery
    pub api_key: Option<String>,
    pub api_url: String,
    pub from_address: String,
    pub from_name: String,
}

/// Deploy-time configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed destination for every notification email
    pub operator_email: String,
    pub mail: MailConfig,
    pub assistants_file: PathBuf,
    pub prompts_dir: PathBuf,
}

impl AppConfig {
    /// Build the configuration from a key lookup (normally the secret store)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let operator_email = match get("OPERATOR_EMAIL") {
            Some(email) => email.trim().to_string(),
            None => bail!("OPERATOR_EMAIL must be set"),
        };

        let mail = MailConfig {
            api_key: get("MAIL_API_KEY"),
            api_url: get("MAIL_API_URL").unwrap_or_else(|| DEFAULT_MAIL_API_URL.to_string()),
            from_address: get("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
            from_name: get("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
        };

        Ok(Self {
            operator_email,
            mail,
            assistants_file: get("ASSISTANTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSISTANTS_FILE)),
            prompts_dir: get("PROMPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_DIR)),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    assistants: Vec<AssistantEntry>,
}

/// Parse an assistant table (`[[assistants]]` entries, in order)
pub fn parse_registry(content: &str) -> Result<AssistantRegistry> {
    let file: RegistryFile = toml::from_str(content).context("Failed to parse assistant table")?;
    AssistantRegistry::new(file.assistants).context("Invalid assistant table")
}

/// Load the assistant table from disk
pub fn load_registry(path: &Path) -> Result<AssistantRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read assistant table from {:?}", path))?;
    parse_registry(&content)
}
