//! Filesystem Content Store
//!
//! Serves prompt text from files bundled with the deployment:
//! `<root>/<template_id>.md`. Files are read on every request.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use promptdeck::{ContentStore, DomainError};

const PROMPT_EXTENSION: &str = "md";

/// ContentStore backed by a directory of prompt files
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a prompt file exists for `template_id`
    pub fn has_template(&self, template_id: &str) -> bool {
        self.path_for(template_id)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn path_for(&self, template_id: &str) -> Result<PathBuf, DomainError> {
        // Ids must stay inside the prompt directory
        let mut components = Path::new(template_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self
                .root
                .join(format!("{}.{}", template_id, PROMPT_EXTENSION))),
            _ => Err(DomainError::content_unavailable(
                template_id,
                "template id is not a plain file name",
            )),
        }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn get_content(&self, template_id: &str) -> Result<String, DomainError> {
        let path = self.path_for(template_id)?;

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::content_unavailable(template_id, format!("{}: {}", path.display(), e))
        })
    }
}
