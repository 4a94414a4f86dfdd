use crate::models::prompt::{Prompt, PromptCollection};
use crate::storage::PromptStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Reads a `{ "prompts": [...] }` JSON document from disk.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    path: PathBuf,
}

impl FileSystemStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PromptStorage for FileSystemStorage {
    async fn load_prompts(&self) -> Result<Vec<Prompt>> {
        let contents = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read prompt file '{}'", self.path.display()))?;
        let collection: PromptCollection = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to deserialize prompts from file '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), count = collection.prompts.len(), "Read prompt file");
        Ok(collection.prompts)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
