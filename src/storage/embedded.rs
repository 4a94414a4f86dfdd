use crate::models::prompt::{Prompt, PromptCollection};
use crate::storage::PromptStorage;
use anyhow::{Context, Result};
use async_trait::async_trait;

const BUNDLED_PROMPTS: &str = include_str!("../../data/prompts.json");

/// Serves the prompt collection compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStorage;

impl EmbeddedStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptStorage for EmbeddedStorage {
    async fn load_prompts(&self) -> Result<Vec<Prompt>> {
        let collection: PromptCollection =
            serde_json::from_str(BUNDLED_PROMPTS).context("Failed to deserialize bundled prompts")?;
        Ok(collection.prompts)
    }

    fn describe(&self) -> String {
        "bundled prompts".to_string()
    }
}
