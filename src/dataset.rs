use crate::error::DatasetError;
use crate::models::prompt::Prompt;
use crate::storage::PromptStorage;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// The immutable, ordered prompt collection for one session.
///
/// Cloning is cheap; all clones share the same records.
#[derive(Debug, Clone)]
pub struct Dataset {
    prompts: Arc<[Prompt]>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate ids.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(prompts.len());
        for prompt in &prompts {
            if !seen.insert(prompt.id.as_str()) {
                return Err(DatasetError::DuplicateId(prompt.id.clone()));
            }
        }
        Ok(Self {
            prompts: prompts.into(),
        })
    }

    /// Reads every prompt from `storage` once and freezes the result.
    pub async fn load(storage: &dyn PromptStorage) -> Result<Self> {
        let source = storage.describe();
        let prompts = storage
            .load_prompts()
            .await
            .with_context(|| format!("Failed to load prompts from {}", source))?;
        let dataset = Self::new(prompts).with_context(|| format!("Invalid prompt dataset in {}", source))?;
        info!(source = %source, count = dataset.len(), "Loaded prompt dataset");
        Ok(dataset)
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|prompt| prompt.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prompt> {
        self.prompts.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Prompt;
    type IntoIter = std::slice::Iter<'a, Prompt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::EmbeddedStorage;

    #[test]
    fn rejects_duplicate_ids() {
        let err = Dataset::new(vec![
            Prompt::new("1", "A", "a"),
            Prompt::new("2", "B", "b"),
            Prompt::new("1", "C", "c"),
        ])
        .unwrap_err();
        assert_eq!(err, DatasetError::DuplicateId("1".to_string()));
    }

    #[test]
    fn lookup_by_id() {
        let dataset = Dataset::new(vec![Prompt::new("x", "Heading", "Body")]).unwrap();
        assert_eq!(dataset.get("x").map(|p| p.heading.as_str()), Some("Heading"));
        assert!(dataset.get("y").is_none());
    }

    #[test]
    fn clones_share_records() {
        let dataset = Dataset::new(vec![Prompt::new("x", "Heading", "Body")]).unwrap();
        let clone = dataset.clone();
        assert!(std::ptr::eq(dataset.prompts(), clone.prompts()));
    }

    #[tokio::test]
    async fn loads_from_storage() {
        let dataset = Dataset::load(&EmbeddedStorage::new()).await.unwrap();
        assert!(!dataset.is_empty());
    }
}
