//! Runtime configuration.

use crate::constants::DEFAULT_PREVIEW_CHARS;
use crate::storage::{EmbeddedStorage, FileSystemStorage, PromptStorage};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON prompt file to load instead of the bundled prompts.
    pub data_path: Option<PathBuf>,
    /// Characters shown in card previews before truncation.
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// The prompt source this configuration points at.
    pub fn storage(&self) -> Arc<dyn PromptStorage> {
        match &self.data_path {
            Some(path) => Arc::new(FileSystemStorage::new(path)),
            None => Arc::new(EmbeddedStorage::new()),
        }
    }
}
