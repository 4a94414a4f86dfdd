use serde::{Deserialize, Serialize};

/// A reusable prompt: a short heading plus the full text body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prompt {
    /// Opaque identifier, unique within a dataset.
    pub id: String,
    /// Display title and the only field searched by the filter.
    pub heading: String,
    pub content: String,
}

impl Prompt {
    pub fn new(id: impl Into<String>, heading: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            content: content.into(),
        }
    }
}

/// On-disk document shape: `{ "prompts": [ ... ] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptCollection {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}
