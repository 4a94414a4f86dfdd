use crate::models::prompt::Prompt;
use anyhow::Result;
use async_trait::async_trait;

pub mod embedded;
pub mod filesystem;

pub use embedded::EmbeddedStorage;
pub use filesystem::FileSystemStorage;

/// Trait defining the interface for prompt sources.
///
/// A source is read once at startup; the records it yields become the
/// immutable [`Dataset`](crate::dataset::Dataset) for the session.
#[async_trait]
pub trait PromptStorage: Send + Sync + 'static {
    /// Loads every prompt, in source order.
    async fn load_prompts(&self) -> Result<Vec<Prompt>>;

    /// Short human-readable description of where the prompts come from.
    fn describe(&self) -> String;
}
