pub mod prompt;

pub use prompt::{Prompt, PromptCollection};
