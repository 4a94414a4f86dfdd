//! Browse a static collection of prompts: filter by heading, open one in a
//! detail overlay, and copy content to the clipboard with transient
//! "copied" feedback.

pub mod browser;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod models;
pub mod render;
pub mod selection;
pub mod session;
pub mod storage;
pub mod text;
pub mod view;

pub use browser::{CopyOutcome, PromptBrowser};
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use dataset::Dataset;
pub use error::{ClipboardError, DatasetError};
pub use feedback::{CopyFeedback, FeedbackKey, FeedbackState};
pub use models::prompt::{Prompt, PromptCollection};
pub use storage::PromptStorage;
