//! Domain error types.
use thiserror::Error;

/// Failure reported by a [`Clipboard`](crate::clipboard::Clipboard) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),

    #[error("Clipboard task failed: {0}")]
    Task(String),
}

/// Problems found while building a [`Dataset`](crate::dataset::Dataset).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Duplicate prompt id: {0}")]
    DuplicateId(String),
}
