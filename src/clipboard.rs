//! Clipboard backends.

use crate::error::ClipboardError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// A place copied prompt text can be written to.
#[async_trait]
pub trait Clipboard: Send + Sync + 'static {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, via `arboard`.
///
/// The underlying handle is created on first use and kept alive afterwards;
/// on X11 and Wayland the copied text is only served while a handle exists.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    #[cfg(not(target_os = "android"))]
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
    wait_until_replaced: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard for short-lived processes.
    ///
    /// On Linux each write blocks until another application takes ownership
    /// of the clipboard, so the text outlives the process that copied it.
    /// Elsewhere the operating system keeps the text and writes return at once.
    pub fn until_replaced() -> Self {
        Self {
            wait_until_replaced: true,
            ..Self::default()
        }
    }

    pub fn waits_until_replaced(&self) -> bool {
        self.wait_until_replaced
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    #[cfg(not(target_os = "android"))]
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_owned();
        let wait = self.wait_until_replaced;
        // arboard blocks while talking to the display server.
        tokio::task::spawn_blocking(move || {
            let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_none() {
                let clipboard =
                    arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
                *guard = Some(clipboard);
            }
            let Some(clipboard) = guard.as_mut() else {
                return Err(ClipboardError::Unavailable("no clipboard handle".to_string()));
            };
            store_text(clipboard, text, wait).map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Task(e.to_string()))?
    }

    #[cfg(target_os = "android")]
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "system clipboard is not supported on this platform".to_string(),
        ))
    }
}

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
fn store_text(clipboard: &mut arboard::Clipboard, text: String, wait: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        tracing::info!("Serving clipboard contents until another application replaces them");
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(any(
    target_os = "android",
    all(unix, not(any(target_os = "macos", target_os = "emscripten")))
)))]
fn store_text(clipboard: &mut arboard::Clipboard, text: String, _wait: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// In-process clipboard that records every write.
///
/// Used for headless runs and tests; [`set_failing`](Self::set_failing) makes
/// subsequent writes fail the way a denied system clipboard would.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let clipboard = Self::default();
        clipboard.set_failing(true);
        clipboard
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn contents(&self) -> Option<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClipboardError::Write("write rejected".to_string()));
        }
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_clipboard_waits_until_replaced() {
        assert!(SystemClipboard::until_replaced().waits_until_replaced());
        assert!(!SystemClipboard::new().waits_until_replaced());
    }

    #[tokio::test]
    async fn memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();
        assert_eq!(clipboard.writes(), vec!["first", "second"]);
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn failing_memory_clipboard_keeps_contents() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("kept").await.unwrap();
        clipboard.set_failing(true);
        let err = clipboard.write_text("lost").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Write(_)));
        assert_eq!(clipboard.contents().as_deref(), Some("kept"));
    }
}
