//! Transient "copied" feedback after a successful clipboard write.
//!
//! Every successful copy flags a [`FeedbackKey`] as pending and schedules an
//! expiry task. Each pending key owns exactly one expiry task: copying again
//! while the flag is showing aborts the old task and starts a fresh window, so
//! the flag is cleared [`COPY_FEEDBACK_DELAY`] after the *last* copy.

use crate::clipboard::Clipboard;
use crate::constants::{COPY_FEEDBACK_DELAY, DETAIL_KEY_PREFIX};
use crate::error::ClipboardError;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, instrument};

/// Identifies which copy button shows feedback.
///
/// The card and the detail overlay of the same prompt are separate surfaces
/// and flag independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FeedbackKey {
    Card(String),
    Detail(String),
}

impl FeedbackKey {
    pub fn card(id: impl Into<String>) -> Self {
        Self::Card(id.into())
    }

    pub fn detail(id: impl Into<String>) -> Self {
        Self::Detail(id.into())
    }
}

impl fmt::Display for FeedbackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card(id) => write!(f, "{}", id),
            Self::Detail(id) => write!(f, "{}{}", DETAIL_KEY_PREFIX, id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackState {
    Idle,
    Pending,
}

#[derive(Debug)]
struct PendingEntry {
    generation: u64,
    timer: JoinHandle<()>,
}

#[derive(Debug, Default)]
struct Registry {
    pending: HashMap<FeedbackKey, PendingEntry>,
    next_generation: u64,
}

#[derive(Debug)]
struct Shared {
    registry: Mutex<Registry>,
    delay: Duration,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn bump(&self) {
        self.revision.send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    fn expire(&self, key: &FeedbackKey, generation: u64) {
        let removed = {
            let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
            let current = registry.pending.get(key).map(|entry| entry.generation);
            // A different generation means the key was re-triggered after this timer was scheduled.
            current == Some(generation) && registry.pending.remove(key).is_some()
        };
        if removed {
            debug!(key = %key, "Copy feedback expired");
            self.bump();
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let registry = self.registry.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, entry) in registry.pending.drain() {
            entry.timer.abort();
        }
    }
}

/// Per-key copy feedback with cancel-and-restart expiry timers.
///
/// Clones share state. Timers run on the ambient Tokio runtime; dropping the
/// last clone aborts any that are still outstanding.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    shared: Arc<Shared>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::with_delay(COPY_FEEDBACK_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                registry: Mutex::new(Registry::default()),
                delay,
                revision,
            }),
        }
    }

    /// Writes `content` to `clipboard` and, on success, flags `key`.
    ///
    /// A failed write is logged and returned; feedback state is untouched.
    #[instrument(skip_all, fields(key = %key))]
    pub async fn trigger_copy(
        &self,
        clipboard: &dyn Clipboard,
        content: &str,
        key: FeedbackKey,
    ) -> Result<(), ClipboardError> {
        match clipboard.write_text(content).await {
            Ok(()) => {
                self.mark_copied(key);
                Ok(())
            }
            Err(err) => {
                error!(key = %key, error = %err, "Failed to copy to clipboard");
                Err(err)
            }
        }
    }

    /// Flags `key` as pending and (re)starts its expiry timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mark_copied(&self, key: FeedbackKey) {
        let deadline = Instant::now() + self.shared.delay;
        {
            let mut registry = self.shared.registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.next_generation += 1;
            let generation = registry.next_generation;

            if let Some(previous) = registry.pending.remove(&key) {
                previous.timer.abort();
                debug!(key = %key, "Copy feedback restarted");
            } else {
                debug!(key = %key, "Copy feedback shown");
            }

            let weak: Weak<Shared> = Arc::downgrade(&self.shared);
            let timer_key = key.clone();
            let timer = tokio::spawn(async move {
                sleep_until(deadline).await;
                if let Some(shared) = weak.upgrade() {
                    shared.expire(&timer_key, generation);
                }
            });
            registry.pending.insert(key, PendingEntry { generation, timer });
        }
        self.shared.bump();
    }

    pub fn state(&self, key: &FeedbackKey) -> FeedbackState {
        if self.is_pending(key) {
            FeedbackState::Pending
        } else {
            FeedbackState::Idle
        }
    }

    pub fn is_pending(&self, key: &FeedbackKey) -> bool {
        self.shared
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .contains_key(key)
    }

    /// Currently flagged keys, sorted.
    pub fn pending_keys(&self) -> Vec<FeedbackKey> {
        let mut keys: Vec<FeedbackKey> = self
            .shared
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    pub fn pending_count(&self) -> usize {
        self.shared
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .len()
    }

    /// Revision counter bumped whenever a flag is set, restarted or cleared.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use tokio::time::sleep;

    const WINDOW: Duration = COPY_FEEDBACK_DELAY;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn key_display_matches_surface() {
        assert_eq!(FeedbackKey::card("7").to_string(), "7");
        assert_eq!(FeedbackKey::detail("7").to_string(), "modal-7");
        assert_ne!(FeedbackKey::card("7"), FeedbackKey::detail("7"));
    }

    #[tokio::test(start_paused = true)]
    async fn flag_clears_after_delay() {
        let clipboard = MemoryClipboard::new();
        let feedback = CopyFeedback::new();
        let key = FeedbackKey::card("1");

        feedback.trigger_copy(&clipboard, "body", key.clone()).await.unwrap();
        assert_eq!(feedback.state(&key), FeedbackState::Pending);
        assert_eq!(clipboard.contents().as_deref(), Some("body"));

        sleep(WINDOW - ms(1)).await;
        assert!(feedback.is_pending(&key));

        sleep(ms(2)).await;
        assert_eq!(feedback.state(&key), FeedbackState::Idle);
        assert_eq!(feedback.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn retrigger_restarts_window() {
        let clipboard = MemoryClipboard::new();
        let feedback = CopyFeedback::new();
        let key = FeedbackKey::card("1");

        feedback.trigger_copy(&clipboard, "body", key.clone()).await.unwrap();
        sleep(ms(1_500)).await;
        feedback.trigger_copy(&clipboard, "body", key.clone()).await.unwrap();

        // Past the first window: the stale timer must not clear the flag.
        sleep(ms(1_000)).await;
        assert!(feedback.is_pending(&key));
        assert_eq!(feedback.pending_count(), 1);

        sleep(ms(999)).await;
        assert!(feedback.is_pending(&key));

        sleep(ms(2)).await;
        assert!(!feedback.is_pending(&key));
    }

    #[tokio::test(start_paused = true)]
    async fn card_and_detail_keys_are_independent() {
        let clipboard = MemoryClipboard::new();
        let feedback = CopyFeedback::new();
        let card = FeedbackKey::card("1");
        let detail = FeedbackKey::detail("1");

        feedback.trigger_copy(&clipboard, "body", card.clone()).await.unwrap();
        assert!(feedback.is_pending(&card));
        assert!(!feedback.is_pending(&detail));

        sleep(ms(1_000)).await;
        feedback.trigger_copy(&clipboard, "body", detail.clone()).await.unwrap();
        assert_eq!(feedback.pending_keys(), vec![card.clone(), detail.clone()]);

        sleep(ms(1_001)).await;
        assert!(!feedback.is_pending(&card));
        assert!(feedback.is_pending(&detail));

        sleep(ms(1_000)).await;
        assert!(!feedback.is_pending(&detail));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_leaves_state_untouched() {
        let clipboard = MemoryClipboard::failing();
        let feedback = CopyFeedback::new();
        let key = FeedbackKey::card("1");
        let revision = feedback.subscribe();

        let err = feedback
            .trigger_copy(&clipboard, "body", key.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, ClipboardError::Write(_)));
        assert_eq!(feedback.state(&key), FeedbackState::Idle);
        assert!(!revision.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_retrigger_keeps_running_window() {
        let clipboard = MemoryClipboard::new();
        let feedback = CopyFeedback::new();
        let key = FeedbackKey::card("1");

        feedback.trigger_copy(&clipboard, "body", key.clone()).await.unwrap();
        sleep(ms(1_500)).await;
        clipboard.set_failing(true);
        assert!(feedback.trigger_copy(&clipboard, "body", key.clone()).await.is_err());

        sleep(ms(501)).await;
        assert!(!feedback.is_pending(&key));
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_expiry() {
        let clipboard = MemoryClipboard::new();
        let feedback = CopyFeedback::new();
        let mut revision = feedback.subscribe();
        let start = Instant::now();

        feedback
            .trigger_copy(&clipboard, "body", FeedbackKey::card("1"))
            .await
            .unwrap();
        assert!(revision.has_changed().unwrap());
        revision.borrow_and_update();

        revision.changed().await.unwrap();
        assert!(start.elapsed() >= WINDOW);
        assert_eq!(feedback.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay_is_honoured() {
        let feedback = CopyFeedback::with_delay(ms(100));
        let key = FeedbackKey::detail("x");
        feedback.mark_copied(key.clone());
        sleep(ms(99)).await;
        assert!(feedback.is_pending(&key));
        sleep(ms(2)).await;
        assert!(!feedback.is_pending(&key));
    }
}
