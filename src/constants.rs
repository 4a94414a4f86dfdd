//! Shared constants for the prompt browser.

use std::time::Duration;

/// How long a "copied" flag stays visible after the last successful copy.
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(2_000);

/// Default preview length for prompt cards, in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 120;

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Prefix distinguishing detail-overlay feedback keys from card keys.
pub const DETAIL_KEY_PREFIX: &str = "modal-";
