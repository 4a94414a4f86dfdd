//! Which prompt, if any, is open in the detail overlay.

use crate::models::prompt::Prompt;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `prompt` in the overlay, replacing any other open prompt.
    pub fn select(&mut self, prompt: &Prompt) {
        if self.selected.as_deref() == Some(prompt.id.as_str()) {
            return;
        }
        debug!(id = %prompt.id, "Opened prompt details");
        self.selected = Some(prompt.id.clone());
    }

    pub fn clear(&mut self) {
        if let Some(id) = self.selected.take() {
            debug!(id = %id, "Closed prompt details");
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
