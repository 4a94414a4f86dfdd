//! The prompt browser: search, detail overlay and copy feedback in one place.

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::dataset::Dataset;
use crate::feedback::{CopyFeedback, FeedbackKey};
use crate::filter::FilterState;
use crate::models::prompt::Prompt;
use crate::selection::Selection;
use crate::text::truncate;
use crate::view::{card_copy_label, detail_copy_label, BrowserView, CardView, DetailView, EmptyState};
use anyhow::Result;
use std::sync::Arc;
use tracing::warn;

/// Result of a copy intent. Clipboard failures are logged by
/// [`CopyFeedback`] and only show up here as [`CopyOutcome::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// Nothing to copy: unknown id, or no prompt open in the overlay.
    NoTarget,
}

pub struct PromptBrowser {
    dataset: Dataset,
    filter: FilterState,
    selection: Selection,
    feedback: CopyFeedback,
    clipboard: Arc<dyn Clipboard>,
    preview_chars: usize,
}

impl PromptBrowser {
    pub fn new(dataset: Dataset, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            filter: FilterState::new(dataset.clone()),
            dataset,
            selection: Selection::new(),
            feedback: CopyFeedback::new(),
            clipboard,
            preview_chars: crate::constants::DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Loads the configured dataset and builds a browser over it.
    pub async fn load(config: &Config, clipboard: Arc<dyn Clipboard>) -> Result<Self> {
        let storage = config.storage();
        let dataset = Dataset::load(storage.as_ref()).await?;
        Ok(Self::new(dataset, clipboard).with_preview_chars(config.preview_chars))
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn visible(&self) -> Vec<&Prompt> {
        self.filter.visible()
    }

    pub fn result_count(&self) -> usize {
        self.filter.count()
    }

    /// Resolves user input to a prompt.
    ///
    /// A number is first read as a 1-based position in the visible list;
    /// anything else, or a number past the end of the list, is looked up as
    /// an id.
    pub fn resolve(&self, target: &str) -> Option<&Prompt> {
        let target = target.trim();
        target
            .parse::<usize>()
            .ok()
            .and_then(|position| self.filter.nth_visible(position))
            .or_else(|| self.dataset.get(target))
    }

    /// Opens the prompt with `id` in the detail overlay.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(prompt) = self.dataset.get(id) else {
            warn!(id = %id, "Ignoring selection of unknown prompt");
            return false;
        };
        self.selection.select(prompt);
        true
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub fn selected(&self) -> Option<&Prompt> {
        self.selection.selected_id().and_then(|id| self.dataset.get(id))
    }

    /// Copies a prompt's content from its card.
    pub async fn copy_card(&self, id: &str) -> CopyOutcome {
        let Some(prompt) = self.dataset.get(id) else {
            warn!(id = %id, "Ignoring copy of unknown prompt");
            return CopyOutcome::NoTarget;
        };
        self.copy(prompt, FeedbackKey::card(prompt.id.as_str())).await
    }

    /// Copies the content of the prompt open in the detail overlay.
    pub async fn copy_detail(&self) -> CopyOutcome {
        let Some(prompt) = self.selected() else {
            return CopyOutcome::NoTarget;
        };
        self.copy(prompt, FeedbackKey::detail(prompt.id.as_str())).await
    }

    async fn copy(&self, prompt: &Prompt, key: FeedbackKey) -> CopyOutcome {
        match self
            .feedback
            .trigger_copy(self.clipboard.as_ref(), &prompt.content, key)
            .await
        {
            Ok(()) => CopyOutcome::Copied,
            // Already logged; the missing "copied" flag is the only signal.
            Err(_) => CopyOutcome::Failed,
        }
    }

    pub fn view(&self) -> BrowserView {
        let cards: Vec<CardView> = self
            .filter
            .visible()
            .into_iter()
            .enumerate()
            .map(|(index, prompt)| {
                let copied = self.feedback.is_pending(&FeedbackKey::card(prompt.id.as_str()));
                CardView {
                    position: index + 1,
                    id: prompt.id.clone(),
                    heading: prompt.heading.clone(),
                    preview: truncate(&prompt.content, self.preview_chars),
                    copied,
                    copy_label: card_copy_label(copied),
                }
            })
            .collect();

        let detail = self.selected().map(|prompt| {
            let copied = self.feedback.is_pending(&FeedbackKey::detail(prompt.id.as_str()));
            DetailView {
                id: prompt.id.clone(),
                heading: prompt.heading.clone(),
                content: prompt.content.clone(),
                copied,
                copy_label: detail_copy_label(copied),
            }
        });

        BrowserView {
            query: self.filter.query().to_string(),
            count: cards.len(),
            summary: self.filter.summary(),
            empty: self.filter.is_empty_result().then(EmptyState::default),
            cards,
            detail,
        }
    }
}
