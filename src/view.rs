//! Read-only view models handed to the presentation layer.

use serde::Serialize;

pub const CARD_COPY_LABEL: &str = "Copy";
pub const CARD_COPIED_LABEL: &str = "Copied!";
pub const DETAIL_COPY_LABEL: &str = "Copy Prompt";
pub const DETAIL_COPIED_LABEL: &str = "Prompt Copied!";
pub const EMPTY_TITLE: &str = "No prompts found";
pub const EMPTY_HINT: &str = "Try adjusting your search terms or browse all available prompts";

/// One prompt in the result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    /// 1-based position in the visible list.
    pub position: usize,
    pub id: String,
    pub heading: String,
    pub preview: String,
    pub copied: bool,
    pub copy_label: &'static str,
}

/// The prompt open in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub heading: String,
    pub content: String,
    pub copied: bool,
    pub copy_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: EMPTY_TITLE,
            hint: EMPTY_HINT,
        }
    }
}

/// Snapshot of everything the presentation shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserView {
    pub query: String,
    pub count: usize,
    pub summary: String,
    pub cards: Vec<CardView>,
    /// Present only when no prompt matches the query.
    pub empty: Option<EmptyState>,
    pub detail: Option<DetailView>,
}

pub(crate) fn card_copy_label(copied: bool) -> &'static str {
    if copied {
        CARD_COPIED_LABEL
    } else {
        CARD_COPY_LABEL
    }
}

pub(crate) fn detail_copy_label(copied: bool) -> &'static str {
    if copied {
        DETAIL_COPIED_LABEL
    } else {
        DETAIL_COPY_LABEL
    }
}
