//! Heading search over the prompt dataset.

use crate::dataset::Dataset;
use crate::models::prompt::Prompt;
use tracing::debug;

/// Returns the prompts whose heading contains `query`, ignoring case.
///
/// Only headings are searched. An empty query matches everything, and the
/// dataset order is preserved.
pub fn filter<'a>(prompts: &'a [Prompt], query: &str) -> Vec<&'a Prompt> {
    let needle = query.to_lowercase();
    prompts
        .iter()
        .filter(|prompt| heading_matches(prompt, &needle))
        .collect()
}

fn heading_matches(prompt: &Prompt, lowered_query: &str) -> bool {
    lowered_query.is_empty() || prompt.heading.to_lowercase().contains(lowered_query)
}

/// "1 prompt found" / "N prompts found".
pub fn result_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} prompt{} found", count, plural)
}

/// Owns the search query and the visible subset it selects.
///
/// The visible positions are recomputed only when the query text changes.
#[derive(Debug, Clone)]
pub struct FilterState {
    dataset: Dataset,
    query: String,
    visible: Vec<usize>,
}

impl FilterState {
    pub fn new(dataset: Dataset) -> Self {
        let visible = (0..dataset.len()).collect();
        Self {
            dataset,
            query: String::new(),
            visible,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query. Returns `true` when the visible set was recomputed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        let needle = query.to_lowercase();
        self.visible = self
            .dataset
            .iter()
            .enumerate()
            .filter(|(_, prompt)| heading_matches(prompt, &needle))
            .map(|(index, _)| index)
            .collect();
        debug!(query = %query, matches = self.visible.len(), "Filter updated");
        self.query = query;
        true
    }

    pub fn visible(&self) -> Vec<&Prompt> {
        let prompts = self.dataset.prompts();
        self.visible.iter().map(|&index| &prompts[index]).collect()
    }

    /// The `n`th visible prompt, counting from 1 the way lists are displayed.
    pub fn nth_visible(&self, n: usize) -> Option<&Prompt> {
        let index = *self.visible.get(n.checked_sub(1)?)?;
        self.dataset.prompts().get(index)
    }

    pub fn count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn summary(&self) -> String {
        result_summary(self.count())
    }
}
