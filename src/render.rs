//! Plain-text rendering of browser views for the terminal.

use crate::view::{BrowserView, DetailView};
use anyhow::{Context as _, Result};
use tera::{Context, Tera};

const LIST_TEMPLATE_NAME: &str = "list";
const DETAIL_TEMPLATE_NAME: &str = "detail";

const LIST_TEMPLATE: &str = r#"
{%- if query %}Search: "{{ query }}"
{% endif -%}
{{ summary }}
{% for card in cards %}
[{{ card.position }}] {{ card.heading }}{% if card.copied %}  ({{ card.copy_label }}){% endif %}
    {{ card.preview }}
{% endfor -%}
{% if empty %}
{{ empty.title }}
{{ empty.hint }}
{% endif -%}
"#;

const DETAIL_TEMPLATE: &str = r#"
{%- set rule = "----------------------------------------" -%}
{{ rule }}
{{ heading }}
{{ rule }}
{{ content }}
{{ rule }}
[{{ copy_label }}]  [Close]
"#;

/// Renders [`BrowserView`]s with `tera` templates.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (LIST_TEMPLATE_NAME, LIST_TEMPLATE),
            (DETAIL_TEMPLATE_NAME, DETAIL_TEMPLATE),
        ])
        .context("Failed to compile view templates")?;
        Ok(Self { tera })
    }

    /// The result list, or the empty-result message.
    pub fn render_list(&self, view: &BrowserView) -> Result<String> {
        let context = Context::from_serialize(view).context("Failed to build list view context")?;
        self.tera
            .render(LIST_TEMPLATE_NAME, &context)
            .context("Failed to render prompt list")
    }

    pub fn render_detail(&self, detail: &DetailView) -> Result<String> {
        let context = Context::from_serialize(detail).context("Failed to build detail view context")?;
        self.tera
            .render(DETAIL_TEMPLATE_NAME, &context)
            .with_context(|| format!("Failed to render prompt '{}'", detail.id))
    }

    /// The detail overlay when a prompt is open, otherwise the list.
    pub fn render(&self, view: &BrowserView) -> Result<String> {
        match &view.detail {
            Some(detail) => self.render_detail(detail),
            None => self.render_list(view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CardView, EmptyState, DETAIL_COPY_LABEL, EMPTY_HINT, EMPTY_TITLE};

    fn card(position: usize, heading: &str, copied: bool) -> CardView {
        CardView {
            position,
            id: position.to_string(),
            heading: heading.to_string(),
            preview: format!("{} body", heading),
            copied,
            copy_label: if copied { "Copied!" } else { "Copy" },
        }
    }

    fn list_view(cards: Vec<CardView>) -> BrowserView {
        BrowserView {
            query: String::new(),
            count: cards.len(),
            summary: crate::filter::result_summary(cards.len()),
            empty: cards.is_empty().then(EmptyState::default),
            cards,
            detail: None,
        }
    }

    #[test]
    fn list_shows_cards_and_copied_marker() {
        let renderer = Renderer::new().unwrap();
        let output = renderer
            .render_list(&list_view(vec![card(1, "Alpha", false), card(2, "Beta", true)]))
            .unwrap();
        assert!(output.contains("2 prompts found"));
        assert!(output.contains("[1] Alpha\n"));
        assert!(output.contains("[2] Beta  (Copied!)"));
        assert!(output.contains("    Beta body"));
        assert!(!output.contains(EMPTY_TITLE));
    }

    #[test]
    fn list_shows_query_and_empty_state() {
        let renderer = Renderer::new().unwrap();
        let mut view = list_view(Vec::new());
        view.query = "zzz".to_string();
        let output = renderer.render_list(&view).unwrap();
        assert!(output.starts_with("Search: \"zzz\""));
        assert!(output.contains("0 prompts found"));
        assert!(output.contains(EMPTY_TITLE));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn content_is_not_html_escaped() {
        let renderer = Renderer::new().unwrap();
        let detail = DetailView {
            id: "1".to_string(),
            heading: "Tags & <angles>".to_string(),
            content: "Use \"quotes\" & <b>".to_string(),
            copied: false,
            copy_label: DETAIL_COPY_LABEL,
        };
        let output = renderer.render_detail(&detail).unwrap();
        assert!(output.contains("Tags & <angles>"));
        assert!(output.contains("Use \"quotes\" & <b>"));
        assert!(output.contains("[Copy Prompt]  [Close]"));
    }

    #[test]
    fn render_prefers_open_detail() {
        let renderer = Renderer::new().unwrap();
        let mut view = list_view(vec![card(1, "Alpha", false)]);
        view.detail = Some(DetailView {
            id: "1".to_string(),
            heading: "Alpha".to_string(),
            content: "Full alpha content".to_string(),
            copied: true,
            copy_label: "Prompt Copied!",
        });
        let output = renderer.render(&view).unwrap();
        assert!(output.contains("Full alpha content"));
        assert!(output.contains("[Prompt Copied!]"));
        assert!(!output.contains("prompts found"));
    }
}
