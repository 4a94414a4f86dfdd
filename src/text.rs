//! Text helpers for prompt previews.

use crate::constants::ELLIPSIS;

/// Shortens `content` to at most `max_chars` characters plus [`ELLIPSIS`].
///
/// Lengths are counted in Unicode scalar values (`char`s), so multi-byte text
/// is never split inside a code point. Content that already fits is returned
/// unchanged.
pub fn truncate(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        None => content.to_string(),
        Some((cut, _)) => {
            let mut preview = String::with_capacity(cut + ELLIPSIS.len());
            preview.push_str(&content[..cut]);
            preview.push_str(ELLIPSIS);
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;
    use crate::constants::{DEFAULT_PREVIEW_CHARS, ELLIPSIS};

    #[test]
    fn short_content_is_unchanged() {
        assert_eq!(truncate("hello", DEFAULT_PREVIEW_CHARS), "hello");
        assert_eq!(truncate("", DEFAULT_PREVIEW_CHARS), "");
    }

    #[test]
    fn content_at_limit_is_unchanged() {
        let exact = "a".repeat(120);
        assert_eq!(truncate(&exact, 120), exact);
    }

    #[test]
    fn long_content_is_cut_and_marked() {
        let long = "a".repeat(150);
        let preview = truncate(&long, 120);
        assert_eq!(preview.chars().count(), 120 + ELLIPSIS.chars().count());
        assert_eq!(preview, format!("{}{}", "a".repeat(120), ELLIPSIS));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(truncate(text, 5), "héllo...");
        assert_eq!(truncate("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn zero_limit_yields_only_marker() {
        assert_eq!(truncate("abc", 0), ELLIPSIS);
        assert_eq!(truncate("", 0), "");
    }
}
