use crate::markup::{flatten_whitespace, strip_markup};

const ELLIPSIS: char = '\u{2026}';

/// Flattened plain-text preview for card views, at most `max_len`
/// characters plus a trailing `…` when truncated.
///
/// Entities are decoded before truncation, so the cut can never land inside
/// an escape sequence. When a word boundary exists in the second half of
/// the window the cut moves back to it.
#[must_use]
pub fn extract_clean_text_preview(text: &str, max_len: usize) -> String {
    let flat = flatten_whitespace(&strip_markup(text));
    if flat.chars().count() <= max_len {
        return flat;
    }

    let window: String = flat.chars().take(max_len).collect();
    let cut = match window.rfind(char::is_whitespace) {
        Some(idx) if window[..idx].chars().count() * 2 >= max_len => &window[..idx],
        _ => window.as_str(),
    };

    let mut preview = cut.trim_end().to_string();
    preview.push(ELLIPSIS);
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_returned_flattened() {
        assert_eq!(
            extract_clean_text_preview("<p>Hello</p><p>world</p>", 50),
            "Hello world"
        );
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let preview = extract_clean_text_preview("alpha beta gamma delta epsilon", 12);
        assert_eq!(preview, "alpha beta…");
        assert!(preview.chars().count() <= 13);
    }

    #[test]
    fn cuts_mid_word_when_no_late_boundary() {
        let preview = extract_clean_text_preview("a supercalifragilistic word", 10);
        assert_eq!(preview, "a supercal…");
    }

    #[test]
    fn never_splits_an_entity() {
        let preview = extract_clean_text_preview("Tom&amp;Jerry forever and ever", 4);
        assert_eq!(preview, "Tom&…");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let preview = extract_clean_text_preview("ééééééééé", 3);
        assert_eq!(preview, "ééé…");
    }

    #[test]
    fn zero_budget_yields_only_the_ellipsis() {
        assert_eq!(extract_clean_text_preview("text", 0), "…");
    }

    #[test]
    fn empty_input_yields_empty_preview() {
        assert_eq!(extract_clean_text_preview("", 10), "");
    }
}
