//! Stage 1: markup stripping and entity decoding.
//!
//! Regex-based rather than a DOM parse. Job descriptions arrive as loosely
//! formed fragments, and the only structure we keep is line breaks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static HIDDEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<!--.*?-->")
        .expect("valid hidden content regex")
});
static BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid br regex"));
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|div|section|article|header|footer|main|blockquote|h[1-6]|ul|ol|table|tr|hr)\b[^>]*>",
    )
    .expect("valid block tag regex")
});
static LIST_ITEM_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("valid li regex"));
static LIST_ITEM_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</li\s*>").expect("valid li close regex"));
static INLINE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:a|span|strong|b|em|i|u|code|small|sup|sub|mark|font)\b[^>]*>")
        .expect("valid inline tag regex")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[a-zA-Z!/][^>]*>").expect("valid tag regex"));
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid entity regex")
});
static HSPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("valid whitespace regex"));
static MULTI_NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));
static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?[a-z][a-z0-9]*\b[^>]*>").expect("valid markup regex"));

/// Returns `true` when the input contains at least one HTML tag.
#[must_use]
pub fn contains_markup(input: &str) -> bool {
    ANY_TAG_RE.is_match(input)
}

/// Removes `script`/`style` elements and comments, content included.
#[must_use]
pub fn remove_hidden(input: &str) -> String {
    HIDDEN_RE.replace_all(input, "").into_owned()
}

/// Converts markup into plain text that keeps paragraph and line breaks.
///
/// Block-level tags become blank lines, `<br>` a newline, and `<li>` a
/// bullet line. Remaining tags are dropped, entities decoded, horizontal
/// whitespace collapsed, and runs of blank lines reduced to one.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let text = HIDDEN_RE.replace_all(&text, "");
    let text = BREAK_RE.replace_all(&text, "\n");
    let text = BLOCK_TAG_RE.replace_all(&text, "\n\n");
    let text = LIST_ITEM_OPEN_RE.replace_all(&text, "\n• ");
    let text = LIST_ITEM_CLOSE_RE.replace_all(&text, "");
    let text = INLINE_TAG_RE.replace_all(&text, "");
    let text = TAG_RE.replace_all(&text, " ");
    let text = decode_entities(&text);

    normalize_whitespace(&text)
}

/// Strips markup and flattens all whitespace, newlines included, to single
/// spaces.
#[must_use]
pub fn inline_text(input: &str) -> String {
    flatten_whitespace(&strip_markup(input))
}

#[must_use]
pub fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses horizontal whitespace, trims every line, and reduces runs of
/// three or more newlines to exactly two.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = HSPACE_RE.replace_all(text, " ");
    let trimmed = collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    collapse_newlines(&trimmed).trim().to_string()
}

/// Reduces every run of three or more newlines to exactly two.
#[must_use]
pub fn collapse_newlines(text: &str) -> String {
    MULTI_NEWLINE_RE.replace_all(text, "\n\n").into_owned()
}

/// Decodes the supported named entities and numeric character references in
/// a single pass, so `&amp;lt;` becomes `&lt;` and not `<`. Unknown entities
/// are left untouched.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            decode_entity(&caps[1]).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(hex) = name
        .strip_prefix("#x")
        .or_else(|| name.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(decimal) = name.strip_prefix('#') {
        return decimal.parse::<u32>().ok().and_then(char::from_u32);
    }

    let decoded = match name {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "hellip" => '\u{2026}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "bull" => '\u{2022}',
        _ => return None,
    };
    Some(decoded)
}
