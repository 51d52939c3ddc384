//! Description parser: raw markup or plain text in, [`ParsedContent`] out.

use std::sync::LazyLock;

use jobfacet_core::{ListStyle, ParsedContent, TextBlock};
use regex::Regex;

use crate::heuristics::MAX_HEADER_LEN;
use crate::markup::{collapse_newlines, contains_markup, inline_text, remove_hidden, strip_markup};
use crate::segment::segment_text;

static BLOCK_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<h(?P<level>[1-6])\b[^>]*>(?P<heading>.*?)</h[1-6]\s*>|<(?P<list>ul|ol)\b[^>]*>(?P<items>.*?)</(?:ul|ol)\s*>|<p\b[^>]*>(?P<para>.*?)</p\s*>",
    )
    .expect("valid block element regex")
});
static LIST_ITEM_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("valid li split regex"));
static BOLD_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*<(?:strong|b)\b[^>]*>(?P<text>.*?)</(?:strong|b)\s*>\s*(?:<br\s*/?>\s*)*$")
        .expect("valid bold-only regex")
});
static BOLD_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:strong|b)\s*>").expect("valid bold close regex"));

/// Parses a raw job description into classified blocks and clean text.
///
/// Input with HTML tags takes the markup path, which keeps heading levels,
/// bold-only headers and list styles; anything else is segmented as plain
/// text. Empty input yields [`ParsedContent::default`].
#[must_use]
pub fn parse_description(input: &str) -> ParsedContent {
    if input.trim().is_empty() {
        return ParsedContent::default();
    }

    let markup = contains_markup(input);
    let blocks = if markup {
        parse_markup(input)
    } else {
        segment_text(&strip_markup(input))
    };

    let parsed = build_parsed_content(blocks);
    tracing::debug!(
        markup,
        blocks = parsed.blocks.len(),
        headers = parsed.header_count(),
        has_structure = parsed.has_structure,
        "parsed description"
    );
    parsed
}

/// Assembles the final [`ParsedContent`] from classified blocks.
#[must_use]
pub fn build_parsed_content(blocks: Vec<TextBlock>) -> ParsedContent {
    let has_structure = blocks.iter().any(TextBlock::is_header);
    ParsedContent {
        clean_text: assemble_clean_text(&blocks),
        blocks,
        has_structure,
    }
}

/// Stage 3: blocks rendered in order and separated by a blank line.
#[must_use]
pub fn assemble_clean_text(blocks: &[TextBlock]) -> String {
    let joined = blocks
        .iter()
        .map(TextBlock::render)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    collapse_newlines(&joined).trim().to_string()
}

fn parse_markup(html: &str) -> Vec<TextBlock> {
    let html = remove_hidden(html);
    let mut blocks = Vec::new();
    let mut cursor = 0usize;

    for caps in BLOCK_ELEMENT_RE.captures_iter(&html) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        blocks.extend(segment_text(&strip_markup(&html[cursor..whole.start()])));
        cursor = whole.end();

        if let (Some(level), Some(heading)) = (caps.name("level"), caps.name("heading")) {
            let text = inline_text(heading.as_str());
            if text.chars().count() > MAX_HEADER_LEN {
                blocks.push(TextBlock::paragraph(text));
            } else if !text.is_empty() {
                let level = level.as_str().parse::<u8>().unwrap_or(1);
                blocks.push(TextBlock::heading(text, level));
            }
        } else if let (Some(tag), Some(items)) = (caps.name("list"), caps.name("items")) {
            let style = if tag.as_str().eq_ignore_ascii_case("ol") {
                ListStyle::Number
            } else {
                ListStyle::Bullet
            };
            blocks.extend(parse_list_element(items.as_str(), style));
        } else if let Some(para) = caps.name("para") {
            blocks.extend(parse_paragraph_element(para.as_str()));
        }
    }

    blocks.extend(segment_text(&strip_markup(&html[cursor..])));
    blocks
}

fn parse_list_element(inner: &str, style: ListStyle) -> Vec<TextBlock> {
    let mut pieces = LIST_ITEM_SPLIT_RE.split(inner);
    // Anything before the first <li> is stray text, not an item.
    let preamble = pieces.next().map(inline_text).unwrap_or_default();
    let items: Vec<String> = pieces
        .map(inline_text)
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        tracing::debug!("list element without items; falling back to text segmentation");
        return segment_text(&strip_markup(inner));
    }

    let mut blocks = Vec::new();
    if !preamble.is_empty() {
        blocks.push(TextBlock::paragraph(preamble));
    }
    blocks.push(TextBlock::list(items, style));
    blocks
}

fn parse_paragraph_element(inner: &str) -> Vec<TextBlock> {
    if let Some(text) = bold_only_text(inner) {
        if text.chars().count() <= MAX_HEADER_LEN {
            return vec![TextBlock::strong_header(text)];
        }
        return vec![TextBlock::paragraph(text)];
    }
    segment_text(&strip_markup(inner))
}

/// Text of a paragraph whose only content is a single `strong`/`b` element.
fn bold_only_text(inner: &str) -> Option<String> {
    let caps = BOLD_ONLY_RE.captures(inner)?;
    let raw = caps.name("text")?.as_str();
    if BOLD_CLOSE_RE.is_match(raw) {
        return None;
    }
    let text = inline_text(raw);
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
