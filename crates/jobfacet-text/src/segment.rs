//! Stage 2 for plain text: blank-line chunks classified into blocks.

use std::sync::LazyLock;

use jobfacet_core::TextBlock;
use regex::Regex;

use crate::heuristics::{detect_list, is_header_line, list_marker};

static CHUNK_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[^\S\n]*\n\s*").expect("valid chunk split regex"));

/// Segments already-stripped plain text into classified blocks.
pub(crate) fn segment_text(text: &str) -> Vec<TextBlock> {
    let mut blocks = Vec::new();
    for chunk in CHUNK_SPLIT_RE.split(text) {
        let lines: Vec<&str> = chunk
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        blocks.extend(classify_chunk(&lines, true));
    }
    blocks
}

/// Classifies one chunk of trimmed, non-empty lines.
///
/// A leading header splits off and the remainder is classified once more
/// with `allow_header` off, so the remainder can only be a list or a
/// paragraph. Recursion never goes deeper than that single level.
fn classify_chunk(lines: &[&str], allow_header: bool) -> Vec<TextBlock> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    if allow_header && lines.len() > 1 && list_marker(first).is_none() && is_header_line(first) {
        let mut blocks = vec![TextBlock::header(*first)];
        blocks.extend(classify_chunk(&lines[1..], false));
        return blocks;
    }

    if let Some((items, style)) = detect_list(lines) {
        return vec![TextBlock::list(items, style)];
    }

    if allow_header && lines.len() == 1 && is_header_line(first) {
        return vec![TextBlock::header(*first)];
    }

    vec![TextBlock::paragraph(lines.join(" "))]
}
