//! Line-level heuristics: is this line a header, is it a list item?
//!
//! The header patterns are a fixed, hand-tuned set of English phrasings.
//! Descriptions in other languages simply fall through to paragraphs.

use std::sync::LazyLock;

use jobfacet_core::ListStyle;
use regex::Regex;

/// Inclusive character-length bounds for a header line.
pub const MIN_HEADER_LEN: usize = 3;
pub const MAX_HEADER_LEN: usize = 100;

/// Upper bound for the all-caps header rule.
const MAX_ALL_CAPS_LEN: usize = 60;

/// Share of lines that must carry a list marker for a chunk to be a list,
/// expressed as a ratio `LIST_RATIO_NUM / LIST_RATIO_DEN` (60%).
const LIST_RATIO_NUM: usize = 3;
const LIST_RATIO_DEN: usize = 5;

pub const BULLET_GLYPHS: [char; 10] = ['•', '-', '*', '+', '▪', '◦', '▸', '▹', '●', '○'];

static HEADER_PATTERN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let patterns = [
        r"about\s+(?:the\s+|this\s+|our\s+)?(?:team|role|company|job|position|opportunity|us|you)",
        r"(?:key\s+|core\s+|primary\s+|main\s+|your\s+)?responsibilities",
        r"(?:job\s+|minimum\s+|basic\s+|preferred\s+|key\s+|technical\s+)?requirements",
        r"(?:minimum\s+|basic\s+|preferred\s+|required\s+|desired\s+|key\s+)?qualifications",
        r"(?:our\s+|the\s+|your\s+|employee\s+)?benefits",
        r"perks",
        r"compensation",
        r"salary",
        r"total\s+rewards",
        r"our\s+(?:team|mission|culture|values|story|company|product|stack)",
        r"what\s+(?:you[’']?ll|you\s+will)\s+(?:do|bring|need|learn|get|work\s+on|own)",
        r"what\s+we[’']?(?:re|\s+are)\s+looking\s+for",
        r"what\s+we\s+offer",
        r"we\s+offer",
        r"who\s+(?:you\s+are|we\s+are)",
        r"(?:nice|good)\s+to\s+have",
        r"bonus\s+points",
        r"(?:job|role|position)\s+(?:summary|overview|description)",
        r"(?:the\s+)?(?:role|position|opportunity)\s*:?\s*$",
        r"in\s+this\s+role",
        r"day[\s-]+to[\s-]+day",
        r"your\s+(?:role|impact|mission)",
        r"why\s+(?:join|you[’']?ll\s+love|work)",
        r"how\s+to\s+apply",
        r"(?:skills|experience)(?:\s+(?:and|&)\s+(?:experience|qualifications|skills))?\s*:?\s*$",
    ];
    Regex::new(&format!(r"(?i)^(?:{})\b", patterns.join("|")))
        .expect("valid header pattern regex")
});

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}[.)]|\(\d{1,3}\))\s+(?P<rest>.*)$").expect("valid numbered regex")
});

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Returns `true` when the line's length is inside the header bounds.
#[must_use]
pub fn has_header_length(line: &str) -> bool {
    (MIN_HEADER_LEN..=MAX_HEADER_LEN).contains(&char_len(line))
}

/// Matches one of the known section/role phrasings at the start of the line.
#[must_use]
pub fn matches_header_pattern(line: &str) -> bool {
    HEADER_PATTERN_RE.is_match(line.trim())
}

fn ends_with_ellipsis(line: &str) -> bool {
    line.ends_with('…') || line.ends_with("...")
}

fn is_all_caps(line: &str) -> bool {
    let mut letters = 0usize;
    for c in line.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2 && char_len(line) <= MAX_ALL_CAPS_LEN
}

/// Header test for a single trimmed line of plain text.
///
/// Lines outside the length bounds are never headers, whatever they say.
#[must_use]
pub fn is_header_line(line: &str) -> bool {
    let line = line.trim();
    if !has_header_length(line) {
        return false;
    }
    matches_header_pattern(line)
        || ends_with_ellipsis(line)
        || is_all_caps(line)
        || line.ends_with(':')
}

/// Strips a bullet glyph prefix, returning the item text.
///
/// ASCII glyphs (`-`, `*`, `+`) must be followed by whitespace so that
/// `-5%` or `**bold**` are not read as bullets.
#[must_use]
pub fn strip_bullet(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    if !BULLET_GLYPHS.contains(&first) {
        return None;
    }
    let rest = chars.as_str();
    if first.is_ascii() && !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// Strips a `1)`, `1.` or `(1)` prefix, returning the item text.
#[must_use]
pub fn strip_number(line: &str) -> Option<&str> {
    NUMBERED_RE
        .captures(line)
        .and_then(|caps| caps.name("rest"))
        .map(|m| m.as_str().trim())
}

/// Returns the item text and style when the line carries a list marker.
#[must_use]
pub fn list_marker(line: &str) -> Option<(&str, ListStyle)> {
    strip_bullet(line)
        .map(|rest| (rest, ListStyle::Bullet))
        .or_else(|| strip_number(line).map(|rest| (rest, ListStyle::Number)))
}

/// Items and style when at least 60% of the lines carry a list marker.
///
/// Unmarked lines continue the previous item (wrapped bullet text); an
/// unmarked line before the first marker becomes its own item.
#[must_use]
pub fn detect_list(lines: &[&str]) -> Option<(Vec<String>, ListStyle)> {
    if lines.is_empty() {
        return None;
    }

    let mut bullets = 0usize;
    let mut numbers = 0usize;
    for line in lines {
        match list_marker(line) {
            Some((_, ListStyle::Bullet)) => bullets += 1,
            Some((_, ListStyle::Number)) => numbers += 1,
            None => {}
        }
    }

    let marked = bullets + numbers;
    if marked == 0 || marked * LIST_RATIO_DEN < lines.len() * LIST_RATIO_NUM {
        return None;
    }

    let mut items: Vec<String> = Vec::new();
    for line in lines {
        match list_marker(line) {
            Some((rest, _)) if !rest.is_empty() => items.push(rest.to_string()),
            Some(_) => {}
            None => match items.last_mut() {
                Some(last) => {
                    last.push(' ');
                    last.push_str(line);
                }
                None => items.push((*line).to_string()),
            },
        }
    }

    if items.is_empty() {
        return None;
    }

    let style = if numbers > bullets {
        ListStyle::Number
    } else {
        ListStyle::Bullet
    };
    Some((items, style))
}

#[cfg(test)]
#[path = "heuristics_test.rs"]
mod tests;
