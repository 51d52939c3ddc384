use super::*;

// -----------------------------------------------------------------------
// is_header_line
// -----------------------------------------------------------------------

#[test]
fn known_section_names_are_headers() {
    for line in [
        "About the Team",
        "About the Role",
        "About Us",
        "Responsibilities",
        "Key Responsibilities",
        "Requirements",
        "Qualifications",
        "Preferred Qualifications",
        "Benefits",
        "Compensation",
        "Our Mission",
        "Our Culture",
        "What You'll Do",
        "What you’ll bring",
        "What we're looking for",
        "We Offer",
        "Nice to have",
        "Day-to-day",
    ] {
        assert!(is_header_line(line), "expected header: {line}");
    }
}

#[test]
fn patterns_are_case_insensitive() {
    assert!(is_header_line("RESPONSIBILITIES"));
    assert!(is_header_line("responsibilities"));
}

#[test]
fn patterns_are_anchored_at_line_start() {
    assert!(!is_header_line("Great benefits and a strong team culture here"));
}

#[test]
fn ellipsis_and_colon_endings_are_headers() {
    assert!(is_header_line("And there is more…"));
    assert!(is_header_line("And there is more..."));
    assert!(is_header_line("You will work with:"));
}

#[test]
fn short_all_caps_lines_are_headers() {
    assert!(is_header_line("WHO WE HIRE"));
    assert!(!is_header_line("A"));
}

#[test]
fn plain_sentences_are_not_headers() {
    assert!(!is_header_line("Paragraph 1"));
    assert!(!is_header_line("Do things"));
    assert!(!is_header_line("We build payments software for small businesses."));
}

#[test]
fn too_short_lines_are_never_headers() {
    assert!(!is_header_line("A:"));
}

#[test]
fn long_lines_are_never_headers_even_when_pattern_matches() {
    let line = format!("Responsibilities {}", "include shipping features ".repeat(5));
    assert!(line.chars().count() > MAX_HEADER_LEN);
    assert!(matches_header_pattern(&line));
    assert!(!is_header_line(&line));
}

#[test]
fn header_length_counts_characters_not_bytes() {
    let line = "é".repeat(MAX_HEADER_LEN);
    assert!(has_header_length(&line));
}

// -----------------------------------------------------------------------
// list markers
// -----------------------------------------------------------------------

#[test]
fn strip_bullet_handles_every_glyph() {
    for glyph in BULLET_GLYPHS {
        let line = format!("{glyph} Item");
        assert_eq!(strip_bullet(&line), Some("Item"), "glyph {glyph}");
    }
}

#[test]
fn unicode_bullets_do_not_need_a_space() {
    assert_eq!(strip_bullet("•Item"), Some("Item"));
}

#[test]
fn ascii_bullets_need_a_space() {
    assert_eq!(strip_bullet("-5% churn"), None);
    assert_eq!(strip_bullet("**bold**"), None);
    assert_eq!(strip_bullet("---"), None);
}

#[test]
fn numbered_prefixes_are_recognized() {
    assert_eq!(strip_number("1) Ship it"), Some("Ship it"));
    assert_eq!(strip_number("2. Measure it"), Some("Measure it"));
    assert_eq!(strip_number("(3) Iterate"), Some("Iterate"));
    assert_eq!(strip_number("2024. A great year"), None);
    assert_eq!(strip_number("1.5 million users"), None);
}

// -----------------------------------------------------------------------
// detect_list
// -----------------------------------------------------------------------

#[test]
fn bullet_lines_form_a_list() {
    let (items, style) = detect_list(&["• One", "• Two", "• Three"]).expect("list");
    assert_eq!(items, vec!["One", "Two", "Three"]);
    assert_eq!(style, ListStyle::Bullet);
}

#[test]
fn numbered_lines_form_a_numbered_list() {
    let (items, style) = detect_list(&["1) One", "2) Two"]).expect("list");
    assert_eq!(items, vec!["One", "Two"]);
    assert_eq!(style, ListStyle::Number);
}

#[test]
fn sixty_percent_threshold() {
    // 3 of 5 marked: exactly 60%.
    assert!(detect_list(&["- a", "- b", "- c", "d", "e"]).is_some());
    // 2 of 4 marked: 50%.
    assert!(detect_list(&["- a", "- b", "c", "d"]).is_none());
}

#[test]
fn unmarked_lines_continue_the_previous_item() {
    let (items, _) = detect_list(&["- Build the roadmap", "with engineering", "- Ship"]).expect("list");
    assert_eq!(items, vec!["Build the roadmap with engineering", "Ship"]);
}

#[test]
fn leading_unmarked_line_becomes_an_item() {
    let (items, _) = detect_list(&["Intro", "- a", "- b"]).expect("list");
    assert_eq!(items, vec!["Intro", "a", "b"]);
}

#[test]
fn no_markers_is_not_a_list() {
    assert!(detect_list(&["plain", "text"]).is_none());
    assert!(detect_list(&[]).is_none());
}
