use jobfacet_core::{BlockKind, ListStyle, TextBlock};
use jobfacet_text::{extract_clean_text_preview, extract_job_sections, parse_description};

#[test]
fn paragraphs_are_separated_by_blank_lines() {
    let parsed = parse_description("<p>Paragraph 1</p><p>Paragraph 2</p><p>Paragraph 3</p>");

    assert_eq!(parsed.blocks.len(), 3);
    assert!(parsed.blocks.iter().all(|b| b.kind == BlockKind::Paragraph));
    assert_eq!(parsed.clean_text, "Paragraph 1\n\nParagraph 2\n\nParagraph 3");
}

#[test]
fn bullet_list_serializes_with_style() {
    let parsed = parse_description("<ul><li>Item 1</li><li>Item 2</li></ul>");

    assert_eq!(parsed.blocks.len(), 1);
    let json = serde_json::to_value(&parsed.blocks[0]).expect("serialize block");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "list",
            "content": ["Item 1", "Item 2"],
            "metadata": { "listStyle": "bullet" }
        })
    );
    assert!(parsed.clean_text.contains("• Item 1"));
    assert!(parsed.clean_text.contains("• Item 2"));
}

#[test]
fn strong_paragraph_becomes_header() {
    let parsed = parse_description("<p><strong>Responsibilities</strong></p><p>Do things</p>");

    assert_eq!(
        parsed.blocks,
        vec![
            TextBlock::strong_header("Responsibilities"),
            TextBlock::paragraph("Do things"),
        ]
    );
    let json = serde_json::to_value(&parsed.blocks[0]).expect("serialize block");
    assert_eq!(json["metadata"]["isStrong"], serde_json::json!(true));
}

#[test]
fn empty_input_is_unstructured_and_empty() {
    let parsed = parse_description("");
    let json = serde_json::to_value(&parsed).expect("serialize parsed content");

    assert_eq!(
        json,
        serde_json::json!({ "cleanText": "", "blocks": [], "hasStructure": false })
    );
    assert!(extract_job_sections(&parsed).is_empty());
    assert_eq!(extract_clean_text_preview("", 50), "");
}

#[test]
fn full_posting_is_sectioned() {
    let html = r"
        <h2>About the Company</h2>
        <p>We make scheduling software for hospitals.</p>
        <p><strong>What You&rsquo;ll Do</strong></p>
        <ul><li>Own the mobile roadmap</li><li>Partner with design &amp; engineering</li></ul>
        <p><b>Qualifications</b></p>
        <ol><li>5+ years of product management</li><li>Healthcare experience</li></ol>
        <h3>Perks</h3>
        <ul><li>Equity</li><li>Remote-first team</li></ul>
        <p>We are an equal opportunity employer.</p>
    ";
    let parsed = parse_description(html);
    assert!(parsed.has_structure);
    assert_eq!(parsed.header_count(), 4);

    let sections = extract_job_sections(&parsed);
    assert_eq!(sections.about, "We make scheduling software for hospitals.");
    assert_eq!(
        sections.responsibilities,
        vec!["Own the mobile roadmap", "Partner with design & engineering"]
    );
    assert_eq!(
        sections.requirements,
        vec!["5+ years of product management", "Healthcare experience"]
    );
    assert_eq!(sections.benefits, vec!["Equity", "Remote-first team"]);
    assert_eq!(sections.other, "We are an equal opportunity employer.");

    let ordered = parsed
        .blocks
        .iter()
        .find(|b| b.metadata.list_style == Some(ListStyle::Number))
        .expect("ordered list block");
    assert_eq!(ordered.items().len(), 2);
}

#[test]
fn preview_of_posting_is_flat_and_bounded() {
    let html = "<h2>About</h2><p>We make scheduling software for hospitals and clinics across the country.</p>";
    let preview = extract_clean_text_preview(html, 40);

    assert!(!preview.contains('\n'));
    assert!(preview.ends_with('…'));
    assert!(preview.chars().count() <= 41);
    assert!(preview.starts_with("About We make scheduling"));
}
