//! Regroups parsed blocks into about/responsibilities/requirements/benefits.

use jobfacet_core::{BlockKind, JobSections, ParsedContent, TextBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    About,
    Responsibilities,
    Requirements,
    Benefits,
}

const RESPONSIBILITY_KEYWORDS: &[&str] = &[
    "responsibilities",
    "what you'll do",
    "what you will do",
    "what you'll work on",
    "duties",
    "your role",
    "day to day",
    "day-to-day",
    "in this role",
    "your impact",
    "your mission",
    "accountabilities",
];

const REQUIREMENT_KEYWORDS: &[&str] = &[
    "requirements",
    "qualifications",
    "what you'll need",
    "what you will need",
    "what you'll bring",
    "what you bring",
    "what we're looking for",
    "what we are looking for",
    "who you are",
    "about you",
    "you have",
    "must have",
    "nice to have",
    "skills",
    "experience",
    "ideal candidate",
    "preferred",
];

const BENEFIT_KEYWORDS: &[&str] = &[
    "benefits",
    "perks",
    "what we offer",
    "we offer",
    "compensation",
    "salary",
    "pay range",
    "total rewards",
    "why join",
    "why you'll love",
];

const ABOUT_KEYWORDS: &[&str] = &[
    "about",
    "who we are",
    "overview",
    "our mission",
    "our story",
    "our team",
    "the team",
    "the company",
    "our company",
    "culture",
    "introduction",
    "summary",
    "the role",
    "the opportunity",
];

/// Tested in this order; `about` is the broadest and goes last so that
/// "About You" lands in requirements.
const SECTION_KEYWORDS: [(Section, &[&str]); 4] = [
    (Section::Responsibilities, RESPONSIBILITY_KEYWORDS),
    (Section::Requirements, REQUIREMENT_KEYWORDS),
    (Section::Benefits, BENEFIT_KEYWORDS),
    (Section::About, ABOUT_KEYWORDS),
];

fn classify_header(text: &str) -> Option<Section> {
    let lower = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(section, _)| *section)
}

/// Groups blocks by the recognized header that precedes them.
///
/// Lists under a recognized header become that section's items (list items
/// under `about` extend the about text). Paragraphs extend `about` only
/// under an about header and otherwise go to `other`, as do unrecognized
/// headers with their content and anything before the first recognized
/// header. Without any header, `other` is the clean text verbatim.
#[must_use]
pub fn extract_job_sections(parsed: &ParsedContent) -> JobSections {
    if !parsed.has_structure {
        tracing::debug!("no headers found; returning unstructured description");
        return JobSections {
            other: parsed.clean_text.clone(),
            ..JobSections::default()
        };
    }

    let mut sections = JobSections::default();
    let mut about: Vec<String> = Vec::new();
    let mut other: Vec<String> = Vec::new();
    let mut current: Option<Section> = None;

    for block in &parsed.blocks {
        match block.kind {
            BlockKind::Header => {
                current = block.text().and_then(classify_header);
                if current.is_none() {
                    other.push(block.render());
                }
            }
            BlockKind::List => match current {
                Some(Section::Responsibilities) => {
                    sections.responsibilities.extend_from_slice(block.items());
                }
                Some(Section::Requirements) => {
                    sections.requirements.extend_from_slice(block.items());
                }
                Some(Section::Benefits) => sections.benefits.extend_from_slice(block.items()),
                Some(Section::About) => about.push(block.render()),
                None => other.push(block.render()),
            },
            BlockKind::Paragraph => {
                if current == Some(Section::About) {
                    about.push(block.render());
                } else {
                    other.push(block.render());
                }
            }
        }
    }

    sections.about = join_blocks(&about);
    sections.other = join_blocks(&other);

    tracing::debug!(
        responsibilities = sections.responsibilities.len(),
        requirements = sections.requirements.len(),
        benefits = sections.benefits.len(),
        "extracted job sections"
    );
    sections
}

fn join_blocks(rendered: &[String]) -> String {
    rendered
        .iter()
        .filter(|text| !text.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Every string a block contributes, used to check that sectioning loses
/// nothing.
#[must_use]
pub fn block_texts(block: &TextBlock) -> Vec<String> {
    match block.text() {
        Some(text) => vec![text.to_string()],
        None => block.items().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use jobfacet_core::ListStyle;

    use super::*;
    use crate::parser::{build_parsed_content, parse_description};

    fn list(items: &[&str]) -> TextBlock {
        TextBlock::list(
            items.iter().map(|s| (*s).to_string()).collect(),
            ListStyle::Bullet,
        )
    }

    #[test]
    fn classifies_common_headers() {
        assert_eq!(classify_header("Responsibilities"), Some(Section::Responsibilities));
        assert_eq!(classify_header("What You’ll Do"), Some(Section::Responsibilities));
        assert_eq!(classify_header("In This Role"), Some(Section::Responsibilities));
        assert_eq!(classify_header("Qualifications"), Some(Section::Requirements));
        assert_eq!(classify_header("About You"), Some(Section::Requirements));
        assert_eq!(classify_header("Perks & Benefits"), Some(Section::Benefits));
        assert_eq!(classify_header("About the Company"), Some(Section::About));
        assert_eq!(classify_header("Equal Opportunity"), None);
    }

    #[test]
    fn lists_land_in_their_sections() {
        let parsed = build_parsed_content(vec![
            TextBlock::header("About Us"),
            TextBlock::paragraph("We build tools for nurses."),
            TextBlock::header("Responsibilities"),
            list(&["Own the roadmap", "Run discovery"]),
            TextBlock::header("Requirements"),
            list(&["5+ years in product"]),
            TextBlock::header("Benefits"),
            list(&["Equity", "Health"]),
        ]);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.about, "We build tools for nurses.");
        assert_eq!(sections.responsibilities, vec!["Own the roadmap", "Run discovery"]);
        assert_eq!(sections.requirements, vec!["5+ years in product"]);
        assert_eq!(sections.benefits, vec!["Equity", "Health"]);
        assert_eq!(sections.other, "");
    }

    #[test]
    fn content_before_first_header_goes_to_other() {
        let parsed = build_parsed_content(vec![
            TextBlock::paragraph("Acme is hiring."),
            TextBlock::header("Responsibilities"),
            list(&["Ship"]),
        ]);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.other, "Acme is hiring.");
        assert_eq!(sections.responsibilities, vec!["Ship"]);
    }

    #[test]
    fn unmatched_header_and_its_content_go_to_other() {
        let parsed = build_parsed_content(vec![
            TextBlock::header("Equal Opportunity"),
            TextBlock::paragraph("We welcome everyone."),
        ]);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.other, "Equal Opportunity\n\nWe welcome everyone.");
    }

    #[test]
    fn paragraph_under_list_section_goes_to_other() {
        let parsed = build_parsed_content(vec![
            TextBlock::header("Responsibilities"),
            TextBlock::paragraph("You will partner with design."),
            list(&["Write specs"]),
        ]);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.responsibilities, vec!["Write specs"]);
        assert_eq!(sections.other, "You will partner with design.");
    }

    #[test]
    fn list_under_about_extends_about_text() {
        let parsed = build_parsed_content(vec![
            TextBlock::header("Our Team"),
            TextBlock::paragraph("Twelve people."),
            list(&["Remote", "Async"]),
        ]);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.about, "Twelve people.\n\n• Remote\n• Async");
    }

    #[test]
    fn unstructured_input_goes_to_other_verbatim() {
        let parsed = parse_description("Just one long paragraph about the job.\n\nAnd another.");
        assert!(!parsed.has_structure);
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.other, parsed.clean_text);
        assert!(sections.about.is_empty());
        assert!(sections.responsibilities.is_empty());
    }

    #[test]
    fn empty_content_yields_empty_sections() {
        assert!(extract_job_sections(&ParsedContent::default()).is_empty());
    }

    #[test]
    fn strong_headers_from_markup_drive_sections() {
        let parsed = parse_description(
            "<p><strong>Responsibilities</strong></p><ul><li>Own metrics</li></ul><p><strong>Benefits</strong></p><ul><li>Equity</li></ul>",
        );
        let sections = extract_job_sections(&parsed);
        assert_eq!(sections.responsibilities, vec!["Own metrics"]);
        assert_eq!(sections.benefits, vec!["Equity"]);
    }
}
