//! Description parsing command handlers.

use std::path::Path;

use jobfacet_text::{extract_clean_text_preview, extract_job_sections, parse_description};

use crate::input::{print_json, read_input};

/// Prints the parsed blocks, clean text and structure flag.
pub(crate) fn run_parse(file: Option<&Path>) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let parsed = parse_description(&input);
    tracing::info!(blocks = parsed.blocks.len(), "parsed description");
    print_json(&parsed)
}

/// Prints the about/responsibilities/requirements/benefits/other grouping.
pub(crate) fn run_sections(file: Option<&Path>) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let sections = extract_job_sections(&parse_description(&input));
    print_json(&sections)
}

/// Prints the card-view preview as plain text.
pub(crate) fn run_preview(file: Option<&Path>, max_len: usize) -> anyhow::Result<()> {
    let input = read_input(file)?;
    println!("{}", extract_clean_text_preview(&input, max_len));
    Ok(())
}
