//! Filter normalization command handlers.

use std::path::Path;

use anyhow::Context;
use jobfacet_core::FilterDimension;
use jobfacet_filters::{FilterSelection, JobTagFields, Normalizer};
use serde::Serialize;

use crate::input::{print_json, read_input, values_or_stdin};

#[derive(Debug, Serialize)]
struct FormattedValue {
    raw: String,
    label: Option<String>,
}

#[derive(Debug, Serialize)]
struct ReversedLabel {
    label: String,
    raw_values: Vec<String>,
}

/// Formats each raw value; locations go through the validity filter and
/// fall back to `location_fallback`.
pub(crate) fn run_format(
    normalizer: &Normalizer,
    dimension: FilterDimension,
    values: Vec<String>,
    location_fallback: &str,
) -> anyhow::Result<()> {
    let formatted: Vec<FormattedValue> = values_or_stdin(values)?
        .into_iter()
        .map(|raw| {
            let label = if dimension == FilterDimension::Location {
                Some(normalizer.format_location(&raw, location_fallback))
            } else {
                normalizer.format_value(&raw, dimension)
            };
            FormattedValue { raw, label }
        })
        .collect();
    print_json(&formatted)
}

/// Lists the raw values each display label expands to.
pub(crate) fn run_reverse(
    normalizer: &Normalizer,
    dimension: FilterDimension,
    labels: Vec<String>,
) -> anyhow::Result<()> {
    let reversed: Vec<ReversedLabel> = values_or_stdin(labels)?
        .into_iter()
        .map(|label| ReversedLabel {
            raw_values: normalizer.reverse_format(&label, dimension),
            label,
        })
        .collect();
    print_json(&reversed)
}

/// Builds dropdown options from raw values, one per line.
pub(crate) fn run_facets(
    normalizer: &Normalizer,
    dimension: FilterDimension,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let options = normalizer.facet_options(dimension, input.lines());
    tracing::info!(%dimension, options = options.len(), "built facet options");
    print_json(&options)
}

/// Builds `field IN values` predicates from a JSON selection.
pub(crate) fn run_predicates(normalizer: &Normalizer, file: Option<&Path>) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let selection: FilterSelection =
        serde_json::from_str(&input).context("failed to parse filter selection JSON")?;
    print_json(&normalizer.build_predicates(&selection))
}

/// Extracts display tags from a JSON job record.
pub(crate) fn run_tags(normalizer: &Normalizer, file: Option<&Path>) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let fields: JobTagFields =
        serde_json::from_str(&input).context("failed to parse job record JSON")?;
    print_json(&normalizer.extract_tags(&fields))
}
