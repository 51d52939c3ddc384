//! Filter value normalization: raw field values to canonical display labels
//! and back, location validity, facet options, query predicates and tags.
//!
//! The free functions use [`Normalizer::builtin`]; build a
//! [`Normalizer::with_overrides`] to layer a vocabulary file on top.

mod classify;
pub mod error;
mod facets;
mod location;
pub mod normalizer;
pub mod predicate;
mod tables;
pub mod tags;

use jobfacet_core::{FilterDimension, Tag};

pub use error::FilterError;
pub use normalizer::{snake_case, Normalizer};
pub use predicate::{FieldPredicate, FilterSelection};
pub use tags::JobTagFields;

/// [`Normalizer::format_value`] on the built-in tables.
#[must_use]
pub fn format_value(raw: &str, dimension: FilterDimension) -> Option<String> {
    Normalizer::builtin().format_value(raw, dimension)
}

/// [`Normalizer::reverse_format`] on the built-in tables.
#[must_use]
pub fn reverse_format(display: &str, dimension: FilterDimension) -> Vec<String> {
    Normalizer::builtin().reverse_format(display, dimension)
}

/// [`Normalizer::is_valid_location`] on the built-in denylist.
#[must_use]
pub fn is_valid_location(raw: &str) -> bool {
    Normalizer::builtin().is_valid_location(raw)
}

/// [`Normalizer::format_location`] on the built-in tables.
#[must_use]
pub fn format_location(raw: &str, fallback: &str) -> String {
    Normalizer::builtin().format_location(raw, fallback)
}

/// [`Normalizer::facet_options`] on the built-in tables.
#[must_use]
pub fn facet_options<I, S>(dimension: FilterDimension, raw_values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::builtin().facet_options(dimension, raw_values)
}

/// [`Normalizer::build_predicates`] on the built-in tables.
#[must_use]
pub fn build_predicates(selection: &FilterSelection) -> Vec<FieldPredicate> {
    Normalizer::builtin().build_predicates(selection)
}

/// [`Normalizer::extract_tags`] on the built-in tables.
#[must_use]
pub fn extract_tags(fields: &JobTagFields) -> Vec<Tag> {
    Normalizer::builtin().extract_tags(fields)
}
