//! Translates selected display labels into raw-value inclusion predicates.

use std::collections::{BTreeMap, HashSet};

use jobfacet_core::FilterDimension;
use serde::{Deserialize, Serialize};

use crate::normalizer::Normalizer;

/// Display labels selected in the UI, per dimension.
///
/// Serializes as a plain map: `{"work_arrangement": ["Remote"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    pub selected: BTreeMap<FilterDimension, Vec<String>>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `label` to the selection for `dimension`.
    #[must_use]
    pub fn with(mut self, dimension: FilterDimension, label: impl Into<String>) -> Self {
        self.selected.entry(dimension).or_default().push(label.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected
            .values()
            .flatten()
            .all(|label| label.trim().is_empty())
    }
}

/// `field IN values`, consumed by the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub field: String,
    pub values: Vec<String>,
}

impl Normalizer {
    /// One predicate per dimension with a non-empty selection, holding the
    /// union of the reverse mappings of its labels.
    #[must_use]
    pub fn build_predicates(&self, selection: &FilterSelection) -> Vec<FieldPredicate> {
        selection
            .selected
            .iter()
            .filter(|(_, labels)| labels.iter().any(|l| !l.trim().is_empty()))
            .map(|(dimension, labels)| {
                let mut seen = HashSet::new();
                let values = labels
                    .iter()
                    .filter(|label| !label.trim().is_empty())
                    .flat_map(|label| self.reverse_format(label, *dimension))
                    .filter(|raw| seen.insert(raw.clone()))
                    .collect();
                FieldPredicate {
                    field: dimension.field_name().to_string(),
                    values,
                }
            })
            .collect()
    }
}
