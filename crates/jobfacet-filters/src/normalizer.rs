//! Forward and reverse mapping between raw field values and display labels.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::LazyLock;

use jobfacet_core::{lookup_key, FilterDimension, VocabFile};

use crate::classify::classify;
use crate::error::FilterError;
use crate::tables::{
    dimension_labels, ACRONYM_TOKENS, LOCATION_DENYLIST, SHARED_LABELS, TAG_LABELS,
};

static BUILTIN: LazyLock<Normalizer> = LazyLock::new(Normalizer::from_tables);

/// Raw -> label entries keyed by lookup key, plus the inverted index used
/// for reverse mapping.
#[derive(Debug, Clone, Default)]
struct LabelTable {
    by_key: HashMap<String, String>,
    /// Lowercased label -> raw spellings, in insertion order.
    raw_by_label: HashMap<String, Vec<String>>,
}

impl LabelTable {
    fn build(entries: &[(&str, &str)], canonical: &[&str]) -> Self {
        let mut table = Self::default();
        for (raw, label) in entries {
            table.insert_alias(raw, label);
        }
        // Labels go last so every label is a fixed point of its own table.
        for label in canonical.iter().chain(entries.iter().map(|(_, label)| label)) {
            table.register_label(label);
        }
        table
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    /// The label that `key` formats to, if `key` is itself a label's key.
    fn fixed_point(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|label| lookup_key(label) == key)
    }

    fn insert_alias(&mut self, raw: &str, label: &str) {
        let key = lookup_key(raw);
        if key.is_empty() {
            return;
        }
        self.by_key.insert(key, label.to_string());
        let raws = self.raw_by_label.entry(label.to_lowercase()).or_default();
        if !raws.iter().any(|r| r == raw) {
            raws.push(raw.to_string());
        }
    }

    fn register_label(&mut self, label: &str) {
        let key = lookup_key(label);
        if !key.is_empty() {
            self.by_key.insert(key, label.to_string());
        }
    }

    fn raws_for(&self, label: &str) -> &[String] {
        self.raw_by_label
            .get(&label.to_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    fn labels(&self) -> impl Iterator<Item = &str> {
        self.by_key.values().map(String::as_str)
    }
}

/// Consolidated label tables with their reverse index.
///
/// [`Normalizer::builtin`] is the process-wide instance behind the free
/// functions of this crate; [`Normalizer::with_overrides`] layers a
/// vocabulary file on top of it.
#[derive(Debug, Clone)]
pub struct Normalizer {
    shared: LabelTable,
    tags: LabelTable,
    dimensions: BTreeMap<FilterDimension, LabelTable>,
    acronyms: HashMap<String, String>,
    pub(crate) location_denylist: HashSet<String>,
}

impl Normalizer {
    /// The built-in tables, initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static Normalizer {
        &BUILTIN
    }

    fn from_tables() -> Self {
        let dimensions = FilterDimension::ALL
            .iter()
            .map(|dim| {
                (
                    *dim,
                    LabelTable::build(dimension_labels(*dim), dim.canonical_labels()),
                )
            })
            .collect();

        let normalizer = Self {
            shared: LabelTable::build(SHARED_LABELS, &[]),
            tags: LabelTable::build(TAG_LABELS, &[]),
            dimensions,
            acronyms: ACRONYM_TOKENS
                .iter()
                .map(|(token, casing)| ((*token).to_string(), (*casing).to_string()))
                .collect(),
            location_denylist: LOCATION_DENYLIST.iter().map(|t| lookup_key(t)).collect(),
        };
        tracing::debug!(
            shared = normalizer.shared.by_key.len(),
            acronyms = normalizer.acronyms.len(),
            "built label tables"
        );
        normalizer
    }

    /// Built-in tables extended with the entries of a vocabulary file.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ClosedDimension`] when a label falls outside a
    /// closed dimension's fixed set, and [`FilterError::ConflictingOverride`]
    /// when an entry would change what an existing label formats to.
    pub fn with_overrides(vocab: &VocabFile) -> Result<Self, FilterError> {
        let mut normalizer = Self::from_tables();

        for (dimension, entries) in &vocab.labels {
            let dimension = *dimension;
            let table = normalizer.dimensions.entry(dimension).or_default();

            for (raw, label) in entries {
                let label = label.trim();
                if dimension.is_closed() && !dimension.canonical_labels().contains(&label) {
                    return Err(FilterError::ClosedDimension {
                        dimension,
                        label: label.to_string(),
                        allowed: dimension.canonical_labels(),
                    });
                }

                for key in [lookup_key(raw), lookup_key(label)] {
                    if let Some(existing) = table.fixed_point(&key) {
                        if existing != label {
                            return Err(FilterError::ConflictingOverride {
                                dimension,
                                raw: raw.clone(),
                                label: label.to_string(),
                                existing: existing.to_string(),
                            });
                        }
                    }
                }

                table.insert_alias(raw, label);
                table.register_label(label);
            }
        }

        normalizer
            .location_denylist
            .extend(vocab.location_denylist.iter().map(|t| lookup_key(t)));

        tracing::info!(
            dimensions = vocab.labels.len(),
            denylist = vocab.location_denylist.len(),
            "applied vocabulary overrides"
        );
        Ok(normalizer)
    }

    fn table(&self, dimension: FilterDimension) -> Option<&LabelTable> {
        self.dimensions.get(&dimension)
    }

    /// Formats a raw field value into its display label.
    ///
    /// Returns `None` for empty input; the caller picks the fallback label.
    /// Canonical labels are fixed points, so formatting a formatted value is
    /// a no-op. Work arrangement always lands on `Remote`, `Hybrid` or
    /// `On-site`.
    #[must_use]
    pub fn format_value(&self, raw: &str, dimension: FilterDimension) -> Option<String> {
        let key = lookup_key(raw);
        if key.is_empty() {
            return None;
        }

        let table = self.table(dimension);
        if let Some(label) = table.and_then(|t| t.get(&key)) {
            return Some(label.to_string());
        }

        if !dimension.is_closed() {
            if let Some(label) = self.shared.get(&key) {
                return Some(Self::settle(label, table));
            }
        }

        if let Some(label) = classify(&key, dimension) {
            return Some(label.to_string());
        }

        Some(self.title_case(&key))
    }

    /// Formats a raw tag value with the tag table layered over the shared one.
    #[must_use]
    pub fn format_tag(&self, raw: &str) -> Option<String> {
        let key = lookup_key(raw);
        if key.is_empty() {
            return None;
        }
        if let Some(label) = self.tags.get(&key) {
            return Some(label.to_string());
        }
        if let Some(label) = self.shared.get(&key) {
            return Some(Self::settle(label, Some(&self.tags)));
        }
        Some(self.title_case(&key))
    }

    /// A label borrowed from the shared table defers to the more specific
    /// table when that table owns the same key.
    fn settle(label: &str, specific: Option<&LabelTable>) -> String {
        specific
            .and_then(|t| t.get(&lookup_key(label)))
            .unwrap_or(label)
            .to_string()
    }

    /// Every raw value that formats to `display` under `dimension`.
    ///
    /// Known raw spellings come first, then the label's lowercase and
    /// snake_case forms; each candidate is kept only if it formats back to
    /// the label. Never empty: when nothing survives (or `display` formats
    /// to nothing) the snake_case reconstruction is returned alone.
    #[must_use]
    pub fn reverse_format(&self, display: &str, dimension: FilterDimension) -> Vec<String> {
        let display = display.trim();
        let snake = snake_case(display);
        let Some(target) = self.format_value(display, dimension) else {
            return vec![snake];
        };

        let mut candidates: Vec<String> = Vec::new();
        if let Some(table) = self.table(dimension) {
            candidates.extend(table.raws_for(&target).iter().cloned());
        }
        if !dimension.is_closed() {
            candidates.extend(self.shared.raws_for(&target).iter().cloned());
        }
        candidates.push(target.to_lowercase());
        candidates.push(snake_case(&target));
        candidates.push(display.to_lowercase());
        candidates.push(snake.clone());

        let mut seen = HashSet::new();
        let raws: Vec<String> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.clone()))
            .filter(|c| self.format_value(c, dimension).as_deref() == Some(target.as_str()))
            .collect();

        if raws.is_empty() {
            let label = display;
            tracing::debug!(
                %dimension,
                label,
                "no raw value formats back; using snake_case"
            );
            return vec![snake];
        }
        raws
    }

    /// All labels the tables of `dimension` can produce, canonical first.
    #[must_use]
    pub fn known_labels(&self, dimension: FilterDimension) -> Vec<String> {
        let canonical = dimension.canonical_labels();
        let mut extra: Vec<String> = self
            .table(dimension)
            .into_iter()
            .flat_map(LabelTable::labels)
            .filter(|label| !canonical.contains(label))
            .map(str::to_string)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        extra.sort();

        canonical
            .iter()
            .map(|label| (*label).to_string())
            .chain(extra)
            .collect()
    }

    /// Raw spellings known to the tables of `dimension`, sorted.
    #[must_use]
    pub fn known_raw_values(&self, dimension: FilterDimension) -> Vec<String> {
        let mut raws: Vec<String> = self
            .table(dimension)
            .into_iter()
            .flat_map(|t| t.raw_by_label.values().flatten().cloned())
            .collect();
        raws.sort();
        raws.dedup();
        raws
    }

    /// Title-cases each space-separated token of a lookup key; tokens in the
    /// acronym table keep their canonical casing.
    fn title_case(&self, key: &str) -> String {
        key.split(' ')
            .map(|token| {
                self.acronyms
                    .get(token)
                    .cloned()
                    .unwrap_or_else(|| capitalize(token))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercases the first character when doing so survives lowercasing
/// again, which keeps the lookup key of the result unchanged.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let upper: String = first.to_uppercase().collect();
    let head = if upper.to_lowercase() == first.to_string() {
        upper
    } else {
        first.to_string()
    };
    format!("{head}{}", chars.as_str())
}

/// `"Series D Plus"` -> `"series_d_plus"`.
#[must_use]
pub fn snake_case(value: &str) -> String {
    lookup_key(value).replace(' ', "_")
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
