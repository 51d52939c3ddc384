use std::collections::BTreeSet;

use jobfacet_core::FilterDimension;

use crate::normalizer::Normalizer;

impl Normalizer {
    /// Distinct display labels for a filter dropdown, built from the raw
    /// values stored for `dimension`.
    ///
    /// Canonical labels come first in their canonical order, anything else
    /// follows alphabetically. Location values failing
    /// [`Normalizer::is_valid_location`] are dropped.
    #[must_use]
    pub fn facet_options<I, S>(&self, dimension: FilterDimension, raw_values: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: BTreeSet<String> = raw_values
            .into_iter()
            .filter(|raw| {
                dimension != FilterDimension::Location || self.is_valid_location(raw.as_ref())
            })
            .filter_map(|raw| self.format_value(raw.as_ref(), dimension))
            .collect();

        let canonical = dimension.canonical_labels();
        let rank = |label: &str| {
            canonical
                .iter()
                .position(|c| *c == label)
                .unwrap_or(canonical.len())
        };

        let mut options: Vec<String> = labels.into_iter().collect();
        // Stable sort keeps the BTreeSet's alphabetical order within a rank.
        options.sort_by_key(|label| rank(label));
        options
    }
}
