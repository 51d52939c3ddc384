use jobfacet_core::FilterDimension;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{dimension}: label '{label}' is not one of {allowed:?}")]
    ClosedDimension {
        dimension: FilterDimension,
        label: String,
        allowed: &'static [&'static str],
    },

    #[error("{dimension}: override '{raw}' -> '{label}' conflicts with existing label '{existing}'")]
    ConflictingOverride {
        dimension: FilterDimension,
        raw: String,
        label: String,
        existing: String,
    },
}
