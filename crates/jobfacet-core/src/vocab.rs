//! Optional vocabulary overrides layered over the built-in label tables.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, FilterDimension};

/// Contents of the vocabulary YAML file.
///
/// ```yaml
/// labels:
///   company_stage:
///     growth_equity: Growth Equity
/// location_denylist:
///   - hq
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabFile {
    /// Extra raw value -> canonical label entries per dimension.
    #[serde(default)]
    pub labels: BTreeMap<FilterDimension, BTreeMap<String, String>>,
    /// Extra placeholder tokens that are never place names.
    #[serde(default)]
    pub location_denylist: Vec<String>,
}

/// Normalizes a raw value into the key used for table lookups: lowercased,
/// trimmed, with runs of `_`, `-` and whitespace collapsed to one space.
///
/// `"Pre_IPO"`, `"pre-ipo"` and `" pre  ipo "` all map to `"pre ipo"`.
#[must_use]
pub fn lookup_key(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load and validate a vocabulary override file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocab(path: &Path) -> Result<VocabFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let vocab: VocabFile = serde_yaml::from_str(&content)?;

    validate_vocab(&vocab)?;

    Ok(vocab)
}

fn validate_vocab(vocab: &VocabFile) -> Result<(), ConfigError> {
    for (dimension, entries) in &vocab.labels {
        let mut seen_keys = HashSet::new();

        for (raw, label) in entries {
            let key = lookup_key(raw);
            if key.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{dimension}: raw value must be non-empty"
                )));
            }

            if label.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{dimension}: label for '{raw}' must be non-empty"
                )));
            }

            if dimension.is_closed() && !dimension.canonical_labels().contains(&label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "{dimension}: label '{label}' for '{raw}' is not one of {:?}",
                    dimension.canonical_labels()
                )));
            }

            if !seen_keys.insert(key.clone()) {
                return Err(ConfigError::Validation(format!(
                    "{dimension}: duplicate raw value '{raw}' (normalizes to '{key}')"
                )));
            }
        }
    }

    for token in &vocab.location_denylist {
        if lookup_key(token).is_empty() {
            return Err(ConfigError::Validation(
                "location_denylist entries must be non-empty".to_string(),
            ));
        }
    }

    Ok(())
}
