//! Location validity filter and display formatting.

use jobfacet_core::{lookup_key, FilterDimension};

use crate::normalizer::Normalizer;

/// Fewer letters than this and the value is not a place name.
const MIN_LETTERS: usize = 2;

impl Normalizer {
    /// `false` for values that are clearly not place names: empty, purely
    /// numeric or punctuation, a single letter, or a placeholder such as
    /// `N/A`, `TBD` or `Multiple Locations`.
    #[must_use]
    pub fn is_valid_location(&self, raw: &str) -> bool {
        let key = lookup_key(raw);
        if key.is_empty() {
            return false;
        }
        if key.chars().filter(|c| c.is_alphabetic()).count() < MIN_LETTERS {
            return false;
        }
        let stripped = key.trim_matches(|c: char| !c.is_alphanumeric());
        !(self.location_denylist.contains(&key) || self.location_denylist.contains(stripped))
    }

    /// Canonical metro (or formatted place name) for a raw location, or
    /// `fallback` when the value is not a usable location.
    #[must_use]
    pub fn format_location(&self, raw: &str, fallback: &str) -> String {
        if !self.is_valid_location(raw) {
            tracing::debug!(raw, "location rejected by validity filter");
            return fallback.to_string();
        }
        self.format_value(raw, FilterDimension::Location)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use jobfacet_core::VocabFile;

    use super::*;

    fn normalizer() -> &'static Normalizer {
        Normalizer::builtin()
    }

    #[test]
    fn rejects_empty_numeric_and_punctuation() {
        for raw in ["", "   ", "12345", "94105", "---", "(?)", "a", "1a"] {
            assert!(!normalizer().is_valid_location(raw), "{raw:?} accepted");
        }
    }

    #[test]
    fn rejects_placeholders_in_any_spelling() {
        for raw in ["N/A", "n/a", "TBD", "Unknown", "null", "Multiple Locations", "multiple_locations", "(TBD)"] {
            assert!(!normalizer().is_valid_location(raw), "{raw:?} accepted");
        }
    }

    #[test]
    fn accepts_place_names() {
        for raw in ["San Francisco, CA", "NYC", "Remote", "Berlin", "São Paulo"] {
            assert!(normalizer().is_valid_location(raw), "{raw:?} rejected");
        }
    }

    #[test]
    fn formats_metros_and_falls_back() {
        assert_eq!(
            normalizer().format_location("Palo Alto, CA", "Location TBD"),
            "San Francisco Bay Area"
        );
        assert_eq!(normalizer().format_location("nyc", "Location TBD"), "New York City");
        assert_eq!(normalizer().format_location("tbd", "Location TBD"), "Location TBD");
        assert_eq!(normalizer().format_location("", "Location TBD"), "Location TBD");
        assert_eq!(normalizer().format_location("berlin", "Location TBD"), "Berlin");
    }

    #[test]
    fn overrides_extend_the_denylist() {
        let vocab = VocabFile {
            location_denylist: vec!["HQ".to_string()],
            ..VocabFile::default()
        };
        let custom = Normalizer::with_overrides(&vocab).expect("valid overrides");
        assert!(!custom.is_valid_location("hq"));
        assert!(normalizer().is_valid_location("hq"));
    }
}
