use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagCategory {
    CorePm,
    Technical,
    Domain,
    Leadership,
    Methodology,
    Responsibilities,
}

impl TagCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TagCategory::CorePm => "core-pm",
            TagCategory::Technical => "technical",
            TagCategory::Domain => "domain",
            TagCategory::Leadership => "leadership",
            TagCategory::Methodology => "methodology",
            TagCategory::Responsibilities => "responsibilities",
        }
    }
}

impl std::fmt::Display for TagCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "core-pm" => Ok(TagCategory::CorePm),
            "technical" => Ok(TagCategory::Technical),
            "domain" => Ok(TagCategory::Domain),
            "leadership" => Ok(TagCategory::Leadership),
            "methodology" => Ok(TagCategory::Methodology),
            "responsibilities" => Ok(TagCategory::Responsibilities),
            other => Err(CoreError::UnknownTagCategory(other.to_string())),
        }
    }
}

/// A display tag derived from one of a job's structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub category: TagCategory,
}

impl Tag {
    #[must_use]
    pub fn new(label: impl Into<String>, category: TagCategory) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }
}
