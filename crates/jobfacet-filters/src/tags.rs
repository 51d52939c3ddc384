//! Display tags from a job's structured fields.

use std::collections::HashSet;

use jobfacet_core::{lookup_key, FilterDimension, Tag, TagCategory};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalizer::Normalizer;

const TECHNICAL_SKILL_WORDS: &[&str] = &[
    "sql",
    "python",
    "api",
    "apis",
    "data",
    "analytics",
    "ai",
    "ml",
    "ai/ml",
    "machine",
    "engineering",
    "technical",
    "architecture",
    "cloud",
    "aws",
    "infrastructure",
    "platform",
    "security",
    "mobile",
    "software",
];

const LEADERSHIP_SKILL_WORDS: &[&str] = &[
    "leadership",
    "leading",
    "management",
    "managing",
    "mentoring",
    "mentorship",
    "coaching",
    "hiring",
    "stakeholder",
    "stakeholders",
    "influence",
    "executive",
    "team",
];

/// The fields of a job record that carry tags.
///
/// Each field may hold a JSON array, an object of category -> values (as
/// `tools` does), a string containing serialized JSON, or a plain string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobTagFields {
    #[serde(default)]
    pub skills: Value,
    #[serde(default)]
    pub tools: Value,
    #[serde(default)]
    pub kpis: Value,
    #[serde(default)]
    pub methodologies: Value,
    #[serde(default)]
    pub domain_expertise: Value,
    #[serde(default)]
    pub management_scope: Value,
}

impl Normalizer {
    /// Flat, order-stable tag list; the first occurrence of each
    /// (category, label) pair wins.
    ///
    /// Fields backed by a filter dimension are labelled exactly as that
    /// dimension's facets are.
    #[must_use]
    pub fn extract_tags(&self, fields: &JobTagFields) -> Vec<Tag> {
        let sources: [(&Value, Option<TagCategory>, Option<FilterDimension>); 6] = [
            (&fields.skills, None, None),
            (&fields.tools, Some(TagCategory::Technical), None),
            (
                &fields.domain_expertise,
                Some(TagCategory::Domain),
                Some(FilterDimension::DomainExpertise),
            ),
            (
                &fields.management_scope,
                Some(TagCategory::Leadership),
                Some(FilterDimension::ManagementScope),
            ),
            (&fields.methodologies, Some(TagCategory::Methodology), None),
            (&fields.kpis, Some(TagCategory::Responsibilities), None),
        ];

        let mut seen = HashSet::new();
        let mut tags = Vec::new();
        for (value, category, dimension) in sources {
            for raw in field_values(value) {
                let label = match dimension {
                    Some(dimension) => self.format_value(&raw, dimension),
                    None => self.format_tag(&raw),
                };
                let Some(label) = label else {
                    continue;
                };
                let category = category.unwrap_or_else(|| skill_category(&raw));
                let tag = Tag::new(label, category);
                if seen.insert(tag.clone()) {
                    tags.push(tag);
                }
            }
        }
        tags
    }
}

/// Flattens one field into its string values.
fn field_values(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Bool(b) => vec![b.to_string()],
        Value::Number(n) => vec![n.to_string()],
        Value::String(s) => string_values(s),
        Value::Array(items) => items.iter().flat_map(field_values).collect(),
        Value::Object(map) => map.values().flat_map(field_values).collect(),
    }
}

fn string_values(s: &str) -> Vec<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(trimmed) {
        // A JSON string literal would parse to itself forever.
        Ok(Value::String(inner)) => vec![inner],
        Ok(parsed) => field_values(&parsed),
        Err(e) => {
            if trimmed.starts_with(['[', '{']) {
                tracing::debug!(error = %e, "malformed JSON field; treating as a single value");
            }
            vec![trimmed.to_string()]
        }
    }
}

fn skill_category(raw: &str) -> TagCategory {
    let key = lookup_key(raw);
    let has_word = |words: &[&str]| key.split(' ').any(|w| words.contains(&w));
    if has_word(TECHNICAL_SKILL_WORDS) {
        TagCategory::Technical
    } else if has_word(LEADERSHIP_SKILL_WORDS) {
        TagCategory::Leadership
    } else {
        TagCategory::CorePm
    }
}
