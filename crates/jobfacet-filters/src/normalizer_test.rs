use std::collections::BTreeMap;

use jobfacet_core::{FilterDimension, VocabFile};

use super::*;
use crate::tables::{dimension_labels, ACRONYM_TOKENS, SHARED_LABELS, TAG_LABELS};

fn builtin() -> &'static Normalizer {
    Normalizer::builtin()
}

fn fmt(raw: &str, dimension: FilterDimension) -> Option<String> {
    builtin().format_value(raw, dimension)
}

/// Every raw key and label any built-in table knows about.
fn every_table_value() -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    let pairs = FilterDimension::ALL
        .iter()
        .flat_map(|dim| dimension_labels(*dim).iter())
        .chain(SHARED_LABELS)
        .chain(TAG_LABELS)
        .chain(ACRONYM_TOKENS);
    for (raw, label) in pairs {
        values.push((*raw).to_string());
        values.push((*label).to_string());
    }
    for dim in FilterDimension::ALL {
        values.extend(dim.canonical_labels().iter().map(|l| (*l).to_string()));
    }
    values
}

fn vocab(dimension: FilterDimension, raw: &str, label: &str) -> VocabFile {
    let mut entries = BTreeMap::new();
    entries.insert(raw.to_string(), label.to_string());
    let mut labels = BTreeMap::new();
    labels.insert(dimension, entries);
    VocabFile {
        labels,
        ..VocabFile::default()
    }
}

// -----------------------------------------------------------------------
// forward formatting
// -----------------------------------------------------------------------

#[test]
fn empty_input_formats_to_none() {
    for dim in FilterDimension::ALL {
        assert_eq!(fmt("", dim), None);
        assert_eq!(fmt("   ", dim), None);
        assert_eq!(fmt("__", dim), None);
    }
}

#[test]
fn series_d_plus_formats_to_its_label() {
    assert_eq!(
        fmt("series_d_plus", FilterDimension::CompanyStage).as_deref(),
        Some("Series D Plus")
    );
}

#[test]
fn table_lookup_ignores_case_and_separators() {
    for raw in ["pre_ipo", "Pre-IPO", "PRE IPO", " pre__ipo "] {
        assert_eq!(fmt(raw, FilterDimension::CompanyStage).as_deref(), Some("Pre-IPO"));
    }
}

#[test]
fn shared_phrases_apply_to_every_open_dimension() {
    assert_eq!(fmt("go_to_market", FilterDimension::DomainExpertise).as_deref(), Some("Go-to-Market"));
    assert_eq!(fmt("pre_ipo", FilterDimension::Seniority).as_deref(), Some("Pre-IPO"));
}

#[test]
fn shared_label_defers_to_dimension_table() {
    // "fin_tech" is a shared alias for "Fintech", which domain expertise maps
    // to "Payments".
    assert_eq!(fmt("fin_tech", FilterDimension::DomainExpertise).as_deref(), Some("Payments"));
    assert_eq!(fmt("fin_tech", FilterDimension::IndustryVertical).as_deref(), Some("Fintech"));
}

#[test]
fn generic_transform_keeps_acronym_casing() {
    assert_eq!(
        fmt("b2b_saas-platform", FilterDimension::DomainExpertise).as_deref(),
        Some("B2B SaaS Platform")
    );
    assert_eq!(fmt("ios  apps", FilterDimension::ProductDomain).as_deref(), Some("iOS Apps"));
    assert_eq!(fmt("growth_equity", FilterDimension::CompanyStage).as_deref(), Some("Growth Equity"));
}

#[test]
fn generic_transform_handles_non_ascii() {
    assert_eq!(fmt("école", FilterDimension::Location).as_deref(), Some("École"));
    assert_eq!(fmt("straße", FilterDimension::Location).as_deref(), Some("Straße"));
    assert_eq!(fmt("ßeta", FilterDimension::Location).as_deref(), Some("ßeta"));
}

#[test]
fn work_arrangement_never_leaves_its_three_buckets() {
    for raw in ["fully_remote", "Remote-First", "hybrid", "in office", "Mars colony", "saas", "pre_ipo"] {
        let label = fmt(raw, FilterDimension::WorkArrangement).expect("non-empty input");
        assert!(["Remote", "Hybrid", "On-site"].contains(&label.as_str()), "{raw} -> {label}");
    }
    assert_eq!(fmt("fully_remote", FilterDimension::WorkArrangement).as_deref(), Some("Remote"));
}

#[test]
fn seniority_titles_are_classified() {
    assert_eq!(
        fmt("Staff Product Manager II", FilterDimension::Seniority).as_deref(),
        Some("Staff")
    );
    assert_eq!(fmt("Sr. Product Manager", FilterDimension::Seniority).as_deref(), Some("Senior"));
}

#[test]
fn experience_values_are_bucketed() {
    assert_eq!(fmt("5+ years", FilterDimension::Experience).as_deref(), Some("3-5 Years"));
    assert_eq!(fmt("10+ Years", FilterDimension::Experience).as_deref(), Some("10+ Years"));
    assert_eq!(fmt("junior", FilterDimension::Experience).as_deref(), Some("0-2 Years"));
}

#[test]
fn every_table_value_is_idempotent_in_every_dimension() {
    let values = every_table_value();
    for dim in FilterDimension::ALL {
        for value in &values {
            let once = fmt(value, dim).expect("table values are non-empty");
            let twice = fmt(&once, dim).expect("labels are non-empty");
            assert_eq!(once, twice, "{dim}: {value:?} -> {once:?} -> {twice:?}");
        }
    }
}

#[test]
fn canonical_labels_are_fixed_points() {
    for dim in FilterDimension::ALL {
        for label in dim.canonical_labels() {
            assert_eq!(fmt(label, dim).as_deref(), Some(*label), "{dim}");
        }
    }
}

// -----------------------------------------------------------------------
// reverse formatting
// -----------------------------------------------------------------------

#[test]
fn reverse_includes_snake_case_source() {
    let raws = builtin().reverse_format("Series D Plus", FilterDimension::CompanyStage);
    assert!(raws.contains(&"series_d_plus".to_string()));
    assert!(raws.contains(&"series_e".to_string()));
}

#[test]
fn reverse_work_arrangement_returns_the_whole_bucket() {
    let raws = builtin().reverse_format("Remote", FilterDimension::WorkArrangement);
    for raw in dimension_labels(FilterDimension::WorkArrangement)
        .iter()
        .filter(|(_, label)| *label == "Remote")
        .map(|(raw, _)| *raw)
    {
        assert!(raws.iter().any(|r| r == raw), "missing {raw}");
    }
    assert!(!raws.iter().any(|r| r == "hybrid"));
}

#[test]
fn every_known_label_round_trips() {
    for dim in FilterDimension::ALL {
        for label in builtin().known_labels(dim) {
            let raws = builtin().reverse_format(&label, dim);
            assert!(!raws.is_empty(), "{dim}: {label}");
            for raw in &raws {
                assert_eq!(fmt(raw, dim).as_ref(), Some(&label), "{dim}: {raw} !-> {label}");
            }
        }
    }
}

#[test]
fn reverse_of_unknown_label_uses_its_own_forms() {
    assert_eq!(
        builtin().reverse_format("Growth Equity", FilterDimension::CompanyStage),
        vec!["growth equity".to_string(), "growth_equity".to_string()]
    );
}

#[test]
fn reverse_is_case_insensitive_on_the_label() {
    assert_eq!(
        builtin().reverse_format("remote", FilterDimension::WorkArrangement),
        builtin().reverse_format("Remote", FilterDimension::WorkArrangement)
    );
}

#[test]
fn reverse_of_empty_label_is_never_empty() {
    assert_eq!(builtin().reverse_format("", FilterDimension::Seniority), vec![String::new()]);
}

#[test]
fn snake_case_reconstruction() {
    assert_eq!(snake_case("Series D Plus"), "series_d_plus");
    assert_eq!(snake_case("On-site"), "on_site");
    assert_eq!(snake_case("  AI/ML "), "ai/ml");
}

// -----------------------------------------------------------------------
// tags
// -----------------------------------------------------------------------

#[test]
fn tag_table_layers_over_shared_table() {
    assert_eq!(builtin().format_tag("jobs_to_be_done").as_deref(), Some("Jobs-to-be-Done"));
    assert_eq!(builtin().format_tag("ab_testing").as_deref(), Some("A/B Testing"));
    assert_eq!(builtin().format_tag("okr").as_deref(), Some("OKRs"));
    assert_eq!(builtin().format_tag("pricing strategy").as_deref(), Some("Pricing Strategy"));
    assert_eq!(builtin().format_tag(" "), None);
}

// -----------------------------------------------------------------------
// overrides
// -----------------------------------------------------------------------

#[test]
fn override_adds_a_new_alias_and_reverse_entry() {
    let custom =
        Normalizer::with_overrides(&vocab(FilterDimension::CompanyStage, "growth_round", "Series D Plus"))
            .expect("valid overrides");
    assert_eq!(
        custom.format_value("Growth Round", FilterDimension::CompanyStage).as_deref(),
        Some("Series D Plus")
    );
    assert!(custom
        .reverse_format("Series D Plus", FilterDimension::CompanyStage)
        .contains(&"growth_round".to_string()));
    // The built-in instance is untouched.
    assert_eq!(
        fmt("growth_round", FilterDimension::CompanyStage).as_deref(),
        Some("Growth Round")
    );
}

#[test]
fn override_may_repoint_an_alias() {
    let custom = Normalizer::with_overrides(&vocab(FilterDimension::Seniority, "jr", "Mid Level"))
        .expect("valid overrides");
    assert_eq!(
        custom.format_value("jr", FilterDimension::Seniority).as_deref(),
        Some("Mid Level")
    );
}

#[test]
fn override_cannot_change_a_label() {
    let err = Normalizer::with_overrides(&vocab(FilterDimension::Seniority, "senior", "Sr"))
        .expect_err("conflicting override");
    assert!(matches!(err, FilterError::ConflictingOverride { .. }));

    let err = Normalizer::with_overrides(&vocab(FilterDimension::Seniority, "very_senior", "senior"))
        .expect_err("label collides with an existing label");
    assert!(err.to_string().contains("Senior"));
}

#[test]
fn override_cannot_open_a_closed_dimension() {
    let err = Normalizer::with_overrides(&vocab(FilterDimension::WorkArrangement, "nomad", "Nomadic"))
        .expect_err("closed dimension");
    assert!(matches!(err, FilterError::ClosedDimension { .. }));
}

#[test]
fn override_labels_are_fixed_points() {
    let custom = Normalizer::with_overrides(&vocab(
        FilterDimension::IndustryVertical,
        "biotech",
        "Life Sciences",
    ))
    .expect("valid overrides");
    for raw in ["biotech", "Life Sciences", "life_sciences"] {
        assert_eq!(
            custom.format_value(raw, FilterDimension::IndustryVertical).as_deref(),
            Some("Life Sciences")
        );
    }
}
