//! Keyword classifiers for dimensions whose raw values are free text.
//!
//! Every function takes a lookup key (already lowercased and
//! separator-collapsed) and returns one of the dimension's canonical labels.

use std::sync::LazyLock;

use jobfacet_core::FilterDimension;
use regex::Regex;

static FIRST_INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid integer regex"));

const REMOTE_MARKERS: &[&str] = &[
    "remote",
    "distributed",
    "wfh",
    "work from home",
    "anywhere",
    "telecommut",
];
const HYBRID_MARKERS: &[&str] = &["hybrid", "flexible", "flex"];

/// Tested in order; the first rule with a matching word wins.
const SENIORITY_RULES: &[(&str, &[&str])] = &[
    (
        "Executive",
        &["chief", "cpo", "ceo", "cto", "coo", "c level", "c suite", "executive"],
    ),
    ("VP", &["vp", "vice president", "svp", "evp", "avp"]),
    ("Director", &["director", "head of", "head"]),
    ("Principal", &["principal"]),
    ("Staff", &["staff"]),
    ("Lead", &["lead", "group product manager", "gpm"]),
    ("Senior", &["senior", "sr"]),
    ("Mid Level", &["mid", "intermediate", "ii"]),
    (
        "Entry Level",
        &["entry", "junior", "jr", "associate", "intern", "graduate", "new grad", "apm"],
    ),
];

const METRO_RULES: &[(&str, &[&str])] = &[
    (
        "San Francisco Bay Area",
        &[
            "san francisco",
            "bay area",
            "sf",
            "silicon valley",
            "palo alto",
            "mountain view",
            "menlo park",
            "san jose",
            "san mateo",
            "oakland",
            "berkeley",
            "sunnyvale",
            "santa clara",
            "redwood city",
            "cupertino",
        ],
    ),
    (
        "New York City",
        &["new york", "nyc", "manhattan", "brooklyn", "queens", "jersey city"],
    ),
    ("Seattle", &["seattle", "bellevue", "redmond", "kirkland"]),
    (
        "Los Angeles",
        &["los angeles", "santa monica", "culver city", "pasadena", "venice"],
    ),
    ("Boston", &["boston", "cambridge ma", "somerville"]),
    ("Austin", &["austin"]),
    ("Chicago", &["chicago", "evanston"]),
    ("Denver", &["denver", "boulder"]),
    ("Washington DC", &["washington dc", "washington d c", "dc", "arlington va"]),
    ("Remote", &["remote", "anywhere", "distributed"]),
];

/// Runs the classifier for `dimension`, if it has one.
pub(crate) fn classify(key: &str, dimension: FilterDimension) -> Option<&'static str> {
    match dimension {
        FilterDimension::WorkArrangement => Some(work_arrangement(key)),
        FilterDimension::Seniority => first_rule_match(SENIORITY_RULES, key),
        FilterDimension::Location => first_rule_match(METRO_RULES, key),
        FilterDimension::Experience => experience_bucket(key),
        _ => None,
    }
}

/// Substring classifier; anything not remote or hybrid is on-site.
pub(crate) fn work_arrangement(key: &str) -> &'static str {
    if REMOTE_MARKERS.iter().any(|m| key.contains(m)) {
        "Remote"
    } else if HYBRID_MARKERS.iter().any(|m| key.contains(m)) {
        "Hybrid"
    } else {
        "On-site"
    }
}

fn experience_bucket(key: &str) -> Option<&'static str> {
    let digits = FIRST_INTEGER_RE.find(key)?;
    // Digit runs too long for u32 are still "a lot of years".
    let years = digits.as_str().parse::<u32>().unwrap_or(u32::MAX);
    Some(match years {
        0..=2 => "0-2 Years",
        3..=5 => "3-5 Years",
        6..=9 => "6-9 Years",
        _ => "10+ Years",
    })
}

fn first_rule_match(rules: &[(&'static str, &[&str])], key: &str) -> Option<&'static str> {
    let haystack = word_haystack(key);
    rules
        .iter()
        .find(|(_, words)| words.iter().any(|w| haystack.contains(&format!(" {w} "))))
        .map(|(label, _)| *label)
}

/// `" word word "` with punctuation treated as a word break, so that
/// keywords only match whole words.
fn word_haystack(key: &str) -> String {
    let words = key
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!(" {words} ")
}
