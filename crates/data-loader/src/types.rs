//! Core record types for the SM-100 snapshots.
//!
//! Two documents are published next to the dashboard:
//! - `SM-100.json`: the dataset, one [`DatasetEntry`] per identified issue
//! - `results.json`: one [`BenchmarkResult`] per evaluated agent run
//!
//! All records are read-only once loaded. Decoding is lenient
//! (see `parser`), so every field carries a usable default.

use serde::Deserialize;

use crate::parser::{
    lenient_f64, lenient_labels, lenient_opt_f64, lenient_opt_u64, lenient_string, lenient_urls,
};

// =============================================================================
// Dataset
// =============================================================================

/// One issue in the SM-100 dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(deserialize_with = "lenient_string")]
    pub language: String,
    /// Change that introduced the issue, when known
    pub introduced_by: Option<ChangeRef>,
    #[serde(deserialize_with = "lenient_string")]
    pub implication: String,
    #[serde(deserialize_with = "lenient_string")]
    pub taxonomy: String,
    /// One categorical label per rater ("low" / "medium" / "high")
    #[serde(deserialize_with = "lenient_labels")]
    pub severity: Vec<String>,
    #[serde(deserialize_with = "lenient_labels")]
    pub domain_expertise: Vec<String>,
    #[serde(deserialize_with = "lenient_labels")]
    pub difficulty_to_find: Vec<String>,
}

impl DatasetEntry {
    /// Whether the entry names the change that introduced it.
    ///
    /// A missing value, JSON `null` and the literal string `"null"` all count
    /// as "not known", as do empty strings, `false` and `0`.
    pub fn has_introduced_by(&self) -> bool {
        self.introduced_by.as_ref().is_some_and(ChangeRef::is_set)
    }
}

/// Reference to the change (usually a commit hash) that introduced an issue.
///
/// The published data is mostly strings, but nothing enforces that, so any
/// other JSON value is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChangeRef {
    Text(String),
    Other(serde_json::Value),
}

impl ChangeRef {
    /// Text form of the reference, if it is a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ChangeRef::Text(s) => Some(s.as_str()),
            ChangeRef::Other(_) => None,
        }
    }

    /// Truthiness of the raw value, with the `"null"` string treated as unset
    pub fn is_set(&self) -> bool {
        match self {
            ChangeRef::Text(s) => !s.is_empty() && s != "null",
            ChangeRef::Other(value) => match value {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                serde_json::Value::String(s) => !s.is_empty() && s != "null",
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
            },
        }
    }
}

// =============================================================================
// Benchmark results
// =============================================================================

/// One agent run on the benchmark.
///
/// The three URL lists point at the issues the agent found or fixed; their
/// lengths are the headline numbers of the results table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchmarkResult {
    #[serde(deserialize_with = "lenient_string")]
    pub agent: String,
    #[serde(deserialize_with = "lenient_string")]
    pub run_date: String,
    /// Issues found with no context
    #[serde(deserialize_with = "lenient_urls")]
    pub needle_in_haystack: Vec<String>,
    /// Needle-in-haystack issues that were also fixed
    #[serde(deserialize_with = "lenient_urls")]
    pub remediated: Vec<String>,
    /// Issues found when given the introducing PR/commit
    #[serde(deserialize_with = "lenient_urls")]
    pub pr_review: Vec<String>,
    /// Fraction in [0, 1]
    #[serde(deserialize_with = "lenient_f64")]
    pub true_positive_rate: f64,
    /// Size of the bug pool the run was scored against
    #[serde(deserialize_with = "lenient_opt_u64")]
    pub total_bugs: Option<u64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub pr_review_true_positive_rate: Option<f64>,
}
