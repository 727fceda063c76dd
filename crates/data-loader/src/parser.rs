//! Parser for the SM-100 JSON snapshots.
//!
//! Both documents are JSON arrays of objects. The dashboard never validates
//! a schema: a record with a missing or oddly typed field still loads, with
//! the field falling back to an empty/neutral value. Only a document that
//! is not JSON, or whose top level is not an array, is rejected.
//!
//! Field-level fallbacks:
//! - string fields: `null` or missing -> `""`, numbers/bools -> their JSON text
//! - label lists: non-array -> empty, non-string labels -> `""` (rates as low)
//! - URL lists: non-array -> empty, non-string items are dropped
//! - numbers: anything non-numeric -> `0.0` (or absent for optional numbers)

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse the contents of `SM-100.json`.
///
/// `file` is only used to label errors.
pub fn parse_dataset(json: &str, file: &str) -> Result<Vec<DatasetEntry>> {
    serde_json::from_str(json).map_err(|source| DataLoadError::Json {
        file: file.to_string(),
        source,
    })
}

/// Parse the contents of `results.json`.
pub fn parse_results(json: &str, file: &str) -> Result<Vec<BenchmarkResult>> {
    serde_json::from_str(json).map_err(|source| DataLoadError::Json {
        file: file.to_string(),
        source,
    })
}

/// Read and parse a dataset file from disk
pub fn parse_dataset_file(path: &Path) -> Result<Vec<DatasetEntry>> {
    let contents = read_file(path)?;
    parse_dataset(&contents, &path.display().to_string())
}

/// Read and parse a results file from disk
pub fn parse_results_file(path: &Path) -> Result<Vec<BenchmarkResult>> {
    let contents = read_file(path)?;
    parse_results(&contents, &path.display().to_string())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

// =============================================================================
// Lenient field decoders
// =============================================================================

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

pub(crate) fn lenient_labels<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                _ => String::new(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn lenient_urls<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64().unwrap_or(0.0))
}

pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

pub(crate) fn lenient_opt_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_DATASET: &str = r#"[
        {
            "url": "https://github.com/org/repo/issues/1",
            "id": "org-repo-1",
            "source": "github",
            "language": "Python",
            "introduced_by": "abcdef1234567",
            "implication": "Crash",
            "taxonomy": "Logic error",
            "severity": ["low", "HIGH"],
            "domain_expertise": ["medium"],
            "difficulty_to_find": []
        },
        {
            "url": "https://github.com/org/other/issues/9",
            "id": "org-other-9",
            "source": "github",
            "language": "Go",
            "introduced_by": null,
            "implication": "Data loss",
            "taxonomy": "Concurrency",
            "severity": "high",
            "domain_expertise": ["medium", 3],
            "difficulty_to_find": ["high"]
        }
    ]"#;

    #[test]
    fn test_parse_dataset() {
        let entries = parse_dataset(SAMPLE_DATASET, "SM-100.json").unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.id, "org-repo-1");
        assert_eq!(first.language, "Python");
        assert_eq!(
            first.introduced_by,
            Some(ChangeRef::Text("abcdef1234567".to_string()))
        );
        assert_eq!(first.severity, vec!["low", "HIGH"]);
        assert!(first.difficulty_to_find.is_empty());
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let entries = parse_dataset(SAMPLE_DATASET, "SM-100.json").unwrap();
        let second = &entries[1];

        assert_eq!(second.introduced_by, None);
        // Not an array: treated as no ratings
        assert!(second.severity.is_empty());
        // Non-string label is kept as an unrecognised label
        assert_eq!(second.domain_expertise, vec!["medium".to_string(), String::new()]);
    }

    #[test]
    fn test_missing_fields_default() {
        let entries = parse_dataset(r#"[{"id": "only-id", "language": null}]"#, "x").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "only-id");
        assert_eq!(entries[0].language, "");
        assert!(entries[0].introduced_by.is_none());
        assert!(entries[0].severity.is_empty());
    }

    #[test]
    fn test_camel_case_keys_are_ignored() {
        let json = r#"[
            {"id": "good", "introduced_by": "abc1234", "severity": ["high"]},
            {"id": "both", "introduced_by": "abc", "introducedBy": "def",
             "domain_expertise": ["high"], "domainExpertise": ["low"],
             "difficultyToFind": ["high"]}
        ]"#;
        let entries = parse_dataset(json, "SM-100.json").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "good");
        assert_eq!(entries[1].introduced_by, Some(ChangeRef::Text("abc".to_string())));
        assert_eq!(entries[1].domain_expertise, vec!["high"]);
        assert!(entries[1].difficulty_to_find.is_empty());
    }

    #[test]
    fn test_non_string_introduced_by() {
        let entries = parse_dataset(r#"[{"id": "a", "introduced_by": 12345}]"#, "x").unwrap();
        assert_eq!(
            entries[0].introduced_by,
            Some(ChangeRef::Other(serde_json::json!(12345)))
        );
    }

    #[test]
    fn test_rejects_non_array_document() {
        let err = parse_dataset(r#"{"entries": []}"#, "SM-100.json").unwrap_err();
        assert!(matches!(err, DataLoadError::Json { ref file, .. } if file == "SM-100.json"));

        assert!(parse_dataset("not json", "SM-100.json").is_err());
    }

    #[test]
    fn test_parse_results() {
        let json = r#"[
            {
                "agent": "Agent A",
                "run_date": "2025-05-01",
                "needle_in_haystack": ["https://github.com/a/b/issues/1", 7],
                "remediated": [],
                "pr_review": ["https://github.com/a/b/pull/2"],
                "true_positive_rate": 0.42,
                "total_bugs": 100
            },
            {
                "agent": "Agent B",
                "true_positive_rate": "n/a",
                "pr_review_true_positive_rate": 0.5
            }
        ]"#;

        let results = parse_results(json, "results.json").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].needle_in_haystack.len(), 1);
        assert_eq!(results[0].total_bugs, Some(100));
        assert_eq!(results[0].true_positive_rate, 0.42);
        assert_eq!(results[1].true_positive_rate, 0.0);
        assert!(results[1].needle_in_haystack.is_empty());
        assert_eq!(results[1].pr_review_true_positive_rate, Some(0.5));
    }

    #[test]
    fn test_parse_dataset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DATASET.as_bytes()).unwrap();

        let entries = parse_dataset_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_results_file(Path::new("/definitely/not/here/results.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
