//! DatasetIndex: the loaded dataset plus its distinct facet values.
//!
//! The dataset explorer offers one select box per facet (language,
//! implication). The choices are the distinct values present in the data,
//! sorted lexicographically, and are computed once when the snapshot is
//! indexed.

use crate::error::Result;
use crate::parser;
use crate::types::{BenchmarkResult, DatasetEntry};
use crate::{DATASET_FILE, RESULTS_FILE};
use std::collections::BTreeSet;
use std::path::Path;

/// Immutable dataset snapshot with precomputed facet values
#[derive(Debug, Clone, Default)]
pub struct DatasetIndex {
    entries: Vec<DatasetEntry>,
    languages: Vec<String>,
    implications: Vec<String>,
}

impl DatasetIndex {
    /// Creates a new, empty DatasetIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Index an already-parsed dataset, keeping entry order
    pub fn from_entries(entries: Vec<DatasetEntry>) -> Self {
        let languages: BTreeSet<&str> = entries.iter().map(|e| e.language.as_str()).collect();
        let implications: BTreeSet<&str> =
            entries.iter().map(|e| e.implication.as_str()).collect();

        let languages = languages.into_iter().map(str::to_string).collect();
        let implications = implications.into_iter().map(str::to_string).collect();

        Self {
            entries,
            languages,
            implications,
        }
    }

    /// Load `SM-100.json` (or any dataset file) from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let entries = parser::parse_dataset_file(path)?;
        tracing::info!("Loaded {} dataset entries from {}", entries.len(), path.display());
        Ok(Self::from_entries(entries))
    }

    /// Load both snapshots from a directory, parsing them in parallel.
    ///
    /// # Arguments
    /// * `dir` - Directory holding `SM-100.json` and `results.json`
    ///
    /// # Returns
    /// * `Ok((index, results))` - The indexed dataset and the benchmark results
    /// * `Err` - If either file is missing or is not a JSON array
    pub fn load_from_dir(dir: &Path) -> Result<(Self, Vec<BenchmarkResult>)> {
        let (index, results) = rayon::join(
            || Self::load_from_file(&dir.join(DATASET_FILE)),
            || parser::parse_results_file(&dir.join(RESULTS_FILE)),
        );
        let results = results?;
        tracing::info!("Loaded {} benchmark results from {}", results.len(), dir.display());
        Ok((index?, results))
    }

    /// All entries, in source order
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    /// Distinct languages, sorted
    pub fn unique_languages(&self) -> &[String] {
        &self.languages
    }

    /// Distinct implications, sorted
    pub fn unique_implications(&self) -> &[String] {
        &self.implications
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
