//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::config::FilterConfig;
use crate::filters::{ImplicationFilter, IntroducedByFilter, LanguageFilter, MinimumRatingFilter};
use crate::rating::{RatedEntry, rate_all};
use crate::traits::Filter;
use data_loader::DatasetEntry;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard();
/// let visible = pipeline.select(index.entries(), &config);
/// println!("{} of {} entries shown", visible.len(), index.len());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The dataset explorer's filters: language, implication,
    /// introduced-by, and the three minimum ratings.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(LanguageFilter)
            .add_filter(ImplicationFilter)
            .add_filter(IntroducedByFilter)
            .add_filter(MinimumRatingFilter::severity())
            .add_filter(MinimumRatingFilter::domain_expertise())
            .add_filter(MinimumRatingFilter::difficulty_to_find())
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in the order they run
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to already-rated entries.
    ///
    /// ## Algorithm
    /// 1. Start with the rated entries
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving entries
    ///
    /// # Arguments
    /// * `entries` - Rated entries to filter (takes ownership)
    /// * `config` - The current filter configuration
    ///
    /// # Returns
    /// An order-preserving subsequence of `entries`
    pub fn apply<'a>(
        &self,
        entries: Vec<RatedEntry<'a>>,
        config: &FilterConfig,
    ) -> Vec<RatedEntry<'a>> {
        let mut current = entries;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, config);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Single-pass equivalent of [`apply`](Self::apply): an entry is kept
    /// when every filter keeps it.
    pub fn matches(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool {
        self.filters.iter().all(|filter| filter.keep(entry, config))
    }

    /// Rate `entries` and return the ones visible under `config`.
    pub fn select<'a>(&self, entries: &'a [DatasetEntry], config: &FilterConfig) -> Vec<RatedEntry<'a>> {
        self.apply(rate_all(entries), config)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter a dataset with the standard pipeline.
///
/// Returns references into `dataset`, in input order.
pub fn apply_filters<'a>(dataset: &'a [DatasetEntry], config: &FilterConfig) -> Vec<&'a DatasetEntry> {
    FilterPipeline::standard()
        .select(dataset, config)
        .into_iter()
        .map(|rated| rated.entry)
        .collect()
}
