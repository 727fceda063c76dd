//! View state for the two dashboard pages.
//!
//! Each view owns its loading flag and its UI state (filters, sort column,
//! expanded row). Everything it shows is recomputed from that state through
//! the pure functions in `pipeline`.

use data_loader::{BenchmarkResult, DatasetEntry, DatasetIndex, Result};
use pipeline::{FilterConfig, FilterPipeline, RatedEntry, SortField, sort_results};

/// Dataset explorer state
pub struct DatasetView {
    loading: bool,
    index: DatasetIndex,
    filters: FilterConfig,
    pipeline: FilterPipeline,
}

impl DatasetView {
    /// A view waiting for its data
    pub fn new() -> Self {
        Self {
            loading: true,
            index: DatasetIndex::new(),
            filters: FilterConfig::new(),
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Install the outcome of the dataset fetch.
    ///
    /// A failed load is logged and leaves the view empty; either way the
    /// view stops loading. There is no retry.
    pub fn finish_load(&mut self, loaded: Result<Vec<DatasetEntry>>) {
        self.index = match loaded {
            Ok(entries) => {
                tracing::info!("Loaded {} dataset entries", entries.len());
                DatasetIndex::from_entries(entries)
            }
            Err(e) => {
                tracing::error!("Error loading dataset: {}", e);
                DatasetIndex::new()
            }
        };
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    /// Replace the filter configuration
    pub fn set_filters(&mut self, filters: FilterConfig) {
        self.filters = filters;
    }

    /// Change one or more filter fields, e.g.
    /// `view.update_filters(|f| f.with_min_severity(Level::High))`
    pub fn update_filters(&mut self, change: impl FnOnce(FilterConfig) -> FilterConfig) {
        let current = std::mem::take(&mut self.filters);
        self.filters = change(current);
    }

    /// Rows visible under the current filters, with their ratings
    pub fn visible(&self) -> Vec<RatedEntry<'_>> {
        if self.loading {
            return Vec::new();
        }
        self.pipeline.select(self.index.entries(), &self.filters)
    }

    /// "N of M entries shown"
    pub fn summary(&self) -> String {
        format!("{} of {} entries shown", self.visible().len(), self.index.len())
    }

    pub fn languages(&self) -> &[String] {
        self.index.unique_languages()
    }

    pub fn implications(&self) -> &[String] {
        self.index.unique_implications()
    }
}

impl Default for DatasetView {
    fn default() -> Self {
        Self::new()
    }
}

/// Benchmark results table state
#[derive(Debug, Clone)]
pub struct ResultsView {
    loading: bool,
    results: Vec<BenchmarkResult>,
    sort_field: SortField,
    expanded_row: Option<usize>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            loading: true,
            results: Vec::new(),
            sort_field: SortField::default(),
            expanded_row: None,
        }
    }

    /// Install the outcome of the results fetch (same policy as the dataset)
    pub fn finish_load(&mut self, loaded: Result<Vec<BenchmarkResult>>) {
        self.results = match loaded {
            Ok(results) => {
                tracing::info!("Loaded {} benchmark results", results.len());
                results
            }
            Err(e) => {
                tracing::error!("Error loading results: {}", e);
                Vec::new()
            }
        };
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.sort_field = field;
    }

    /// Expand row `index`, or collapse it if it is already expanded.
    ///
    /// The index refers to the position in the sorted table.
    pub fn toggle_row(&mut self, index: usize) {
        self.expanded_row = if self.expanded_row == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn expanded_row(&self) -> Option<usize> {
        self.expanded_row
    }

    /// Results in display order
    pub fn rows(&self) -> Vec<&BenchmarkResult> {
        sort_results(&self.results, self.sort_field)
    }

    /// The currently expanded result, if any
    pub fn expanded(&self) -> Option<&BenchmarkResult> {
        let row = self.expanded_row?;
        self.rows().get(row).copied()
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}
