//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the rated dataset.

use crate::config::FilterConfig;
use crate::rating::RatedEntry;

/// One predicate of the dataset explorer.
///
/// Filters are pure: `keep` looks only at the entry, its cached ratings and
/// the configuration. Every filter is independent of the others, so the
/// order in which a pipeline runs them never changes the result.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `entry` survives this filter under `config`
    fn keep(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool;

    /// Apply this filter to a set of entries, preserving their order.
    ///
    /// # Arguments
    /// * `entries` - The entries to filter (takes ownership)
    /// * `config` - Filter configuration of the current view
    ///
    /// # Returns
    /// The entries for which [`keep`](Filter::keep) holds
    fn apply<'a>(&self, entries: Vec<RatedEntry<'a>>, config: &FilterConfig) -> Vec<RatedEntry<'a>> {
        entries
            .into_iter()
            .filter(|entry| self.keep(entry, config))
            .collect()
    }
}
