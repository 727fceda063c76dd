//! Filter on the entry's implication.

use crate::config::FilterConfig;
use crate::rating::RatedEntry;
use crate::traits::Filter;

/// Keeps entries whose implication text equals the selected one exactly.
pub struct ImplicationFilter;

impl Filter for ImplicationFilter {
    fn name(&self) -> &str {
        "ImplicationFilter"
    }

    fn keep(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool {
        config.implication.matches(&entry.entry.implication)
    }
}
