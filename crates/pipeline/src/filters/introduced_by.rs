//! Filter requiring a known introducing change.

use crate::config::FilterConfig;
use crate::rating::RatedEntry;
use crate::traits::Filter;

/// When `require_introduced_by` is set, drops entries without an
/// introducing change (absent, `null`, or the string `"null"`).
pub struct IntroducedByFilter;

impl Filter for IntroducedByFilter {
    fn name(&self) -> &str {
        "IntroducedByFilter"
    }

    fn keep(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool {
        !config.require_introduced_by || entry.entry.has_introduced_by()
    }
}
