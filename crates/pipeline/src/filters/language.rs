//! Filter on the entry's programming language.

use crate::config::FilterConfig;
use crate::rating::RatedEntry;
use crate::traits::Filter;

/// Keeps entries whose language equals the selected one.
///
/// With `Selection::All` every entry passes.
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn keep(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool {
        config.language.matches(&entry.entry.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Selection;
    use crate::rating::rate_all;
    use data_loader::DatasetEntry;

    fn entry(id: &str, language: &str) -> DatasetEntry {
        DatasetEntry {
            id: id.to_string(),
            language: language.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_language_filter() {
        let entries = vec![
            entry("1", "Python"),
            entry("2", "Go"),
            entry("3", "Python"),
            entry("4", "python"),
        ];

        let config = FilterConfig::new().with_language(Selection::Only("Python".into()));
        let filtered = LanguageFilter.apply(rate_all(&entries), &config);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].entry.id, "1");
        assert_eq!(filtered[1].entry.id, "3");
    }

    #[test]
    fn test_all_keeps_everything() {
        let entries = vec![entry("1", "Python"), entry("2", "")];
        let filtered = LanguageFilter.apply(rate_all(&entries), &FilterConfig::new());
        assert_eq!(filtered.len(), 2);
    }
}
