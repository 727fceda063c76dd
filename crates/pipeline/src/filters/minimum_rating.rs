//! Filter to enforce a minimum rating.
//!
//! One filter instance guards one rated attribute; the standard pipeline
//! uses three (severity, domain expertise, difficulty to find).

use crate::config::FilterConfig;
use crate::rating::{Level, RatedEntry};
use crate::traits::Filter;

/// Which derived rating a [`MinimumRatingFilter`] looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatedAttribute {
    Severity,
    DomainExpertise,
    DifficultyToFind,
}

impl RatedAttribute {
    fn rating(self, entry: &RatedEntry<'_>) -> u8 {
        match self {
            RatedAttribute::Severity => entry.ratings.severity,
            RatedAttribute::DomainExpertise => entry.ratings.domain_expertise,
            RatedAttribute::DifficultyToFind => entry.ratings.difficulty_to_find,
        }
    }

    fn threshold(self, config: &FilterConfig) -> Level {
        match self {
            RatedAttribute::Severity => config.min_severity,
            RatedAttribute::DomainExpertise => config.min_domain_expertise,
            RatedAttribute::DifficultyToFind => config.min_difficulty_to_find,
        }
    }
}

/// Removes entries whose averaged rating is below the configured minimum.
///
/// ## Algorithm
/// For each entry:
/// 1. Take the cached 1-3 rating for the attribute
/// 2. Compare against the threshold's numeric value
/// 3. Keep only if rating >= threshold
pub struct MinimumRatingFilter {
    attribute: RatedAttribute,
    name: &'static str,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `attribute` - Which derived rating to compare against its minimum
    ///   in `FilterConfig`
    pub fn new(attribute: RatedAttribute) -> Self {
        let name = match attribute {
            RatedAttribute::Severity => "MinimumSeverityFilter",
            RatedAttribute::DomainExpertise => "MinimumDomainExpertiseFilter",
            RatedAttribute::DifficultyToFind => "MinimumDifficultyToFindFilter",
        };
        Self { attribute, name }
    }

    pub fn severity() -> Self {
        Self::new(RatedAttribute::Severity)
    }

    pub fn domain_expertise() -> Self {
        Self::new(RatedAttribute::DomainExpertise)
    }

    pub fn difficulty_to_find() -> Self {
        Self::new(RatedAttribute::DifficultyToFind)
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn keep(&self, entry: &RatedEntry<'_>, config: &FilterConfig) -> bool {
        self.attribute.rating(entry) >= self.attribute.threshold(config).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::rate_all;
    use data_loader::DatasetEntry;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_test_entries() -> Vec<DatasetEntry> {
        vec![
            DatasetEntry {
                id: "low".to_string(),
                severity: labels(&["low", "low"]),
                domain_expertise: labels(&["high"]),
                ..Default::default()
            },
            DatasetEntry {
                id: "mixed".to_string(),
                // rounds to 2
                severity: labels(&["low", "high"]),
                domain_expertise: labels(&["medium"]),
                ..Default::default()
            },
            DatasetEntry {
                id: "high".to_string(),
                severity: labels(&["HIGH", "high", "medium"]),
                domain_expertise: labels(&[]),
                ..Default::default()
            },
        ]
    }

    fn ids<'a>(entries: &[RatedEntry<'a>]) -> Vec<&'a str> {
        entries.iter().map(|r| r.entry.id.as_str()).collect()
    }

    #[test]
    fn test_minimum_severity() {
        let entries = create_test_entries();
        let filter = MinimumRatingFilter::severity();

        let medium = FilterConfig::new().with_min_severity(Level::Medium);
        assert_eq!(ids(&filter.apply(rate_all(&entries), &medium)), ["mixed", "high"]);

        let high = FilterConfig::new().with_min_severity(Level::High);
        assert_eq!(ids(&filter.apply(rate_all(&entries), &high)), ["high"]);
    }

    #[test]
    fn test_minimum_domain_expertise() {
        let entries = create_test_entries();
        let config = FilterConfig::new().with_min_domain_expertise(Level::Medium);
        let filtered = MinimumRatingFilter::domain_expertise().apply(rate_all(&entries), &config);

        // Empty label list rates as low
        assert_eq!(ids(&filtered), ["low", "mixed"]);
    }

    #[test]
    fn test_minimum_difficulty_ignores_other_attributes() {
        let entries = create_test_entries();
        let config = FilterConfig::new()
            .with_min_severity(Level::High)
            .with_min_difficulty_to_find(Level::Low);
        let filtered = MinimumRatingFilter::difficulty_to_find().apply(rate_all(&entries), &config);

        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(MinimumRatingFilter::severity().name(), "MinimumSeverityFilter");
        assert_eq!(
            MinimumRatingFilter::difficulty_to_find().name(),
            "MinimumDifficultyToFindFilter"
        );
    }
}
