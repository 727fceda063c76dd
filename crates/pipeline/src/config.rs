//! Filter configuration for the dataset explorer.
//!
//! A `FilterConfig` is a plain value: the view holds one, and every change
//! produces a new one through the `with_*` methods.

use crate::rating::Level;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Either every value of a facet, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Whether `value` passes this selection
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

/// `"all"` is the wildcard; anything else selects that exact value
impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            Selection::All
        } else {
            Selection::Only(s.to_string())
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

/// Inclusion criteria for the dataset explorer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub language: Selection,
    pub implication: Selection,
    /// Only keep entries whose introducing change is known
    pub require_introduced_by: bool,
    pub min_severity: Level,
    pub min_domain_expertise: Level,
    pub min_difficulty_to_find: Level,
}

impl FilterConfig {
    /// Defaults: all languages, all implications, no minimums
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Selection) -> Self {
        self.language = language;
        self
    }

    pub fn with_implication(mut self, implication: Selection) -> Self {
        self.implication = implication;
        self
    }

    pub fn with_require_introduced_by(mut self, require: bool) -> Self {
        self.require_introduced_by = require;
        self
    }

    pub fn with_min_severity(mut self, level: Level) -> Self {
        self.min_severity = level;
        self
    }

    pub fn with_min_domain_expertise(mut self, level: Level) -> Self {
        self.min_domain_expertise = level;
        self
    }

    pub fn with_min_difficulty_to_find(mut self, level: Level) -> Self {
        self.min_difficulty_to_find = level;
        self
    }

    /// True when no filter can exclude anything
    pub fn is_unrestricted(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::new();
        assert_eq!(config.language, Selection::All);
        assert_eq!(config.implication, Selection::All);
        assert!(!config.require_introduced_by);
        assert_eq!(config.min_severity.value(), 1);
        assert_eq!(config.min_domain_expertise.value(), 1);
        assert_eq!(config.min_difficulty_to_find.value(), 1);
        assert!(config.is_unrestricted());
    }

    #[test]
    fn test_field_updates_return_new_value() {
        let base = FilterConfig::new();
        let updated = base
            .clone()
            .with_language("Rust".parse().unwrap())
            .with_min_severity(Level::High);

        assert!(base.is_unrestricted());
        assert_eq!(updated.language, Selection::Only("Rust".to_string()));
        assert_eq!(updated.min_severity, Level::High);
        assert_eq!(updated.implication, Selection::All);
        assert!(!updated.is_unrestricted());
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        // Only the exact lowercase literal is the wildcard
        assert_eq!(
            "All".parse::<Selection>().unwrap(),
            Selection::Only("All".to_string())
        );
        assert!(Selection::All.matches("anything"));
        assert!(Selection::Only("Go".into()).matches("Go"));
        assert!(!Selection::Only("Go".into()).matches("go"));
    }
}
