//! Rating aggregation.
//!
//! Every dataset entry carries three lists of rater labels (severity, domain
//! expertise, difficulty to find). Each list collapses into a single 1-3
//! rating that drives both the minimum-rating filters and the star display.

use data_loader::DatasetEntry;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A categorical rater label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
}

impl Level {
    /// Map a raw label from the dataset to a level.
    ///
    /// Case-insensitive. Never fails: anything unrecognised is `Low`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("high") {
            Level::High
        } else if label.eq_ignore_ascii_case("medium") {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// Numeric value: Low = 1, Medium = 2, High = 3
    pub fn value(self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Level::Low),
            2 => Some(Level::Medium),
            3 => Some(Level::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a threshold is not one of `1|2|3|low|medium|high`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid level '{}': expected 1-3 or low/medium/high",
            self.0
        )
    }
}

impl std::error::Error for ParseLevelError {}

/// Strict parse for user-supplied thresholds (unlike [`Level::from_label`])
impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Level::from_value(value).ok_or_else(|| ParseLevelError(s.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Collapse rater labels into a single rating in `1..=3`.
///
/// The mean of the mapped levels is rounded half-up, so `["low", "high"]`
/// gives 2 and `["medium", "high"]` gives 3. An empty list rates 1.
pub fn average<S: AsRef<str>>(labels: &[S]) -> u8 {
    if labels.is_empty() {
        return 1;
    }
    let n = labels.len() as u64;
    let sum: u64 = labels
        .iter()
        .map(|label| u64::from(Level::from_label(label.as_ref()).value()))
        .sum();
    // floor(sum / n + 1/2) without going through floats
    ((2 * sum + n) / (2 * n)) as u8
}

/// Star bar for a 1-3 rating, e.g. `★★☆`
pub fn stars(rating: u8) -> String {
    (1..=3)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

/// The three derived ratings of one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRatings {
    pub severity: u8,
    pub domain_expertise: u8,
    pub difficulty_to_find: u8,
}

impl EntryRatings {
    pub fn of(entry: &DatasetEntry) -> Self {
        Self {
            severity: average(&entry.severity),
            domain_expertise: average(&entry.domain_expertise),
            difficulty_to_find: average(&entry.difficulty_to_find),
        }
    }
}

/// An entry together with its ratings, computed once per render pass.
#[derive(Debug, Clone, Copy)]
pub struct RatedEntry<'a> {
    pub entry: &'a DatasetEntry,
    pub ratings: EntryRatings,
}

impl<'a> RatedEntry<'a> {
    pub fn new(entry: &'a DatasetEntry) -> Self {
        Self {
            entry,
            ratings: EntryRatings::of(entry),
        }
    }
}

/// Rate every entry, keeping input order.
pub fn rate_all<'a, I>(entries: I) -> Vec<RatedEntry<'a>>
where
    I: IntoParallelIterator<Item = &'a DatasetEntry>,
{
    entries.into_par_iter().map(RatedEntry::new).collect()
}
