//! Filter implementations for the dataset explorer.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod implication;
pub mod introduced_by;
pub mod language;
pub mod minimum_rating;

// Re-export for convenience
pub use implication::ImplicationFilter;
pub use introduced_by::IntroducedByFilter;
pub use language::LanguageFilter;
pub use minimum_rating::{MinimumRatingFilter, RatedAttribute};
