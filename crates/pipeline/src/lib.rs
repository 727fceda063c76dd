//! Rating aggregation, filtering and sorting for the SM-100 views.
//!
//! This crate provides:
//! - Rating aggregation: rater labels -> one 1-3 rating per attribute
//! - Filter trait and implementations for the dataset explorer
//! - FilterPipeline for composing filters
//! - Stable sorting of benchmark results
//!
//! Everything here is pure: inputs are borrowed snapshots, outputs are new
//! values, and nothing is ever an error.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterConfig, FilterPipeline, Level, Selection};
//!
//! let config = FilterConfig::new()
//!     .with_language(Selection::Only("Python".into()))
//!     .with_min_severity(Level::Medium);
//!
//! let visible = FilterPipeline::standard().select(index.entries(), &config);
//! for row in &visible {
//!     println!("{} sev {}", row.entry.id, row.ratings.severity);
//! }
//! ```

pub mod config;
pub mod filter_pipeline;
pub mod filters;
pub mod rating;
pub mod sort;
pub mod traits;

// Re-export main types
pub use config::{FilterConfig, Selection};
pub use filter_pipeline::{FilterPipeline, apply_filters};
pub use rating::{EntryRatings, Level, RatedEntry, average, rate_all, stars};
pub use sort::{SortField, sort_results};
pub use traits::Filter;
