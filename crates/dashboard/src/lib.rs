//! # SM-100 dashboard views
//!
//! This crate ties the loaded snapshots to the two pages of the dashboard:
//! 1. Fetch `results.json` and `SM-100.json` (concurrently)
//! 2. Hand each outcome to its view; failures leave that view empty
//! 3. Views recompute their rows from their UI state on demand
//!
//! ## Components
//! - **source**: `AssetSource` (directory or HTTP) and the async loaders
//! - **views**: `DatasetView` and `ResultsView` state objects
//! - **commit**: commit-reference rendering as an ordered rule list
//! - **render**: plain-text tables

pub mod commit;
pub mod render;
pub mod source;
pub mod views;

pub use commit::CommitLink;
pub use source::AssetSource;
pub use views::{DatasetView, ResultsView};

use std::time::Instant;

/// Both pages with their data loaded
pub struct Dashboard {
    pub results: ResultsView,
    pub dataset: DatasetView,
}

/// Load both snapshots from `source`.
///
/// Never fails: each view falls back to empty data on its own if its
/// document cannot be fetched or parsed.
pub async fn load_dashboard(source: &AssetSource) -> Dashboard {
    let start = Instant::now();
    let mut results = ResultsView::new();
    let mut dataset = DatasetView::new();

    let (loaded_results, loaded_dataset) =
        tokio::join!(source::load_results(source), source::load_dataset(source));

    results.finish_load(loaded_results);
    dataset.finish_load(loaded_dataset);

    tracing::debug!("Dashboard loaded in {:?}", start.elapsed());
    Dashboard { results, dataset }
}
