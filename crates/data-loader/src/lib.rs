//! # Data Loader Crate
//!
//! Loads the two static snapshots published with the SM-100 dashboard.
//!
//! ## Main Components
//!
//! - **types**: Record types (DatasetEntry, ChangeRef, BenchmarkResult)
//! - **parser**: Lenient JSON decoding of both documents
//! - **index**: DatasetIndex with distinct language/implication values
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DatasetIndex;
//! use std::path::Path;
//!
//! let (index, results) = DatasetIndex::load_from_dir(Path::new("public"))?;
//! println!("{} entries, {} languages", index.len(), index.unique_languages().len());
//! println!("{} agent runs", results.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::DatasetIndex;
pub use types::{BenchmarkResult, ChangeRef, DatasetEntry};

/// File name of the dataset snapshot
pub const DATASET_FILE: &str = "SM-100.json";

/// File name of the benchmark results snapshot
pub const RESULTS_FILE: &str = "results.json";
