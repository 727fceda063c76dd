//! Where the JSON snapshots come from.
//!
//! The published dashboard serves `SM-100.json` and `results.json` from its
//! site root. Locally the same files usually sit in a directory (`public/`).

use data_loader::{BenchmarkResult, DataLoadError, DatasetEntry, Result, parser};
use std::path::PathBuf;

/// Location of the snapshot files
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Read `<dir>/<name>` from disk
    Directory(PathBuf),
    /// GET `<base_url>/<name>`
    Http(String),
}

impl AssetSource {
    /// Fetch the raw text of one snapshot.
    pub async fn fetch(&self, name: &str) -> Result<String> {
        match self {
            AssetSource::Directory(dir) => {
                let path = dir.join(name);
                tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                        path: path.display().to_string(),
                    },
                    _ => DataLoadError::IoError(e),
                })
            }
            AssetSource::Http(base) => {
                let url = asset_url(base, name);
                let request_url = url.clone();
                // ureq is blocking; keep it off the async workers
                tokio::task::spawn_blocking(move || http_get(&request_url))
                    .await
                    .map_err(|e| DataLoadError::Fetch {
                        url,
                        reason: e.to_string(),
                    })?
            }
        }
    }

    /// Human-readable location of `name`
    pub fn describe(&self, name: &str) -> String {
        match self {
            AssetSource::Directory(dir) => dir.join(name).display().to_string(),
            AssetSource::Http(base) => asset_url(base, name),
        }
    }
}

fn asset_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}

fn http_get(url: &str) -> Result<String> {
    let response = ureq::get(url).call().map_err(|e| DataLoadError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(response.into_string()?)
}

/// Fetch and parse `SM-100.json`
pub async fn load_dataset(source: &AssetSource) -> Result<Vec<DatasetEntry>> {
    let body = source.fetch(data_loader::DATASET_FILE).await?;
    parser::parse_dataset(&body, &source.describe(data_loader::DATASET_FILE))
}

/// Fetch and parse `results.json`
pub async fn load_results(source: &AssetSource) -> Result<Vec<BenchmarkResult>> {
    let body = source.fetch(data_loader::RESULTS_FILE).await?;
    parser::parse_results(&body, &source.describe(data_loader::RESULTS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("https://sm100.dev", "results.json"), "https://sm100.dev/results.json");
        assert_eq!(asset_url("https://sm100.dev/", "SM-100.json"), "https://sm100.dev/SM-100.json");
    }

    #[tokio::test]
    async fn test_fetch_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("results.json"), "[]").unwrap();

        let source = AssetSource::Directory(dir.path().to_path_buf());
        assert_eq!(source.fetch("results.json").await.unwrap(), "[]");
        assert!(load_results(&source).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = AssetSource::Directory(dir.path().to_path_buf());

        let err = load_dataset(&source).await.unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
