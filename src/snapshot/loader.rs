//! Client data loader
//!
//! Reads the snapshot either from a local generated directory or from a
//! deployed site under `<base>/generated/`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::{ASSETS_DIR, DATA_FILE, GENERATED_URL_PREFIX, STATIC_PATHS_FILE};
use crate::domain::{AppData, StaticPathEntry};
use crate::download::{ArchiveFetcher, DirFetcher, HttpFetcher};
use crate::error::{Result, snapshot_read_failed};
use crate::fetch;

/// Where a snapshot is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Generated directory holding `data.json` and `assets/`
    Local(PathBuf),
    /// Site base URL serving `/generated/...`
    Remote(String),
}

impl SnapshotSource {
    /// `http://` and `https://` values are remote, anything else is a directory
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SnapshotSource::Remote(value.to_string())
        } else {
            SnapshotSource::Local(PathBuf::from(value))
        }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        match self {
            SnapshotSource::Local(dir) => read_local(&dir.join(file)),
            SnapshotSource::Remote(base) => {
                let url = fetch::join_url(base, &format!("{GENERATED_URL_PREFIX}/{file}"));
                let bytes = fetch::get_bytes(&url)?;
                serde_json::from_slice(&bytes).map_err(|e| snapshot_read_failed(url, e.to_string()))
            }
        }
    }

    pub fn load_app_data(&self) -> Result<AppData> {
        self.read(DATA_FILE)
    }

    pub fn load_static_paths(&self) -> Result<Vec<StaticPathEntry>> {
        self.read(STATIC_PATHS_FILE)
    }

    /// Load the snapshot, falling back to an empty catalog on any failure
    pub fn load_app_data_or_default(&self) -> AppData {
        self.load_app_data().unwrap_or_else(|e| {
            tracing::warn!("Error loading static data from {}: {}", self, e);
            AppData::default()
        })
    }

    /// Fetcher for the archives that sit next to this snapshot
    pub fn archive_fetcher(&self) -> Box<dyn ArchiveFetcher> {
        match self {
            SnapshotSource::Local(dir) => Box::new(DirFetcher::new(dir.join(ASSETS_DIR))),
            SnapshotSource::Remote(base) => Box::new(HttpFetcher::new(base.clone())),
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSource::Local(dir) => write!(f, "{}", dir.display()),
            SnapshotSource::Remote(base) => f.write_str(base),
        }
    }
}

fn read_local<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| snapshot_read_failed(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|e| snapshot_read_failed(path.display().to_string(), e.to_string()))
}
