//! Download orchestrator
//!
//! Fetches the pre-built archive of one asset and saves it under a
//! filesystem-safe name derived from the asset's display name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AssetRecord;
use crate::error::{
    Result, asset_location_missing, file_not_found, file_read_failed, file_write_failed,
};
use crate::fetch;
use crate::snapshot::{ASSETS_DIR, GENERATED_URL_PREFIX};

/// Source of pre-built asset archives
pub trait ArchiveFetcher {
    /// Fetch the archive named `archive_name`
    fn fetch(&self, archive_name: &str) -> Result<Vec<u8>>;

    /// Human-readable origin for messages
    fn describe(&self, archive_name: &str) -> String;
}

/// Fetches archives from a deployed site under `/generated/assets/`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, archive_name: &str) -> Result<Vec<u8>> {
        fetch::get_bytes(&self.describe(archive_name))
    }

    fn describe(&self, archive_name: &str) -> String {
        fetch::join_url(
            &self.base_url,
            &format!("{GENERATED_URL_PREFIX}/{ASSETS_DIR}/{archive_name}"),
        )
    }
}

/// Reads archives straight from a local archive directory
#[derive(Debug, Clone)]
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArchiveFetcher for DirFetcher {
    fn fetch(&self, archive_name: &str) -> Result<Vec<u8>> {
        let path = self.dir.join(archive_name);
        if !path.is_file() {
            return Err(file_not_found(path.display().to_string()));
        }
        fs::read(&path).map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))
    }

    fn describe(&self, archive_name: &str) -> String {
        self.dir.join(archive_name).display().to_string()
    }
}

/// File name for a saved archive: non-alphanumerics become `_`, lower-cased
pub fn saved_file_name(display_name: &str) -> String {
    let sanitized: String = display_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{sanitized}_asset.zip")
}

/// Fetch `record`'s archive and save it into `dest_dir`
///
/// Fails before any fetch when the record lacks one of its four location
/// fields. Fetch failures are returned to the caller without retry.
pub fn download_asset(
    fetcher: &dyn ArchiveFetcher,
    record: &AssetRecord,
    display_name: &str,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let location = record
        .location()
        .ok_or_else(|| asset_location_missing(display_name))?;
    let archive_name = location.archive_name();

    tracing::info!("Fetching {}", fetcher.describe(&archive_name));
    let bytes = fetcher.fetch(&archive_name)?;

    fs::create_dir_all(dest_dir)
        .map_err(|e| file_write_failed(dest_dir.display().to_string(), e.to_string()))?;
    let path = dest_dir.join(saved_file_name(display_name));
    fs::write(&path, bytes)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))?;
    Ok(path)
}
