//! Bundle builder
//!
//! Packages each asset's source file (or directory), its dependencies and a
//! generated readme into `<category>_<categoryName>_<assetType>_<fileName>.zip`.
//!
//! Sources and dependencies are resolved against the library root. Paths that
//! do not exist are skipped, so an asset whose files are all missing still gets
//! a readme-only archive. Files that exist but cannot be read are logged and
//! left out of their archive. Archives are built one at a time; a failure is logged
//! and the remaining assets are still processed.

pub mod paths;
pub mod readme;

use std::collections::BTreeMap;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::{AppData, AssetLocation, AssetRecord};
use crate::error::{Result, archive_build_failed, file_write_failed};
use crate::progress::ProgressDisplay;

/// Options controlling archive layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleOptions {
    /// Move `industries|products/<name>/main` to `force-app/main`
    pub rewrite_paths: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            rewrite_paths: true,
        }
    }
}

/// Outcome of a full bundle run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleReport {
    /// Archives written
    pub built: usize,
    /// Assets whose archive could not be built or written
    pub failed: usize,
    /// Assets with neither a source file nor dependencies
    pub skipped: usize,
}

/// Content of one archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    File(PathBuf),
    Generated(String),
}

/// Whether an asset gets an archive at all
///
/// Only declarations are checked here, not whether the files exist.
pub fn qualifies(record: &AssetRecord) -> bool {
    record.source_file().is_some() || !record.dependencies().is_empty()
}

/// Builds asset archives from a library checkout
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    root: PathBuf,
    out_dir: PathBuf,
    options: BundleOptions,
}

impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, options: BundleOptions) -> Self {
        Self {
            root: root.into(),
            out_dir: out_dir.into(),
            options,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn insert(&self, dest: String, source: EntrySource, entries: &mut BTreeMap<String, EntrySource>) {
        let dest = if self.options.rewrite_paths {
            paths::rewrite_path(&dest)
        } else {
            dest
        };
        entries.insert(dest, source);
    }

    /// Add a file, or every file below a directory, keeping relative paths
    fn add_path(&self, rel: &str, entries: &mut BTreeMap<String, EntrySource>) {
        let Some(normalized) = paths::normalize(rel) else {
            tracing::warn!("Skipping path outside the library: {}", rel);
            return;
        };
        let full = self.root.join(&normalized);

        if full.is_dir() {
            let files = WalkDir::new(&full)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file());
            for entry in files {
                let Ok(relative) = entry.path().strip_prefix(&full) else {
                    continue;
                };
                let relative = relative.to_string_lossy().replace('\\', "/");
                self.insert(
                    format!("{normalized}/{relative}"),
                    EntrySource::File(entry.path().to_path_buf()),
                    entries,
                );
            }
        } else if full.is_file() {
            self.insert(normalized, EntrySource::File(full), entries);
        } else {
            tracing::debug!("Skipping missing path {}", full.display());
        }
    }

    /// Entries of one asset's archive, keyed by archive path
    ///
    /// Later entries replace earlier ones with the same path; the readme is
    /// always the generated one.
    pub fn archive_entries(
        &self,
        file_name: &str,
        record: &AssetRecord,
    ) -> BTreeMap<String, EntrySource> {
        let mut entries = BTreeMap::new();

        if let Some(source) = record.source_file() {
            self.add_path(source, &mut entries);
        }
        for dependency in record.dependencies() {
            self.add_path(dependency, &mut entries);
        }

        entries.insert(
            readme::README_FILE.to_string(),
            EntrySource::Generated(readme::render(file_name, record)),
        );
        entries
    }

    /// Build the archive for one asset in memory
    pub fn build_archive(&self, location: &AssetLocation, record: &AssetRecord) -> Result<Vec<u8>> {
        let name = location.archive_name();
        let fail = |reason: String| archive_build_failed(name.clone(), reason);

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamp keeps rebuilt archives byte-identical
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        for (path, source) in self.archive_entries(&location.file_name, record) {
            let content = match source {
                EntrySource::File(file) => match fs::read(&file) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::warn!(
                            "Leaving {} out of {}: {}",
                            file.display(),
                            name,
                            e
                        );
                        continue;
                    }
                },
                EntrySource::Generated(content) => content.into_bytes(),
            };
            zip.start_file(path.as_str(), options)
                .map_err(|e| fail(e.to_string()))?;
            zip.write_all(&content)
                .map_err(|e| fail(format!("{}: {}", path, e)))?;
        }

        let cursor = zip.finish().map_err(|e| fail(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// Build and write one asset's archive, returning its path
    pub fn write_archive(&self, location: &AssetLocation, record: &AssetRecord) -> Result<PathBuf> {
        let bytes = self.build_archive(location, record)?;
        let path = self.out_dir.join(location.archive_name());
        fs::write(&path, bytes)
            .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))?;
        Ok(path)
    }

    /// Build archives for every qualifying asset, sequentially
    pub fn build_all(&self, data: &AppData) -> Result<BundleReport> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| file_write_failed(self.out_dir.display().to_string(), e.to_string()))?;

        let qualifying: Vec<_> = data.entries().filter(|e| qualifies(e.record)).collect();
        let mut report = BundleReport {
            skipped: data.asset_count() - qualifying.len(),
            ..BundleReport::default()
        };

        let progress = ProgressDisplay::new(u64::try_from(qualifying.len()).unwrap_or(u64::MAX));
        for entry in qualifying {
            let location = entry.location();
            progress.update(&location.archive_name());

            match self.write_archive(&location, entry.record) {
                Ok(path) => {
                    tracing::info!("Created asset bundle for {} at {}", location, path.display());
                    report.built += 1;
                }
                Err(e) => {
                    tracing::error!("Error creating zip for {}: {}", location.file_name, e);
                    report.failed += 1;
                }
            }
            progress.inc();
        }
        progress.finish();

        Ok(report)
    }
}
