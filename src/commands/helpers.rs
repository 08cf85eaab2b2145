//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::aggregator;
use crate::config::LibraryConfig;
use crate::domain::AppData;
use crate::error::{OpenAssetsError, Result};
use crate::snapshot::{DATA_FILE, SnapshotSource};

/// An opened library root with its configuration
#[derive(Debug, Clone)]
pub struct Library {
    pub root: PathBuf,
    pub config: LibraryConfig,
}

impl Library {
    /// Resolve the root (or the current directory) and load `openassets.yaml`
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = resolve_root_path(root)?;
        let config = LibraryConfig::load(&root)?;
        Ok(Self { root, config })
    }

    /// Snapshot directory, `--out` taking precedence over the config file
    pub fn snapshot_dir(&self, out: Option<&Path>) -> PathBuf {
        match out {
            Some(dir) => self.root.join(dir),
            None => self.config.snapshot_dir(&self.root),
        }
    }

    /// Catalog for read-only commands
    ///
    /// Reads the generated snapshot when there is one, otherwise scans the
    /// library directly.
    pub fn catalog(&self) -> Result<AppData> {
        let dir = self.config.snapshot_dir(&self.root);
        if dir.join(DATA_FILE).is_file() {
            tracing::debug!("Reading catalog from {}", dir.display());
            SnapshotSource::Local(dir).load_app_data()
        } else {
            tracing::info!("No snapshot in {}, scanning library", dir.display());
            Ok(aggregator::app_data(&self.root))
        }
    }
}

/// Resolve library root path from optional argument
///
/// If a root path is provided, use it. Otherwise, resolve to the current
/// directory. The result is canonical and must be an existing directory.
pub fn resolve_root_path(root: Option<PathBuf>) -> Result<PathBuf> {
    let path = match root {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| OpenAssetsError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    match dunce::canonicalize(&path) {
        Ok(canonical) if canonical.is_dir() => Ok(canonical),
        _ => Err(OpenAssetsError::LibraryRootNotFound {
            path: path.display().to_string(),
        }),
    }
}
