//! Library configuration (`openassets.yaml`)
//!
//! Optional file at the library root. Every key has a default, unknown keys
//! are ignored and command line flags override file values.
//!
//! ```yaml
//! output_dir: public/generated
//! bundle:
//!   rewrite_paths: true
//! server:
//!   addr: 127.0.0.1:3000
//! download:
//!   base_url: http://127.0.0.1:3000
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid, config_parse_failed};
use crate::snapshot::ASSETS_DIR;

/// Configuration file name at the library root
pub const CONFIG_FILE: &str = "openassets.yaml";

const DEFAULT_OUTPUT_DIR: &str = "public/generated";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Snapshot directory, relative to the library root unless absolute
    pub output_dir: PathBuf,

    pub bundle: BundleSection,

    pub server: ServerSection,

    pub download: DownloadSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleSection {
    pub rewrite_paths: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub addr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DownloadSection {
    /// Site to download from; the local snapshot is used when unset
    pub base_url: Option<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            bundle: BundleSection::default(),
            server: ServerSection::default(),
            download: DownloadSection::default(),
        }
    }
}

impl Default for BundleSection {
    fn default() -> Self {
        Self {
            rewrite_paths: true,
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl LibraryConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `openassets.yaml` from the library root, or defaults when absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&raw).map_err(|e| match e {
            crate::error::OpenAssetsError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(config_invalid("output_dir cannot be empty"));
        }
        self.server_addr()?;
        if let Some(url) = &self.download.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(config_invalid(format!(
                    "download.base_url must be an http(s) URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }

    pub fn server_addr(&self) -> Result<SocketAddr> {
        self.server
            .addr
            .parse()
            .map_err(|e| config_invalid(format!("server.addr '{}': {}", self.server.addr, e)))
    }

    /// Snapshot directory resolved against the library root
    pub fn snapshot_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    /// Archive directory inside the snapshot directory
    pub fn archive_dir(&self, root: &Path) -> PathBuf {
        self.snapshot_dir(root).join(ASSETS_DIR)
    }
}
