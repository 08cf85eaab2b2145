//! Error types and handling for openassets
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`asset`]: Asset lookup and location errors
//! - [`snapshot`]: Snapshot read/write errors
//! - [`bundle`]: Archive build errors
//! - [`fetch`]: Network fetch errors
//! - [`config`]: Configuration errors
//! - [`server`]: HTTP server errors
//! - [`fs`]: File system errors

pub mod asset;
pub mod bundle;
pub mod config;
pub mod fetch;
pub mod fs;
pub mod server;
pub mod snapshot;

pub use asset::{location_missing as asset_location_missing, not_found as asset_not_found};
pub use bundle::build_failed as archive_build_failed;
pub use config::{invalid as config_invalid, parse_failed as config_parse_failed};
pub use fetch::{failed as fetch_failed, http_error};
pub use fs::{
    io_error, not_found as file_not_found, read_failed as file_read_failed,
    write_failed as file_write_failed,
};
pub use server::failed as server_failed;
pub use snapshot::{read_failed as snapshot_read_failed, write_failed as snapshot_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for openassets operations
#[derive(Error, Diagnostic, Debug)]
pub enum OpenAssetsError {
    // Library errors
    #[error("Library root not found: {path}")]
    #[diagnostic(
        code(openassets::library::not_found),
        help("Pass --root or set OPENASSETS_ROOT to the directory holding industries/ and products/")
    )]
    LibraryRootNotFound { path: String },

    // Asset errors
    #[error("Asset '{location}' not found")]
    #[diagnostic(
        code(openassets::asset::not_found),
        help("Run 'openassets search <term>' to find the asset path")
    )]
    AssetNotFound { location: String },

    #[error("Missing asset path information for '{name}'")]
    #[diagnostic(
        code(openassets::asset::location_missing),
        help("Assets need category, categoryName, assetType and fileName to locate their archive")
    )]
    AssetLocationMissing { name: String },

    #[error("Invalid category type: {value}")]
    #[diagnostic(
        code(openassets::asset::invalid_category),
        help("Valid category types: industries, products")
    )]
    InvalidCategory { value: String },

    #[error("Invalid asset type: {value}")]
    #[diagnostic(
        code(openassets::asset::invalid_asset_type),
        help("Valid asset types: actions, topics, agents")
    )]
    InvalidAssetType { value: String },

    // Snapshot errors
    #[error("Failed to read snapshot: {path}: {reason}")]
    #[diagnostic(
        code(openassets::snapshot::read_failed),
        help("Run 'openassets snapshot' to regenerate the snapshot")
    )]
    SnapshotReadFailed { path: String, reason: String },

    #[error("Failed to write snapshot: {path}: {reason}")]
    #[diagnostic(code(openassets::snapshot::write_failed))]
    SnapshotWriteFailed { path: String, reason: String },

    // Bundle errors
    #[error("Failed to build archive '{name}': {reason}")]
    #[diagnostic(code(openassets::bundle::build_failed))]
    ArchiveBuildFailed { name: String, reason: String },

    // Fetch errors
    #[error("Failed to fetch {url}: {status}")]
    #[diagnostic(
        code(openassets::fetch::failed),
        help("Check that the site is reachable and the asset bundle was generated")
    )]
    FetchFailed { url: String, status: String },

    #[error("HTTP error: {message}")]
    #[diagnostic(code(openassets::fetch::http_error))]
    HttpError { message: String },

    #[error("Server error: {message}")]
    #[diagnostic(code(openassets::server::failed))]
    ServerFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(openassets::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(openassets::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(openassets::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(openassets::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(openassets::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(openassets::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for OpenAssetsError {
    fn from(err: std::io::Error) -> Self {
        OpenAssetsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for OpenAssetsError {
    fn from(err: serde_yaml::Error) -> Self {
        OpenAssetsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for OpenAssetsError {
    fn from(err: reqwest::Error) -> Self {
        OpenAssetsError::HttpError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OpenAssetsError>;
