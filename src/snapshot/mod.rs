//! Build-time snapshot artifacts and their runtime loader
//!
//! - [`writer`]: serializes `AppData` and the static path list
//! - [`loader`]: reads them back from disk or over HTTP

pub mod loader;
pub mod writer;

pub use loader::SnapshotSource;
pub use writer::{SnapshotSummary, static_paths, write_snapshot};

/// Aggregate snapshot file name
pub const DATA_FILE: &str = "data.json";

/// Static path list file name
pub const STATIC_PATHS_FILE: &str = "staticPaths.json";

/// Archive directory name inside the snapshot directory
pub const ASSETS_DIR: &str = "assets";

/// URL prefix the site serves the snapshot directory under
pub const GENERATED_URL_PREFIX: &str = "generated";
