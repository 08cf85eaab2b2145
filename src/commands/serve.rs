//! Serve command implementation

use crate::cli::ServeArgs;
use crate::commands::helpers::Library;
use crate::config::LibraryConfig;
use crate::error::{Result, server_failed};
use crate::server::{self, AppState, DataMode};

/// Run serve command
///
/// Builds a multi-threaded tokio runtime for the lifetime of the server.
pub fn run(root: Option<std::path::PathBuf>, args: ServeArgs) -> Result<()> {
    let library = Library::open(root)?;

    let mut config: LibraryConfig = library.config.clone();
    if let Some(addr) = args.addr {
        config.server.addr = addr;
    }
    let addr = config.server_addr()?;

    let snapshot_dir = library.snapshot_dir(None);
    let state = if args.live {
        AppState::new(&library.root, snapshot_dir, DataMode::Live)
    } else {
        AppState::from_snapshot(&library.root, snapshot_dir)
    };

    let runtime = tokio::runtime::Runtime::new().map_err(|e| server_failed(e.to_string()))?;
    runtime.block_on(server::serve(addr, state))
}
