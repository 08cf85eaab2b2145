//! Download command implementation
//!
//! Looks the asset up in the catalog of the chosen source and saves its
//! pre-built archive. The source is `--from`, then `download.base_url`, then
//! the local snapshot directory.

use console::Style;

use crate::cli::DownloadArgs;
use crate::commands::helpers::Library;
use crate::download;
use crate::error::{Result, asset_not_found};
use crate::search::to_sentence_case;
use crate::snapshot::SnapshotSource;

/// Run download command
pub fn run(root: Option<std::path::PathBuf>, args: DownloadArgs) -> Result<()> {
    let library = Library::open(root)?;
    let source = match args.from.as_deref().or(library.config.download.base_url.as_deref()) {
        Some(from) => SnapshotSource::parse(from),
        None => SnapshotSource::Local(library.snapshot_dir(None)),
    };
    tracing::info!("Downloading from {}", source);

    let data = source.load_app_data()?;
    let location = args.asset.location();
    let record = data
        .find(&location)
        .ok_or_else(|| asset_not_found(location.to_string()))?;

    let display_name = args
        .name
        .unwrap_or_else(|| to_sentence_case(&location.title()));
    let dest = match args.dest {
        Some(dest) => dest,
        None => std::env::current_dir()?,
    };

    let fetcher = source.archive_fetcher();
    let path = download::download_asset(fetcher.as_ref(), record, &display_name, &dest)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Downloaded"),
        path.display()
    );
    Ok(())
}
