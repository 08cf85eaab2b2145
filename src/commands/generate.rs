//! Generate, snapshot and bundle commands
//!
//! `generate` runs the two build steps in order: the snapshot first, then one
//! archive per asset that has a source file or dependencies.

use std::path::Path;

use console::Style;

use crate::aggregator;
use crate::bundle::{BundleBuilder, BundleOptions, BundleReport};
use crate::cli::{GenerateArgs, SnapshotArgs};
use crate::commands::helpers::Library;
use crate::domain::AppData;
use crate::error::Result;
use crate::snapshot::{self, ASSETS_DIR, SnapshotSummary};

/// Run generate command
pub fn run(root: Option<std::path::PathBuf>, args: GenerateArgs) -> Result<()> {
    let library = Library::open(root)?;
    let out_dir = library.snapshot_dir(args.out.as_deref());
    let data = aggregator::app_data(&library.root);

    write_snapshot(&data, &out_dir)?;
    build_archives(&library, &data, &out_dir, args.no_rewrite)?;
    Ok(())
}

/// Run snapshot command
pub fn run_snapshot(root: Option<std::path::PathBuf>, args: SnapshotArgs) -> Result<()> {
    let library = Library::open(root)?;
    let out_dir = library.snapshot_dir(args.out.as_deref());
    let data = aggregator::app_data(&library.root);

    write_snapshot(&data, &out_dir)?;
    Ok(())
}

/// Run bundle command
pub fn run_bundle(root: Option<std::path::PathBuf>, args: GenerateArgs) -> Result<()> {
    let library = Library::open(root)?;
    let out_dir = library.snapshot_dir(args.out.as_deref());
    let data = aggregator::app_data(&library.root);

    build_archives(&library, &data, &out_dir, args.no_rewrite)?;
    Ok(())
}

fn write_snapshot(data: &AppData, out_dir: &Path) -> Result<SnapshotSummary> {
    let summary = snapshot::write_snapshot(data, out_dir)?;
    println!(
        "{} {} ({} industries, {} products, {} asset pages)",
        Style::new().green().bold().apply_to("Wrote snapshot to"),
        out_dir.display(),
        summary.industries,
        summary.products,
        summary.paths
    );
    Ok(summary)
}

fn build_archives(
    library: &Library,
    data: &AppData,
    out_dir: &Path,
    no_rewrite: bool,
) -> Result<BundleReport> {
    let options = BundleOptions {
        rewrite_paths: library.config.bundle.rewrite_paths && !no_rewrite,
    };
    let archive_dir = out_dir.join(ASSETS_DIR);
    let report = BundleBuilder::new(&library.root, &archive_dir, options).build_all(data)?;

    println!(
        "{} {} archives in {}",
        Style::new().green().bold().apply_to("Built"),
        report.built,
        archive_dir.display()
    );
    if report.skipped > 0 {
        println!(
            "  {} {} assets without source files or dependencies",
            Style::new().dim().apply_to("Skipped"),
            report.skipped
        );
    }
    if report.failed > 0 {
        println!(
            "  {} {} archives could not be built",
            Style::new().red().bold().apply_to("Failed:"),
            report.failed
        );
    }
    Ok(report)
}
