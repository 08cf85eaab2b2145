//! Show command implementation
//!
//! Prints the details of one asset and the Salesforce CLI command that
//! deploys it.

use console::Style;

use crate::cli::ShowArgs;
use crate::commands::helpers::Library;
use crate::deploy;
use crate::domain::{AssetLocation, AssetRecord};
use crate::error::{Result, asset_not_found};
use crate::search::to_sentence_case;

/// Run show command
pub fn run(root: Option<std::path::PathBuf>, args: ShowArgs) -> Result<()> {
    let library = Library::open(root)?;
    let data = library.catalog()?;

    let location = args.asset.location();
    let record = data
        .find(&location)
        .ok_or_else(|| asset_not_found(location.to_string()))?;

    show_asset(&location, record);
    Ok(())
}

fn show_asset(location: &AssetLocation, record: &AssetRecord) {
    let bold = Style::new().bold();

    println!(
        "{}",
        Style::new()
            .bold()
            .yellow()
            .apply_to(to_sentence_case(&location.title()))
    );
    println!("  {} {}", bold.apply_to("Location:"), location);
    if let Some(description) = &record.description {
        println!("  {} {}", bold.apply_to("Description:"), description);
    }
    println!(
        "  {} {}",
        bold.apply_to("Source file:"),
        record.source_file().unwrap_or("No source file specified")
    );
    if let Some(author) = &record.author {
        println!("  {} {}", bold.apply_to("Author:"), author);
    }
    if let Some(company) = &record.company {
        println!("  {} {}", bold.apply_to("Company:"), company);
    }
    if let Some(tags) = record.tags.as_ref().filter(|t| !t.is_empty()) {
        println!("  {} {}", bold.apply_to("Tags:"), tags.join(", "));
    }

    println!("  {}", bold.apply_to("Dependencies:"));
    if record.dependencies().is_empty() {
        println!("    No dependencies");
    }
    for dependency in record.dependencies() {
        println!("    - {dependency}");
    }

    println!("  {} {}", bold.apply_to("Archive:"), location.archive_name());
    println!("  {} {}", bold.apply_to("Page:"), location.url());
    println!();
    println!("{}", bold.apply_to("Deploy:"));
    println!(
        "{}",
        deploy::deploy_command(record, &location.file_name, location.asset_type)
    );
}
