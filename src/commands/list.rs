//! List command implementation
//!
//! This command lists every industry and product with its asset counts per
//! asset type, followed by catalog totals.

use console::Style;

use crate::commands::helpers::Library;
use crate::domain::{AppData, AssetType, Category, CategoryGroup};
use crate::error::Result;
use crate::search::to_sentence_case;

/// Run list command
pub fn run(root: Option<std::path::PathBuf>) -> Result<()> {
    let library = Library::open(root)?;
    let data = library.catalog()?;
    list_catalog(&data);
    Ok(())
}

fn list_catalog(data: &AppData) {
    if data.industries.is_empty() && data.products.is_empty() {
        println!("No assets found.");
        return;
    }

    for category in Category::ALL {
        let groups = data.categories(category);
        if groups.is_empty() {
            continue;
        }
        println!(
            "{} ({}):",
            to_sentence_case(category.as_str()),
            groups.len()
        );
        for (name, group) in groups {
            display_group(name, group);
        }
        println!();
    }

    let stats = data.stats();
    println!(
        "{} {} industries, {} products, {} assets",
        Style::new().bold().apply_to("Total:"),
        stats.industries,
        stats.products,
        stats.assets
    );
}

fn display_group(name: &str, group: &CategoryGroup) {
    let counts: Vec<String> = AssetType::ALL
        .into_iter()
        .filter(|t| !group.assets(*t).is_empty())
        .map(|t| format!("{} {}", group.assets(t).len(), t))
        .collect();
    let counts = if counts.is_empty() {
        "no assets".to_string()
    } else {
        counts.join(", ")
    };

    print!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(name),
        Style::new().dim().apply_to(counts)
    );
    if let Some(icon) = &group.icon {
        print!("  {} {}", Style::new().bold().apply_to("icon:"), icon);
    }
    println!();
}
