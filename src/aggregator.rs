//! Aggregation of scanned assets into the `AppData` tree
//!
//! Every record is stamped with the category, category name, asset type and
//! file name it was read from, so search results and pages can rebuild their
//! URLs from the record alone.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::catalog::strip_json_extension;
use crate::domain::{AppData, AssetLocation, AssetRecord, AssetType, Category, CategoryGroup};
use crate::scanner;

fn stamp(
    mut assets: BTreeMap<String, AssetRecord>,
    category: Category,
    category_name: &str,
    asset_type: AssetType,
) -> BTreeMap<String, AssetRecord> {
    for (json_name, record) in &mut assets {
        let location = AssetLocation::new(
            category,
            category_name,
            asset_type,
            strip_json_extension(json_name),
        );
        record.set_location(&location);
    }
    assets
}

/// Build one `CategoryGroup` from `<root>/<category>/<name>/`
pub fn category_group(root: &Path, category: Category, category_name: &str) -> CategoryGroup {
    let mut group = CategoryGroup {
        icon: scanner::read_icon(root, category, category_name),
        ..CategoryGroup::default()
    };

    for asset_type in AssetType::ALL {
        let assets = scanner::read_assets(root, category, category_name, asset_type);
        *group.assets_mut(asset_type) = stamp(assets, category, category_name, asset_type);
    }

    group
}

/// All industries or all products under the library root
pub fn category_data(root: &Path, category: Category) -> BTreeMap<String, CategoryGroup> {
    scanner::category_names(root, category)
        .into_iter()
        .map(|name| {
            let group = category_group(root, category, &name);
            (name, group)
        })
        .collect()
}

/// Scan the whole library
pub fn app_data(root: &Path) -> AppData {
    let mut data = AppData::default();
    for category in Category::ALL {
        *data.categories_mut(category) = category_data(root, category);
    }

    tracing::info!(
        "Scanned {} industries and {} products ({} assets)",
        data.industries.len(),
        data.products.len(),
        data.asset_count()
    );
    data
}
