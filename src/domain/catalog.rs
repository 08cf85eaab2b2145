//! Aggregated catalog types
//!
//! `AppData` is the in-memory tree written to `data.json`:
//! category type -> category name -> asset type -> JSON file name -> record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::asset::{AssetLocation, AssetRecord, AssetType, Category};

/// Assets of one industry or product, keyed by JSON file name per asset type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    #[serde(default)]
    pub actions: BTreeMap<String, AssetRecord>,

    #[serde(default)]
    pub topics: BTreeMap<String, AssetRecord>,

    #[serde(default)]
    pub agents: BTreeMap<String, AssetRecord>,

    /// Icon reference from the category's `config.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryGroup {
    pub fn assets(&self, asset_type: AssetType) -> &BTreeMap<String, AssetRecord> {
        match asset_type {
            AssetType::Actions => &self.actions,
            AssetType::Topics => &self.topics,
            AssetType::Agents => &self.agents,
        }
    }

    pub fn assets_mut(&mut self, asset_type: AssetType) -> &mut BTreeMap<String, AssetRecord> {
        match asset_type {
            AssetType::Actions => &mut self.actions,
            AssetType::Topics => &mut self.topics,
            AssetType::Agents => &mut self.agents,
        }
    }

    /// Total number of assets across all asset types
    pub fn len(&self) -> usize {
        self.actions.len() + self.topics.len() + self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub industries: BTreeMap<String, CategoryGroup>,

    #[serde(default)]
    pub products: BTreeMap<String, CategoryGroup>,
}

/// A record visited while walking `AppData`
#[derive(Debug, Clone, Copy)]
pub struct AssetEntry<'a> {
    pub category: Category,
    pub category_name: &'a str,
    pub asset_type: AssetType,
    /// Key in the asset-type map, including the `.json` extension
    pub json_name: &'a str,
    pub record: &'a AssetRecord,
}

impl AssetEntry<'_> {
    /// File name without the `.json` extension
    pub fn file_name(&self) -> &str {
        strip_json_extension(self.json_name)
    }

    /// Location derived from the entry's position in the tree
    pub fn location(&self) -> AssetLocation {
        AssetLocation::new(
            self.category,
            self.category_name,
            self.asset_type,
            self.file_name(),
        )
    }
}

/// Strip a trailing lowercase `.json` from a directory entry name
///
/// Other spellings such as `.JSON` are kept, so `greeter.json` and
/// `greeter.JSON` stay distinct file names within one directory.
pub fn strip_json_extension(name: &str) -> &str {
    name.strip_suffix(".json").unwrap_or(name)
}

impl AppData {
    pub fn categories(&self, category: Category) -> &BTreeMap<String, CategoryGroup> {
        match category {
            Category::Industries => &self.industries,
            Category::Products => &self.products,
        }
    }

    pub fn categories_mut(&mut self, category: Category) -> &mut BTreeMap<String, CategoryGroup> {
        match category {
            Category::Industries => &mut self.industries,
            Category::Products => &mut self.products,
        }
    }

    /// Walk every record: industries then products, actions/topics/agents,
    /// file names in map order
    pub fn entries(&self) -> impl Iterator<Item = AssetEntry<'_>> {
        Category::ALL.into_iter().flat_map(move |category| {
            self.categories(category)
                .iter()
                .flat_map(move |(category_name, group)| {
                    AssetType::ALL.into_iter().flat_map(move |asset_type| {
                        group
                            .assets(asset_type)
                            .iter()
                            .map(move |(json_name, record)| AssetEntry {
                                category,
                                category_name,
                                asset_type,
                                json_name,
                                record,
                            })
                    })
                })
        })
    }

    /// Find a record by its location
    pub fn find(&self, location: &AssetLocation) -> Option<&AssetRecord> {
        let group = self
            .categories(location.category)
            .get(&location.category_name)?;
        group
            .assets(location.asset_type)
            .iter()
            .find(|(json_name, _)| strip_json_extension(json_name) == location.file_name)
            .map(|(_, record)| record)
    }

    /// Number of records reachable from the snapshot
    pub fn asset_count(&self) -> usize {
        self.industries
            .values()
            .chain(self.products.values())
            .map(CategoryGroup::len)
            .sum()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            industries: self.industries.len(),
            products: self.products.len(),
            assets: self.asset_count(),
        }
    }
}

/// Headline counts shown on the catalog home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub industries: usize,
    pub products: usize,
    pub assets: usize,
}

/// One page to generate per asset, serialized as `{"params": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPathEntry {
    pub params: AssetLocation,
}

impl From<AssetLocation> for StaticPathEntry {
    fn from(params: AssetLocation) -> Self {
        Self { params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        AssetRecord {
            description: Some("test".to_string()),
            ..AssetRecord::default()
        }
    }

    fn sample() -> AppData {
        let mut data = AppData::default();
        let mut retail = CategoryGroup::default();
        retail.agents.insert("greeter.json".to_string(), record());
        retail.actions.insert("refund.json".to_string(), record());
        data.industries.insert("retail".to_string(), retail);

        let mut commerce = CategoryGroup::default();
        commerce.agents.insert("greeter.json".to_string(), record());
        commerce.icon = Some("/icons/commerce.svg".to_string());
        data.products.insert("commerce".to_string(), commerce);
        data
    }

    #[test]
    fn test_entries_follow_traversal_order() {
        let data = sample();
        let order: Vec<String> = data.entries().map(|e| e.location().to_string()).collect();
        assert_eq!(
            order,
            vec![
                "industries/retail/actions/refund",
                "industries/retail/agents/greeter",
                "products/commerce/agents/greeter",
            ]
        );
    }

    #[test]
    fn test_find_disambiguates_by_category() {
        let data = sample();
        let retail = AssetLocation::new(
            Category::Industries,
            "retail",
            AssetType::Agents,
            "greeter",
        );
        let commerce = AssetLocation::new(
            Category::Products,
            "commerce",
            AssetType::Agents,
            "greeter",
        );
        assert!(data.find(&retail).is_some());
        assert!(data.find(&commerce).is_some());
        assert!(
            data.find(&AssetLocation::new(
                Category::Products,
                "commerce",
                AssetType::Actions,
                "greeter",
            ))
            .is_none()
        );
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(
            stats,
            CatalogStats {
                industries: 1,
                products: 1,
                assets: 3
            }
        );
    }

    #[test]
    fn test_strip_json_extension() {
        assert_eq!(strip_json_extension("schedule_visit.json"), "schedule_visit");
        assert_eq!(strip_json_extension("LEGACY.JSON"), "LEGACY.JSON");
        assert_eq!(strip_json_extension("Mixed.Json"), "Mixed.Json");
        assert_eq!(strip_json_extension("a.json.json"), "a.json");
        assert_eq!(strip_json_extension("json"), "json");
        assert_eq!(strip_json_extension("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_icon_omitted_when_absent() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["industries"]["retail"].get("icon").is_none());
        assert_eq!(value["products"]["commerce"]["icon"], "/icons/commerce.svg");
        assert!(value["industries"]["retail"]["topics"].is_object());
    }

    #[test]
    fn test_static_path_entry_shape() {
        let entry = StaticPathEntry::from(AssetLocation::new(
            Category::Industries,
            "healthcare",
            AssetType::Actions,
            "schedule_visit",
        ));
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value["params"]["fileName"], "schedule_visit");
    }
}
