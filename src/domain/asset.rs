//! Asset domain types
//!
//! An asset is one JSON file under `<category>/<name>/<asset type>/`. The
//! record keeps the known metadata fields typed and carries everything else in
//! an explicit extension map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpenAssetsError;

/// Top-level grouping of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Industries,
    Products,
}

impl Category {
    /// Traversal order used by the snapshot, static paths and search
    pub const ALL: [Category; 2] = [Category::Industries, Category::Products];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Industries => "industries",
            Category::Products => "products",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = OpenAssetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "industries" => Ok(Category::Industries),
            "products" => Ok(Category::Products),
            _ => Err(OpenAssetsError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of asset inside a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Actions,
    Topics,
    Agents,
}

impl AssetType {
    /// Traversal order within a category
    pub const ALL: [AssetType; 3] = [AssetType::Actions, AssetType::Topics, AssetType::Agents];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Actions => "actions",
            AssetType::Topics => "topics",
            AssetType::Agents => "agents",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = OpenAssetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actions" => Ok(AssetType::Actions),
            "topics" => Ok(AssetType::Topics),
            "agents" => Ok(AssetType::Agents),
            _ => Err(OpenAssetsError::InvalidAssetType {
                value: s.to_string(),
            }),
        }
    }
}

/// Value of a metadata key the record does not model explicitly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

/// Where an asset lives in the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLocation {
    pub category: Category,
    pub category_name: String,
    pub asset_type: AssetType,
    /// JSON file name without the `.json` extension
    pub file_name: String,
}

impl AssetLocation {
    pub fn new(
        category: Category,
        category_name: impl Into<String>,
        asset_type: AssetType,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            category,
            category_name: category_name.into(),
            asset_type,
            file_name: file_name.into(),
        }
    }

    /// Archive file name, e.g. `industries_healthcare_actions_schedule_visit.zip`
    pub fn archive_name(&self) -> String {
        format!(
            "{}_{}_{}_{}.zip",
            self.category, self.category_name, self.asset_type, self.file_name
        )
    }

    /// Detail page URL with every segment percent-encoded on its own
    pub fn url(&self) -> String {
        format!(
            "/assets/{}/{}/{}/{}",
            urlencoding::encode(self.category.as_str()),
            urlencoding::encode(&self.category_name),
            urlencoding::encode(self.asset_type.as_str()),
            urlencoding::encode(&self.file_name)
        )
    }

    /// Human title derived from the file name
    pub fn title(&self) -> String {
        self.file_name.replace('_', " ")
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.category, self.category_name, self.asset_type, self.file_name
        )
    }
}

/// One asset JSON file plus the location fields stamped in by the aggregator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Metadata keys not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, ExtensionValue>,
}

impl AssetRecord {
    /// Keys the aggregator owns; values found in source files are discarded
    pub const LOCATION_KEYS: [&'static str; 4] = ["category", "categoryName", "assetType", "fileName"];

    /// Modelled keys holding a single string
    pub const TEXT_KEYS: [&'static str; 4] = ["sourceFile", "author", "company", "description"];

    /// Modelled keys holding a list of strings
    pub const LIST_KEYS: [&'static str; 2] = ["dependencies", "tags"];

    /// Dependencies in declaration order, empty when absent
    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    /// Non-empty `sourceFile`, if any
    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref().filter(|s| !s.is_empty())
    }

    /// Location of the record, present once all four location fields are set
    pub fn location(&self) -> Option<AssetLocation> {
        let category_name = self.category_name.as_deref().filter(|s| !s.is_empty())?;
        let file_name = self.file_name.as_deref().filter(|s| !s.is_empty())?;
        Some(AssetLocation::new(
            self.category?,
            category_name,
            self.asset_type?,
            file_name,
        ))
    }

    /// Stamp the record with its position in the tree
    pub fn set_location(&mut self, location: &AssetLocation) {
        self.category = Some(location.category);
        self.category_name = Some(location.category_name.clone());
        self.asset_type = Some(location.asset_type);
        self.file_name = Some(location.file_name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> AssetLocation {
        AssetLocation::new(
            Category::Industries,
            "healthcare",
            AssetType::Actions,
            "schedule_visit",
        )
    }

    #[test]
    fn test_archive_name() {
        assert_eq!(
            location().archive_name(),
            "industries_healthcare_actions_schedule_visit.zip"
        );
    }

    #[test]
    fn test_url_encodes_each_segment() {
        let loc = AssetLocation::new(
            Category::Products,
            "field service",
            AssetType::Agents,
            "greet/visitor",
        );
        assert_eq!(
            loc.url(),
            "/assets/products/field%20service/agents/greet%2Fvisitor"
        );
        assert_eq!(
            location().url(),
            "/assets/industries/healthcare/actions/schedule_visit"
        );
    }

    #[test]
    fn test_parse_taxonomy_names() {
        assert_eq!("products".parse::<Category>().ok(), Some(Category::Products));
        assert_eq!("topics".parse::<AssetType>().ok(), Some(AssetType::Topics));
        assert!(matches!(
            "services".parse::<Category>(),
            Err(OpenAssetsError::InvalidCategory { .. })
        ));
        assert!(matches!(
            "skills".parse::<AssetType>(),
            Err(OpenAssetsError::InvalidAssetType { .. })
        ));
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let json = r#"{
            "sourceFile": "industries/healthcare/main/classes/ScheduleVisit.cls",
            "dependencies": [],
            "license": "MIT",
            "platforms": ["web", "mobile"],
            "stars": 4
        }"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.source_file(),
            Some("industries/healthcare/main/classes/ScheduleVisit.cls")
        );
        assert!(record.dependencies().is_empty());
        assert_eq!(
            record.extra.get("license"),
            Some(&ExtensionValue::Text("MIT".to_string()))
        );
        assert_eq!(
            record.extra.get("platforms"),
            Some(&ExtensionValue::List(vec![
                "web".to_string(),
                "mobile".to_string()
            ]))
        );
        assert!(matches!(
            record.extra.get("stars"),
            Some(ExtensionValue::Other(_))
        ));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["license"], "MIT");
        assert_eq!(out["dependencies"], serde_json::json!([]));
        assert!(out.get("author").is_none());
    }

    #[test]
    fn test_location_requires_all_fields() {
        let mut record = AssetRecord::default();
        assert!(record.location().is_none());

        record.set_location(&location());
        assert_eq!(record.location(), Some(location()));

        record.file_name = Some(String::new());
        assert!(record.location().is_none());
    }

    #[test]
    fn test_location_serializes_camel_case() {
        let value = serde_json::to_value(location()).unwrap();
        assert_eq!(value["categoryName"], "healthcare");
        assert_eq!(value["assetType"], "actions");
        assert_eq!(value["fileName"], "schedule_visit");
        assert_eq!(value["category"], "industries");
    }
}
