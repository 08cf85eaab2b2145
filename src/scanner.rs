//! Directory scanning for the asset taxonomy
//!
//! The library is laid out as
//! `<root>/{industries,products}/<name>/{actions,topics,agents}/*.json`
//! with an optional `<root>/{industries,products}/<name>/config.json`.
//!
//! The taxonomy is sparse: missing directories scan as empty and malformed
//! files are logged and skipped so one bad file never hides its siblings.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use crate::domain::{AssetRecord, AssetType, Category};
use crate::error::{OpenAssetsError, Result, file_read_failed};

/// Per-category settings file
pub const CATEGORY_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize)]
struct CategoryConfig {
    #[serde(default)]
    icon: Option<String>,
}

/// Immediate children of `dir`, sorted by name
fn read_children(dir: &Path) -> Vec<walkdir::DirEntry> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Error reading directory {}: {}", dir.display(), e);
                None
            }
        })
        .collect()
}

/// Names of the industries or products present under the library root
pub fn category_names(root: &Path, category: Category) -> Vec<String> {
    read_children(&root.join(category.as_str()))
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect()
}

fn is_json_file(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Drop modelled fields whose JSON type does not match the record
///
/// A mistyped optional field reads as absent; non-string items are removed
/// from list fields.
fn drop_mistyped_fields(object: &mut serde_json::Map<String, Value>, origin: &str) {
    for key in AssetRecord::TEXT_KEYS {
        if object.get(key).is_some_and(|v| !v.is_string() && !v.is_null()) {
            tracing::warn!("Ignoring {} in {}: expected a string", key, origin);
            object.remove(key);
        }
    }

    for key in AssetRecord::LIST_KEYS {
        let Some(value) = object.get_mut(key) else {
            continue;
        };
        if let Value::Array(items) = value {
            let before = items.len();
            items.retain(Value::is_string);
            if items.len() != before {
                tracing::warn!(
                    "Ignoring {} non-string {} entries in {}",
                    before - items.len(),
                    key,
                    origin
                );
            }
        } else if !value.is_null() {
            tracing::warn!("Ignoring {} in {}: expected a list of strings", key, origin);
            object.remove(key);
        }
    }
}

/// Parse one asset file
///
/// Location keys present in the file are dropped; the aggregator owns them.
/// `origin` names the file in warnings about ignored fields.
pub fn parse_record(content: &str, origin: &str) -> serde_json::Result<AssetRecord> {
    let mut value: Value = serde_json::from_str(content)?;
    let Some(object) = value.as_object_mut() else {
        return Err(serde::de::Error::custom(
            "asset file must contain a JSON object",
        ));
    };
    for key in AssetRecord::LOCATION_KEYS {
        object.remove(key);
    }
    drop_mistyped_fields(object, origin);
    serde_json::from_value(value)
}

fn read_record(path: &Path) -> Result<AssetRecord> {
    let origin = path.display().to_string();
    let content =
        fs::read_to_string(path).map_err(|e| file_read_failed(origin.clone(), e.to_string()))?;
    parse_record(&content, &origin).map_err(|e| file_read_failed(origin, e.to_string()))
}

/// Read every `*.json` file directly inside one asset-type directory
///
/// Keys are the JSON file names as found on disk.
pub fn read_assets(
    root: &Path,
    category: Category,
    category_name: &str,
    asset_type: AssetType,
) -> BTreeMap<String, AssetRecord> {
    let dir = root
        .join(category.as_str())
        .join(category_name)
        .join(asset_type.as_str());

    let mut assets = BTreeMap::new();
    for entry in read_children(&dir).into_iter().filter(is_json_file) {
        let Some(file_name) = entry.file_name().to_str() else {
            tracing::warn!("Skipping non UTF-8 file name in {}", dir.display());
            continue;
        };

        match read_record(entry.path()) {
            Ok(record) => {
                tracing::debug!("Read asset {}", entry.path().display());
                assets.insert(file_name.to_string(), record);
            }
            Err(OpenAssetsError::FileReadFailed { path, reason }) => {
                tracing::warn!("Error reading file {}: {}", path, reason);
            }
            Err(e) => tracing::warn!("Error reading file {}: {}", file_name, e),
        }
    }
    assets
}

/// Icon reference from `<category>/<name>/config.json`, if readable
pub fn read_icon(root: &Path, category: Category, category_name: &str) -> Option<String> {
    let path = root
        .join(category.as_str())
        .join(category_name)
        .join(CATEGORY_CONFIG_FILE);
    if !path.is_file() {
        return None;
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<CategoryConfig>(&raw).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config.icon,
        Err(reason) => {
            tracing::debug!("Ignoring {}: {}", path.display(), reason);
            None
        }
    }
}
