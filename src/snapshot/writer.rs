//! Static snapshot writer
//!
//! Writes `data.json` (the full `AppData` tree) and `staticPaths.json` (one
//! entry per asset page). Prior snapshots are overwritten, never merged.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::{DATA_FILE, STATIC_PATHS_FILE};
use crate::domain::{AppData, StaticPathEntry};
use crate::error::{Result, snapshot_write_failed};

/// Counts reported after writing a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub industries: usize,
    pub products: usize,
    pub paths: usize,
}

/// One entry per record: industries then products, actions/topics/agents
pub fn static_paths(data: &AppData) -> Vec<StaticPathEntry> {
    data.entries()
        .map(|entry| StaticPathEntry::from(entry.location()))
        .collect()
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| snapshot_write_failed(path.display().to_string(), e.to_string()))?;
    fs::write(path, json)
        .map_err(|e| snapshot_write_failed(path.display().to_string(), e.to_string()))
}

/// Write both snapshot artifacts into `out_dir`, creating it if needed
pub fn write_snapshot(data: &AppData, out_dir: &Path) -> Result<SnapshotSummary> {
    fs::create_dir_all(out_dir)
        .map_err(|e| snapshot_write_failed(out_dir.display().to_string(), e.to_string()))?;

    let paths = static_paths(data);
    write_json(&out_dir.join(DATA_FILE), data)?;
    write_json(&out_dir.join(STATIC_PATHS_FILE), &paths)?;

    let summary = SnapshotSummary {
        industries: data.industries.len(),
        products: data.products.len(),
        paths: paths.len(),
    };
    tracing::info!(
        "Wrote snapshot to {} ({} static paths)",
        out_dir.display(),
        summary.paths
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetLocation, AssetRecord, AssetType, Category, CategoryGroup};
    use tempfile::TempDir;

    fn sample() -> AppData {
        let mut data = AppData::default();
        for (category, name, asset_type, file) in [
            (Category::Products, "commerce", AssetType::Agents, "greeter"),
            (Category::Industries, "retail", AssetType::Agents, "greeter"),
            (Category::Industries, "retail", AssetType::Topics, "returns"),
            (Category::Industries, "healthcare", AssetType::Actions, "schedule_visit"),
        ] {
            let mut record = AssetRecord::default();
            record.set_location(&AssetLocation::new(category, name, asset_type, file));
            data.categories_mut(category)
                .entry(name.to_string())
                .or_insert_with(CategoryGroup::default)
                .assets_mut(asset_type)
                .insert(format!("{file}.json"), record);
        }
        data
    }

    #[test]
    fn test_static_paths_order_and_count() {
        let data = sample();
        let paths = static_paths(&data);
        assert_eq!(paths.len(), data.asset_count());

        let order: Vec<String> = paths.iter().map(|p| p.params.to_string()).collect();
        assert_eq!(
            order,
            vec![
                "industries/healthcare/actions/schedule_visit",
                "industries/retail/topics/returns",
                "industries/retail/agents/greeter",
                "products/commerce/agents/greeter",
            ]
        );
    }

    #[test]
    fn test_write_snapshot_creates_dir_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("public/generated");

        let summary = write_snapshot(&sample(), &out).unwrap();
        assert_eq!(
            summary,
            SnapshotSummary {
                industries: 2,
                products: 1,
                paths: 4
            }
        );

        write_snapshot(&AppData::default(), &out).unwrap();
        let data: AppData =
            serde_json::from_str(&fs::read_to_string(out.join(DATA_FILE)).unwrap()).unwrap();
        assert_eq!(data, AppData::default());
        let paths: Vec<StaticPathEntry> =
            serde_json::from_str(&fs::read_to_string(out.join(STATIC_PATHS_FILE)).unwrap())
                .unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_snapshot_round_trips_records() {
        let temp = TempDir::new().unwrap();
        let data = sample();
        write_snapshot(&data, temp.path()).unwrap();
        let raw = fs::read_to_string(temp.path().join(DATA_FILE)).unwrap();
        assert!(raw.contains("\n  \"industries\": {"));
        let loaded: AppData = serde_json::from_str(&raw).unwrap();
        assert_eq!(loaded, data);
    }
}
