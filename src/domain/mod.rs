//! Domain models for openassets
//!
//! This module contains pure domain objects for the asset catalog: the
//! taxonomy enums, the per-file asset record and the aggregated snapshot tree.

pub mod asset;
pub mod catalog;

pub use asset::{AssetLocation, AssetRecord, AssetType, Category, ExtensionValue};
pub use catalog::{AppData, AssetEntry, CatalogStats, CategoryGroup, StaticPathEntry};
