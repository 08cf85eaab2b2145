//! Command implementations for OpenAssets CLI

pub mod completions;
pub mod download;
pub mod generate;
pub mod helpers;
pub mod list;
pub mod search;
pub mod serve;
pub mod show;
pub mod version;
