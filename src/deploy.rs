//! Salesforce CLI deploy command for an asset
//!
//! Actions deploy as `GenAiFunction`, topics as `GenAiPlugin`. Each dependency
//! named `<name>.<type>-meta.xml` adds a `<Type>: <name>` metadata entry;
//! other dependencies are left out.
//!
//! The whole `.<type>-meta.xml` suffix is removed for every metadata type, not
//! only flows: `ScheduleVisit.cls-meta.xml` yields `Cls: ScheduleVisit`, never
//! `Cls: ScheduleVisit.cls-meta`.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{AssetRecord, AssetType};

const DEPLOY_START: &str = "sf project deploy start";

#[allow(clippy::expect_used)]
static META_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+)\.(?P<kind>[^.\-]+)-meta\.xml$").expect("valid metadata regex")
});

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Metadata `(type, name)` inferred from a dependency path
pub fn metadata_member(dependency: &str) -> Option<(String, String)> {
    let file = dependency.rsplit(['/', '\\']).next()?;
    let caps = META_FILE.captures(file)?;
    Some((capitalize_word(&caps["kind"]), caps["name"].to_string()))
}

/// Build the deploy command for `file_name` (without `.json`)
pub fn deploy_command(record: &AssetRecord, file_name: &str, asset_type: AssetType) -> String {
    let mut command = DEPLOY_START.to_string();

    match asset_type {
        AssetType::Actions => command.push_str(&format!("\n -m 'GenAiFunction: {file_name}'")),
        AssetType::Topics => command.push_str(&format!("\n -m 'GenAiPlugin: {file_name}'")),
        AssetType::Agents => {}
    }

    for (kind, name) in record.dependencies().iter().filter_map(|d| metadata_member(d)) {
        command.push_str(&format!("\n -m '{kind}: {name}'"));
    }

    command
}
