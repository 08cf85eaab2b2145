//! Archive entry paths
//!
//! Asset metadata refers to files by repository-relative path. Inside an
//! archive those paths are normalized to forward slashes and, when enabled,
//! moved from the library's taxonomy layout to a deployable package layout.

use std::sync::LazyLock;

use regex::Regex;

/// Deployment root that replaces `<category>/<name>/` in archive paths
pub const DEPLOY_ROOT: &str = "force-app/main";

#[allow(clippy::expect_used)]
static TAXONOMY_MAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(industries|products)/[^/]+/main(.*)$").expect("valid taxonomy regex")
});

/// Rewrite `industries|products/<name>/main...` to `force-app/main...`
///
/// Paths that do not match are returned unchanged, so the rewrite is
/// idempotent.
pub fn rewrite_path(path: &str) -> String {
    match TAXONOMY_MAIN.captures(path) {
        Some(caps) => format!("{DEPLOY_ROOT}{}", caps.get(2).map_or("", |m| m.as_str())),
        None => path.to_string(),
    }
}

/// Normalize a repository-relative path for use inside an archive
///
/// Splits on both separators and drops empty and `.` segments. Returns `None`
/// for paths that are empty or step outside the repository.
pub fn normalize(path: &str) -> Option<String> {
    let mut parts = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => return None,
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_taxonomy_prefix() {
        assert_eq!(
            rewrite_path("industries/healthcare/main/classes/ScheduleVisit.cls"),
            "force-app/main/classes/ScheduleVisit.cls"
        );
        assert_eq!(
            rewrite_path("products/commerce/main/default/flows"),
            "force-app/main/default/flows"
        );
        assert_eq!(rewrite_path("products/commerce/main"), "force-app/main");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_path("industries/retail/main/lwc/cart/cart.js");
        assert_eq!(rewrite_path(&once), once);
        assert_eq!(rewrite_path("shared/utils/Helper.cls"), "shared/utils/Helper.cls");
        assert_eq!(
            rewrite_path("industries/retail/agents/greeter.json"),
            "industries/retail/agents/greeter.json"
        );
    }

    #[test]
    fn test_rewrite_requires_category_name_segment() {
        assert_eq!(rewrite_path("industries/main/x.cls"), "industries/main/x.cls");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("./industries\\retail//main/a.cls").as_deref(),
            Some("industries/retail/main/a.cls")
        );
        assert_eq!(normalize("../secrets.txt"), None);
        assert_eq!(normalize("a/../../b"), None);
        assert_eq!(normalize("./"), None);
        assert_eq!(normalize(""), None);
    }
}
