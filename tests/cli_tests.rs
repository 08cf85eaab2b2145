//! CLI surface tests: list, version, completions, root resolution and config errors

mod common;

use common::{TestLibrary, openassets_cmd};
use predicates::prelude::*;

#[test]
fn test_help() {
    openassets_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_version_command() {
    openassets_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "openassets {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_completions_command() {
    openassets_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openassets"));
}

#[test]
fn test_list_shows_categories_and_totals() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Industries (2):"))
        .stdout(predicate::str::contains("healthcare"))
        .stdout(predicate::str::contains("1 actions"))
        .stdout(predicate::str::contains("icon: heart"))
        .stdout(predicate::str::contains("Products (1):"))
        .stdout(predicate::str::contains(
            "Total: 2 industries, 1 products, 3 assets",
        ));
}

#[test]
fn test_list_empty_library() {
    let library = TestLibrary::new();

    openassets_cmd()
        .current_dir(&library.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets found."));
}

#[test]
fn test_root_from_environment() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .env("OPENASSETS_ROOT", &library.path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 assets"));
}

#[test]
fn test_missing_root_fails() {
    let library = TestLibrary::new();

    openassets_cmd()
        .arg("--root")
        .arg(library.path.join("does-not-exist"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Library root not found"));
}

#[test]
fn test_invalid_config_fails() {
    let library = TestLibrary::with_sample_assets();
    library.write_file("openassets.yaml", "bundle: [unclosed");

    openassets_cmd()
        .current_dir(&library.path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_serve_rejects_bad_address() {
    let library = TestLibrary::new();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["serve", "--addr", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
