//! Show and download command tests

mod common;

use common::{TestLibrary, openassets_cmd, zip_entries};
use predicates::prelude::*;

#[test]
fn test_show_prints_details_and_deploy_command() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["show", "industries", "healthcare", "actions", "schedule_visit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule Visit"))
        .stdout(predicate::str::contains("Books a patient visit"))
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains(
            "industries_healthcare_actions_schedule_visit.zip",
        ))
        .stdout(predicate::str::contains(
            "sf project deploy start\n -m 'GenAiFunction: schedule_visit'\n -m 'Flow: Book_Visit'",
        ));
}

#[test]
fn test_show_agent_without_files() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["show", "products", "commerce", "agents", "greeter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No source file specified"))
        .stdout(predicate::str::contains("No dependencies"));
}

#[test]
fn test_show_unknown_asset_fails() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["show", "industries", "healthcare", "actions", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Asset 'industries/healthcare/actions/missing' not found",
        ));
}

#[test]
fn test_show_invalid_category_fails() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["show", "services", "healthcare", "actions", "schedule_visit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category type"));
}

#[test]
fn test_download_from_local_snapshot() {
    let library = TestLibrary::with_sample_assets();
    let dest = tempfile::TempDir::new().unwrap();

    openassets_cmd()
        .current_dir(&library.path)
        .arg("generate")
        .assert()
        .success();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["download", "industries", "healthcare", "actions", "schedule_visit"])
        .arg("--dest")
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded"));

    let saved = dest.path().join("schedule_visit_asset.zip");
    assert!(saved.is_file());
    let entries = zip_entries(&saved);
    assert!(entries.iter().any(|(n, _)| n == "README.md"));
}

#[test]
fn test_download_with_display_name_and_from_dir() {
    let library = TestLibrary::with_sample_assets();
    let dest = tempfile::TempDir::new().unwrap();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["generate", "--out", "dist"])
        .assert()
        .success();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["download", "industries", "retail", "topics", "store_hours"])
        .arg("--from")
        .arg(library.path.join("dist"))
        .args(["--name", "Store Hours (v2)"])
        .arg("--dest")
        .arg(dest.path())
        .assert()
        .success();

    assert!(dest.path().join("store_hours__v2__asset.zip").is_file());
}

#[test]
fn test_download_asset_without_archive_fails() {
    let library = TestLibrary::with_sample_assets();
    let dest = tempfile::TempDir::new().unwrap();

    openassets_cmd()
        .current_dir(&library.path)
        .arg("generate")
        .assert()
        .success();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["download", "products", "commerce", "agents", "greeter"])
        .arg("--dest")
        .arg(dest.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    assert!(!dest.path().join("greeter_asset.zip").exists());
}

#[test]
fn test_download_without_snapshot_fails() {
    let library = TestLibrary::with_sample_assets();

    openassets_cmd()
        .current_dir(&library.path)
        .args(["download", "industries", "healthcare", "actions", "schedule_visit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}
