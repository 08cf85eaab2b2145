//! Common test utilities for OpenAssets integration tests

use std::io::Read;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A test asset library for integration tests
#[allow(dead_code)]
pub struct TestLibrary {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to library root
    pub path: PathBuf,
}

impl TestLibrary {
    /// Create a new, empty test library
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Library with one healthcare action backed by a class and a flow,
    /// one retail topic and one commerce agent without files
    #[allow(dead_code)]
    pub fn with_sample_assets() -> Self {
        let library = Self::new();
        library.write_file(
            "industries/healthcare/actions/schedule_visit.json",
            r#"{
  "sourceFile": "industries/healthcare/main/classes/ScheduleVisit.cls",
  "author": "Jane Doe",
  "description": "Books a patient visit",
  "dependencies": ["industries/healthcare/main/flows/Book_Visit.flow-meta.xml"]
}"#,
        );
        library.write_file(
            "industries/healthcare/main/classes/ScheduleVisit.cls",
            "public class ScheduleVisit {}\n",
        );
        library.write_file(
            "industries/healthcare/main/flows/Book_Visit.flow-meta.xml",
            "<Flow/>\n",
        );
        library.write_file("industries/healthcare/config.json", r#"{"icon": "heart"}"#);
        library.write_file(
            "industries/retail/topics/store_hours.json",
            r#"{"sourceFile": "industries/retail/main/genAiPlugins/Store_Hours.genAiPlugin-meta.xml"}"#,
        );
        library.write_file(
            "industries/retail/main/genAiPlugins/Store_Hours.genAiPlugin-meta.xml",
            "<GenAiPlugin/>\n",
        );
        library.write_file(
            "products/commerce/agents/greeter.json",
            r#"{"description": "Welcomes shoppers"}"#,
        );
        library
    }

    /// Write a file in library
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from library
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Parse a JSON file from library
    #[allow(dead_code)]
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse JSON")
    }

    /// Check if a file exists in library
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Entry names and contents of a zip archive, in archive order
#[allow(dead_code)]
pub fn zip_entries(path: &Path) -> Vec<(String, String)> {
    let file = std::fs::File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("Failed to read archive entry");
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .expect("Failed to read entry content");
        entries.push((entry.name().to_string(), content));
    }
    entries
}

/// Command for the openassets binary, isolated from developer overrides
#[allow(deprecated)]
pub fn openassets_cmd() -> Command {
    let mut cmd = Command::cargo_bin("openassets").unwrap();
    cmd.env_remove("OPENASSETS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
