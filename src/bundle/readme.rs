//! Generated `README.md` placed in every asset archive

use crate::domain::AssetRecord;

/// Archive entry name of the generated readme
pub const README_FILE: &str = "README.md";

/// Render the readme for `file_name` (the asset file name without `.json`)
pub fn render(file_name: &str, record: &AssetRecord) -> String {
    let source = record
        .source_file()
        .unwrap_or("No source file specified");

    let mut optional = String::new();
    if let Some(author) = record.author.as_deref().filter(|a| !a.is_empty()) {
        optional.push_str(&format!("## Author\n{author}\n\n"));
    }
    if let Some(company) = record.company.as_deref().filter(|c| !c.is_empty()) {
        optional.push_str(&format!("## Company\n{company}\n\n"));
    }

    let dependencies = if record.dependencies().is_empty() {
        "No dependencies".to_string()
    } else {
        record
            .dependencies()
            .iter()
            .map(|dep| format!("- {dep}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "# {file_name} Information\n\n## Source File\n{source}\n\n{optional}\n## Dependencies\n{dependencies}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_with_everything() {
        let record = AssetRecord {
            source_file: Some("industries/healthcare/main/classes/ScheduleVisit.cls".to_string()),
            author: Some("Dana".to_string()),
            company: Some("Acme".to_string()),
            dependencies: Some(vec![
                "industries/healthcare/main/flows/Visit.flow-meta.xml".to_string(),
                "shared/Helper.cls".to_string(),
            ]),
            ..AssetRecord::default()
        };

        assert_eq!(
            render("schedule_visit", &record),
            "# schedule_visit Information\n\n\
             ## Source File\nindustries/healthcare/main/classes/ScheduleVisit.cls\n\n\
             ## Author\nDana\n\n\
             ## Company\nAcme\n\n\n\
             ## Dependencies\n\
             - industries/healthcare/main/flows/Visit.flow-meta.xml\n\
             - shared/Helper.cls\n"
        );
    }

    #[test]
    fn test_readme_minimal() {
        let readme = render("greeter", &AssetRecord::default());
        assert!(readme.starts_with("# greeter Information\n"));
        assert!(readme.contains("## Source File\nNo source file specified\n"));
        assert!(!readme.contains("## Author"));
        assert!(!readme.contains("## Company"));
        assert!(readme.ends_with("## Dependencies\nNo dependencies\n"));
    }
}
