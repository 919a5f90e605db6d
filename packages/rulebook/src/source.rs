//! Loading category and section records from JSON files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{CategoryRecord, SectionRecord};

/// Parse a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let load = || -> Result<Vec<T>> {
        let json = fs::read_to_string(path)?;
        parse_records(&json)
    };

    let records = load().map_err(|e| e.at_path(path))?;
    tracing::debug!(path = %path.display(), count = records.len(), "Loaded records");
    Ok(records)
}

/// Load category records from a JSON file.
///
/// # Errors
///
/// Returns [`crate::RulebookError::Load`] wrapping the IO or JSON error.
pub fn load_categories(path: &Path) -> Result<Vec<CategoryRecord>> {
    load_records(path)
}

/// Load section records from a JSON file.
///
/// # Errors
///
/// Returns [`crate::RulebookError::Load`] wrapping the IO or JSON error.
pub fn load_sections(path: &Path) -> Result<Vec<SectionRecord>> {
    load_records(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulebookError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_categories() {
        let json = r##"[
            {
                "name": "Combat",
                "index": "combat",
                "url": "/api/rules/combat",
                "desc": "# Combat\nIntro.",
                "subsections": [
                    {"name": "Actions", "index": "actions", "url": "/api/rule-sections/actions"}
                ]
            }
        ]"##;

        let records: Vec<CategoryRecord> = parse_records(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].subsections[0].index, "actions");
    }

    #[test]
    fn test_load_sections_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sections.json");
        fs::write(
            &path,
            r#"[{"name": "Actions", "index": "actions", "desc": "Text."}]"#,
        )
        .unwrap();

        let records = load_sections(&path).unwrap();
        assert_eq!(records[0].desc, "Text.");
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_categories(&path).unwrap_err();
        assert!(matches!(err, RulebookError::Load { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not an array").unwrap();

        let err = load_categories(&path).unwrap_err();
        let RulebookError::Load { source, .. } = err else {
            panic!("expected load error");
        };
        assert!(matches!(*source, RulebookError::Json(_)));
    }
}
