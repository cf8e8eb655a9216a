use crate::errors::{ImportError, Result};
use crate::models::youtrack::SourceIssue;
use std::path::Path;

pub const DEFAULT_INPUT: &str = "output.json";

/// Reads the YouTrack export: a JSON array of issues.
pub fn load_source_issues(path: &Path) -> Result<Vec<SourceIssue>> {
    if !path.exists() {
        return Err(ImportError::InputNotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;

    serde_json::from_str(&contents)
        .map_err(|e| ImportError::InputInvalid(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn input_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_array() {
        let file = input_file(r#"[{"summary": "one"}, {"summary": "two", "tags": []}]"#);
        let issues = load_source_issues(file.path()).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].summary.as_deref(), Some("two"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        assert!(matches!(
            load_source_issues(&path),
            Err(ImportError::InputNotFound(p)) if p == path
        ));
    }

    #[test]
    fn test_malformed_json() {
        let file = input_file(r#"[{"summary": "one"},"#);
        assert!(matches!(
            load_source_issues(file.path()),
            Err(ImportError::InputInvalid(_))
        ));
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        let file = input_file(r#"{"summary": "one"}"#);
        assert!(matches!(
            load_source_issues(file.path()),
            Err(ImportError::InputInvalid(_))
        ));
    }
}
