//! Document collection input files.
//!
//! Collections are a JSON or YAML list of document records; the format is
//! chosen from the file extension.

use std::path::Path;

use rw_doctree::Document;

use crate::error::CliError;

/// Supported input formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect format from file extension.
    pub(crate) fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(CliError::Validation(format!(
                "Unsupported input format: {} (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// Read a document collection from a file.
pub(crate) fn read_documents(path: &Path) -> Result<Vec<Document>, CliError> {
    let format = InputFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let documents = parse_documents(&content, format)?;

    tracing::info!(path = %path.display(), count = documents.len(), "Loaded documents");

    Ok(documents)
}

/// Parse a document collection.
///
/// Blank content is an empty collection.
pub(crate) fn parse_documents(content: &str, format: InputFormat) -> Result<Vec<Document>, CliError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match format {
        InputFormat::Json => Ok(serde_json::from_str(trimmed)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(trimmed)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            InputFormat::from_path(Path::new("docs.json")).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            InputFormat::from_path(Path::new("docs.YAML")).unwrap(),
            InputFormat::Yaml
        );
        assert_eq!(
            InputFormat::from_path(Path::new("dir/docs.yml")).unwrap(),
            InputFormat::Yaml
        );
    }

    #[test]
    fn test_format_unknown_extension() {
        assert!(matches!(
            InputFormat::from_path(Path::new("docs.txt")),
            Err(CliError::Validation(_))
        ));
        assert!(InputFormat::from_path(Path::new("docs")).is_err());
    }

    #[test]
    fn test_parse_json_documents() {
        let json = r#"[
            {"slug": "index", "title": "Home"},
            {"slug": "platforms/python", "title": "Python", "sidebar_order": 1, "keywords": ["py"]}
        ]"#;

        let documents = parse_documents(json, InputFormat::Json).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].slug, "platforms/python");
        assert_eq!(documents[1].sidebar_order, Some(1));
        assert_eq!(
            documents[1].extra.get("keywords"),
            Some(&serde_json::json!(["py"]))
        );
    }

    #[test]
    fn test_parse_yaml_documents() {
        let yaml = "- slug: index\n  title: Home\n- slug: platforms/go\n  order: 2\n";

        let documents = parse_documents(yaml, InputFormat::Yaml).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].slug, "platforms/go");
        assert_eq!(documents[1].sidebar_order, Some(2));
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(parse_documents("  \n", InputFormat::Json).unwrap().is_empty());
        assert!(parse_documents("", InputFormat::Yaml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_documents("[{\"slug\": ", InputFormat::Json);

        assert!(matches!(result, Err(CliError::Json(_))));
    }

    #[test]
    fn test_parse_record_without_slug_fails() {
        let json = parse_documents(r#"[{"slug": "index"}, {"title": "Oops"}]"#, InputFormat::Json);
        let yaml = parse_documents("- title: Oops\n", InputFormat::Yaml);

        assert!(matches!(json, Err(CliError::Json(_))));
        assert!(matches!(yaml, Err(CliError::Yaml(_))));
    }

    #[test]
    fn test_read_documents_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        std::fs::write(&path, r#"[{"slug": "guide"}]"#).unwrap();

        let documents = read_documents(&path).unwrap();

        assert_eq!(documents, vec![Document::new("guide")]);
    }

    #[test]
    fn test_read_documents_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = read_documents(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
