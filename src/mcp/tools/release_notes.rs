//! get_release_notes MCP Tool
//!
//! Returns the release notes relevant to an upgrade between two versions,
//! read from a local release log.

use super::{get_optional_string, get_required_string, ToolContext, ToolDefinition};
use crate::extract::Extractor;
use crate::{Context, Result};
use serde_json::{json, Value};
use std::path::PathBuf;

pub const NAME: &str = "get_release_notes";

/// Get the tool definition for get_release_notes
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Get the release notes relevant to an upgrade. Prefer to use this tool if release notes between two versions are needed."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["SourceVersion", "TargetVersion"],
            "properties": {
                "SourceVersion": {
                    "type": "string",
                    "description": "A source version an upgrade happens from. For example, '1.33.5-gke.120000'."
                },
                "TargetVersion": {
                    "type": "string",
                    "description": "A target version an upgrade happens to. For example, '1.34.3-gke.240500'."
                },
                "Path": {
                    "type": "string",
                    "description": "Release notes text file. Defaults to the configured release_notes file."
                }
            }
        }),
    }
}

/// Execute the get_release_notes tool
pub fn execute(args: &Value, context: &ToolContext) -> Result<String> {
    let source = get_required_string(args, "SourceVersion")?;
    let target = get_required_string(args, "TargetVersion")?;

    // validate both versions before touching the file
    let extractor = Extractor::from_config(&context.config)?;
    let (source, target) = extractor.parse_versions(&source, &target)?;

    let path = match get_optional_string(args, "Path") {
        Some(p) => PathBuf::from(p),
        None => context
            .config
            .release_notes
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No Path given and no release_notes file configured"))?,
    };
    let path = context.resolve(&path);

    log::info!("Reading release notes from {}", path.display());
    let document = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read release notes {}", path.display()))?;

    let extraction = extractor.extract_versions(&document, &source, &target);
    Ok(extraction.text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotesConfig;
    use tempfile::TempDir;

    const NOTES: &str = "October 28, 2025\n\n- 1.34.1-gke.1829001\n\nOctober 21, 2025\n\n- 1.34.0-gke.1662000\n";

    fn context(root: &std::path::Path, release_notes: Option<&str>) -> ToolContext {
        ToolContext {
            config: NotesConfig {
                release_notes: release_notes.map(PathBuf::from),
                ..NotesConfig::default()
            },
            root: root.to_path_buf(),
        }
    }

    #[test]
    fn test_execute_with_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), NOTES).unwrap();

        let args = json!({
            "SourceVersion": "1.34.0-gke.1662000",
            "TargetVersion": "1.34.0-gke.1662000",
            "Path": "notes.txt"
        });
        let result = execute(&args, &context(temp_dir.path(), None)).unwrap();
        assert_eq!(result, "October 21, 2025\n\n- 1.34.0-gke.1662000\n");
    }

    #[test]
    fn test_execute_with_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("gke.txt"), NOTES).unwrap();

        let args = json!({
            "SourceVersion": "1.34.1-gke.1829001",
            "TargetVersion": "1.34.1-gke.1829001"
        });
        let result = execute(&args, &context(temp_dir.path(), Some("gke.txt"))).unwrap();
        assert_eq!(result, "October 28, 2025\n\n- 1.34.1-gke.1829001\n\n");
    }

    #[test]
    fn test_execute_without_any_path() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({
            "SourceVersion": "1.34.0-gke.1",
            "TargetVersion": "1.34.1-gke.1"
        });
        let err = execute(&args, &context(temp_dir.path(), None)).unwrap_err();
        assert!(err.to_string().contains("no release_notes file configured"));
    }

    #[test]
    fn test_execute_missing_version() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({ "SourceVersion": "1.34.0-gke.1" });
        let err = execute(&args, &context(temp_dir.path(), None)).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: TargetVersion");
    }

    #[test]
    fn test_execute_malformed_version() {
        // the file does not exist: versions are checked first
        let temp_dir = TempDir::new().unwrap();
        let args = json!({
            "SourceVersion": "1.34.0-gke.1",
            "TargetVersion": "1.34",
            "Path": "notes.txt"
        });
        let err = execute(&args, &context(temp_dir.path(), None)).unwrap_err();
        assert!(err.to_string().starts_with("invalid target version"));
    }
}
