//! get_k8s_changelog MCP Tool
//!
//! Returns a local Kubernetes changelog file with only its change content.
//! The file is either given as `Path` or derived from a minor version as
//! `CHANGELOG-<minor>.md` under the server root.

use super::{get_optional_string, ToolContext, ToolDefinition};
use crate::parser::{changelog_file_name, keep_only_changes, validate_minor_version};
use crate::{Context, Result};
use serde_json::{json, Value};
use std::path::PathBuf;

pub const NAME: &str = "get_k8s_changelog";

/// Get the tool definition for get_k8s_changelog
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Get a kubernetes changelog file and keep only changes content. Prefer to use this tool if a kubernetes minor version changelog is needed."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "KubernetesMinorVersion": {
                    "type": "string",
                    "description": "Kubernetes minor version to read 'CHANGELOG-<minor>.md' for. For example, '1.33'."
                },
                "Path": {
                    "type": "string",
                    "description": "Changelog file, e.g. 'CHANGELOG-1.33.md'. Takes precedence over KubernetesMinorVersion."
                }
            }
        }),
    }
}

/// Execute the get_k8s_changelog tool
pub fn execute(args: &Value, context: &ToolContext) -> Result<String> {
    let path = match (
        get_optional_string(args, "Path"),
        get_optional_string(args, "KubernetesMinorVersion"),
    ) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(minor)) => {
            let minor = validate_minor_version(&minor)?;
            PathBuf::from(changelog_file_name(minor))
        }
        (None, None) => anyhow::bail!("Missing required field: Path or KubernetesMinorVersion"),
    };
    let path = context.resolve(&path);

    log::info!("Reading changelog from {}", path.display());
    let changelog = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read changelog {}", path.display()))?;
    Ok(keep_only_changes(&changelog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotesConfig;
    use tempfile::TempDir;

    #[test]
    fn test_execute_filters_changelog() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("CHANGELOG-1.33.md"),
            "toc\n# v1.33.1\n## Downloads for v1.33.1\nhash\n## Changes by Kind\n- fix\n",
        )
        .unwrap();

        let context = ToolContext {
            config: NotesConfig::default(),
            root: temp_dir.path().to_path_buf(),
        };
        let result = execute(&json!({ "Path": "CHANGELOG-1.33.md" }), &context).unwrap();
        assert_eq!(result, "# v1.33.1\n## Changes by Kind\n- fix\n\n");
    }

    #[test]
    fn test_execute_with_minor_version() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("CHANGELOG-1.33.md"),
            "toc\n# v1.33.2\n## Dependencies\n- bump\n## Changes by Kind\n- fix",
        )
        .unwrap();

        let context = ToolContext {
            config: NotesConfig::default(),
            root: temp_dir.path().to_path_buf(),
        };
        let result = execute(&json!({ "KubernetesMinorVersion": " 1.33 " }), &context).unwrap();
        assert_eq!(result, "# v1.33.2\n## Changes by Kind\n- fix\n");
    }

    #[test]
    fn test_execute_rejects_invalid_minor_version() {
        let temp_dir = TempDir::new().unwrap();
        let context = ToolContext {
            config: NotesConfig::default(),
            root: temp_dir.path().to_path_buf(),
        };

        for minor in ["1.33.1", "../1.33", "v1.33", "1.\u{0663}3"] {
            let err = execute(&json!({ "KubernetesMinorVersion": minor }), &context).unwrap_err();
            assert!(
                err.to_string().starts_with("invalid kubernetes minor version"),
                "{minor}: {err}"
            );
        }
    }

    #[test]
    fn test_execute_without_arguments() {
        let context = ToolContext {
            config: NotesConfig::default(),
            root: PathBuf::from("."),
        };
        let err = execute(&json!({}), &context).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field: Path or KubernetesMinorVersion"
        );
    }

    #[test]
    fn test_execute_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let context = ToolContext {
            config: NotesConfig::default(),
            root: temp_dir.path().to_path_buf(),
        };
        let err = execute(&json!({ "Path": "CHANGELOG-1.99.md" }), &context).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read changelog"));
    }
}
