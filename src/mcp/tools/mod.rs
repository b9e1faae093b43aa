//! MCP Tool Registry and Implementations
//!
//! Both tools only read local files and never modify state, so they are
//! advertised as read-only and idempotent.

pub mod changelog;
pub mod release_notes;

use crate::models::NotesConfig;
use crate::Result;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Everything a tool call may depend on
pub struct ToolContext {
    pub config: NotesConfig,
    /// Base directory for relative paths
    pub root: PathBuf,
}

impl ToolContext {
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry with all available tools
    pub fn new() -> Self {
        Self {
            tools: vec![release_notes::definition(), changelog::definition()],
        }
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": {
                        "readOnlyHint": true,
                        "idempotentHint": true
                    }
                })
            })
            .collect()
    }

    /// Call a tool by name with the given arguments
    pub fn call_tool(&self, name: &str, arguments: &Value, context: &ToolContext) -> Result<String> {
        match name {
            release_notes::NAME => release_notes::execute(arguments, context),
            changelog::NAME => changelog::execute(arguments, context),
            _ => anyhow::bail!("Unknown tool: {}", name),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to extract a required string field from JSON
pub fn get_required_string(args: &Value, field: &str) -> Result<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required field: {}", field))
}

/// Helper to extract an optional string field from JSON
pub fn get_optional_string(args: &Value, field: &str) -> Option<String> {
    args.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}
