pub mod changelog;
pub mod compare;
pub mod extract;
pub mod mcp_server;

use crate::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a document from `file`, or from stdin when no file is given
pub fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read document from stdin")?;
            Ok(content)
        }
    }
}
