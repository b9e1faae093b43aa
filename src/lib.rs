// upgrade-notes - Release notes extraction for version upgrades
// Selects the dated sections of a release log that matter between two vendor versions

pub mod cli;
pub mod extract;
pub mod mcp;
pub mod models;
pub mod parser;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use extract::{extract_relevant, ExtractError, Extraction, Extractor, SelectionWindow};
pub use models::{FormatError, NotesConfig, Version, VersionScheme};
