//! extract CLI subcommand
//!
//! Prints the release notes relevant to an upgrade, as plain text or JSON.

use super::read_document;
use crate::extract::Extractor;
use crate::models::NotesConfig;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Run the extraction and render it for stdout
pub fn render(
    document: &str,
    source: &str,
    target: &str,
    json: bool,
    config: &NotesConfig,
) -> Result<String> {
    let extractor = Extractor::from_config(config)?;
    let extraction = extractor.extract(document, source, target)?;

    if !extraction.skipped.is_empty() {
        eprintln!(
            "{}",
            format!(
                "⚠ Skipped {} malformed version marker(s)",
                extraction.skipped.len()
            )
            .yellow()
        );
    }

    if json {
        Ok(serde_json::to_string_pretty(&extraction)?)
    } else {
        Ok(extraction.text.to_string())
    }
}

pub fn run(
    source: &str,
    target: &str,
    file: Option<&Path>,
    json: bool,
    config: &NotesConfig,
) -> Result<()> {
    let document = read_document(file)?;
    let output = render(&document, source, target, json, config)?;
    if json {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}
