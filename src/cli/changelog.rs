//! changelog CLI subcommand
//!
//! Trims a Kubernetes changelog file down to its change content.

use super::read_document;
use crate::parser::keep_only_changes;
use crate::Result;
use std::path::Path;

pub fn run(file: Option<&Path>) -> Result<()> {
    let changelog = read_document(file)?;
    print!("{}", keep_only_changes(&changelog));
    Ok(())
}
