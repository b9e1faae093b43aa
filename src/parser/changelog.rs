//! Kubernetes changelog filter
//!
//! Upstream `CHANGELOG-<minor>.md` files carry download tables and dependency
//! bumps next to the actual changes. Only the changes are worth handing to a
//! report generator.

use once_cell::sync::Lazy;
use regex::Regex;

static VERSION_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^# v[0-9]\.[0-9]+\.[0-9]+").expect("version heading pattern is valid")
});

static MINOR_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("minor version pattern is valid"));

const IGNORED_SECTION_PREFIXES: [&str; 2] = ["## Dependencies", "## Downloads for"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid kubernetes minor version: {0}")]
pub struct MinorVersionError(pub String);

/// Validate a kubernetes minor version such as `1.33`, returning it trimmed
pub fn validate_minor_version(version: &str) -> Result<&str, MinorVersionError> {
    let trimmed = version.trim();
    if MINOR_VERSION_REGEX.is_match(trimmed) {
        Ok(trimmed)
    } else {
        Err(MinorVersionError(trimmed.to_string()))
    }
}

/// Name of the upstream changelog file for a minor version
pub fn changelog_file_name(minor: &str) -> String {
    format!("CHANGELOG-{}.md", minor)
}

/// Keep only change content: everything from the first version heading on,
/// minus dependency and download sections
pub fn keep_only_changes(changelog: &str) -> String {
    let mut result = String::with_capacity(changelog.len());
    // flips once, on the first version heading
    let mut seen_version_heading = false;
    let mut in_ignored_section = false;

    for line in changelog.split('\n') {
        if !seen_version_heading {
            if VERSION_HEADING_REGEX.is_match(line) {
                seen_version_heading = true;
            } else {
                continue;
            }
        }

        if IGNORED_SECTION_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix))
        {
            in_ignored_section = true;
            continue;
        }

        if in_ignored_section && (line.starts_with("# ") || line.starts_with("## ")) {
            in_ignored_section = false;
        }

        if !in_ignored_section {
            result.push_str(line);
            result.push('\n');
        }
    }

    result
}
