//! Vendor version model
//!
//! Release notes tag their bullets with versions shaped
//! `major.minor.patch-<tag>.vendorPatch` (e.g. `1.34.1-gke.1431000`). These are
//! not semantic versions: the vendor suffix is a plain counter and must be
//! compared numerically, so `semver` ordering does not apply.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Tag used by GKE release notes
pub const DEFAULT_VENDOR_TAG: &str = "gke";

/// Errors raised while parsing a vendor version string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid {tag} version format: {input} (missing '-{tag}.' separator)")]
    MissingTag { input: String, tag: String },

    #[error("invalid {tag} version format: {input} ('-{tag}.' separator appears more than once)")]
    DuplicateTag { input: String, tag: String },

    #[error("invalid version part in {input}: expected major.minor.patch, got {found} component(s)")]
    ComponentCount { input: String, found: usize },

    #[error("cannot parse {component} version in {input}: {value:?} is not a non-negative integer")]
    InvalidNumber {
        input: String,
        component: &'static str,
        value: String,
    },
}

/// A parsed vendor version
///
/// Field order matters: the derived ordering is lexicographic over
/// (major, minor, patch, vendor_patch).
///
/// A `Version` does not remember its tag. `Display` and `FromStr` use the
/// default `gke` tag; render versions of any other scheme with
/// [`VersionScheme::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub vendor_patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64, vendor_patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            vendor_patch,
        }
    }

    /// Parse a version using the default (`gke`) tag
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        VersionScheme::default().parse(input)
    }

    /// Compare two versions field by field; the first unequal field decides
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders with the default `gke` tag, see [`VersionScheme::format`]
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}.{}",
            self.major, self.minor, self.patch, DEFAULT_VENDOR_TAG, self.vendor_patch
        )
    }
}

/// Describes the vendor tag a release log uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionScheme {
    tag: String,
}

impl Default for VersionScheme {
    fn default() -> Self {
        Self::new(DEFAULT_VENDOR_TAG)
    }
}

impl VersionScheme {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Separator between the upstream part and the vendor patch, e.g. `-gke.`
    fn separator(&self) -> String {
        format!("-{}.", self.tag)
    }

    /// Parse `D+.D+.D+-<tag>.D+` strictly
    ///
    /// # Errors
    /// * If the tag separator is missing or appears more than once
    /// * If the upstream part does not have exactly three components
    /// * If any component is not a run of ASCII digits fitting in `u64`
    pub fn parse(&self, input: &str) -> Result<Version, FormatError> {
        let separator = self.separator();
        let parts: Vec<&str> = input.split(separator.as_str()).collect();
        match parts.len() {
            2 => {}
            1 => {
                return Err(FormatError::MissingTag {
                    input: input.to_string(),
                    tag: self.tag.clone(),
                })
            }
            _ => {
                return Err(FormatError::DuplicateTag {
                    input: input.to_string(),
                    tag: self.tag.clone(),
                })
            }
        }

        let upstream: Vec<&str> = parts[0].split('.').collect();
        if upstream.len() != 3 {
            return Err(FormatError::ComponentCount {
                input: input.to_string(),
                found: upstream.len(),
            });
        }

        Ok(Version {
            major: parse_component(input, "major", upstream[0])?,
            minor: parse_component(input, "minor", upstream[1])?,
            patch: parse_component(input, "patch", upstream[2])?,
            vendor_patch: parse_component(input, "vendor patch", parts[1])?,
        })
    }

    /// Render a version with this scheme's tag
    pub fn format(&self, version: &Version) -> String {
        format!(
            "{}.{}.{}{}{}",
            version.major,
            version.minor,
            version.patch,
            self.separator(),
            version.vendor_patch
        )
    }

    /// Regex source matching the lexical shape of a version marker
    ///
    /// Digits are ASCII only; `\d` would also take other scripts' digits.
    pub fn marker_pattern(&self) -> String {
        format!(r"[0-9]+\.[0-9]+\.[0-9]+-{}\.[0-9]+", regex::escape(&self.tag))
    }
}

fn parse_component(
    input: &str,
    component: &'static str,
    value: &str,
) -> Result<u64, FormatError> {
    let invalid = || FormatError::InvalidNumber {
        input: input.to_string(),
        component,
        value: value.to_string(),
    };

    // `u64::from_str` accepts a leading '+', which is not part of the shape
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
