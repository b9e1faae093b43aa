//! Upgrade-relevant release notes extraction
//!
//! Scans a release log for version markers and date headings, selects the
//! marker range between the source and target versions, then widens it to
//! whole dated sections.

pub mod range;
pub mod window;

pub use range::{left_boundary, right_boundary, select_range, ParsedMarker};
pub use window::{expand, SelectionWindow};

use crate::models::{FormatError, NotesConfig, Version, VersionScheme};
use crate::parser::{MarkerOccurrence, MarkerScanner};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid source version: {0}")]
    InvalidSource(FormatError),

    #[error("invalid target version: {0}")]
    InvalidTarget(FormatError),

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result of one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction<'a> {
    /// Selected release notes
    pub text: &'a str,
    /// Final window, on section boundaries
    pub window: SelectionWindow,
    /// Window before expansion, on marker boundaries
    pub marker_window: SelectionWindow,
    /// Markers that matched the shape but did not parse
    pub skipped: Vec<MarkerOccurrence<'a>>,
}

/// Extracts the part of a release log relevant to an upgrade
///
/// Holds no per-document state; one extractor can serve any number of calls.
#[derive(Debug, Clone)]
pub struct Extractor {
    scheme: VersionScheme,
    scanner: MarkerScanner,
}

impl Extractor {
    pub fn new(scheme: VersionScheme) -> Result<Self, regex::Error> {
        let scanner = MarkerScanner::new(&scheme)?;
        Ok(Self { scheme, scanner })
    }

    pub fn from_config(config: &NotesConfig) -> Result<Self, regex::Error> {
        Self::new(config.scheme())
    }

    pub fn scheme(&self) -> &VersionScheme {
        &self.scheme
    }

    /// Extract the sections relevant to upgrading from `source` to `target`
    ///
    /// # Errors
    /// * If `source` or `target` is not a well-formed version. Malformed
    ///   markers inside the document never fail the call; they are reported
    ///   in [`Extraction::skipped`].
    pub fn extract<'a>(
        &self,
        document: &'a str,
        source: &str,
        target: &str,
    ) -> Result<Extraction<'a>, ExtractError> {
        let (source, target) = self.parse_versions(source, target)?;
        Ok(self.extract_versions(document, &source, &target))
    }

    /// Strictly parse a caller-supplied `(source, target)` pair
    pub fn parse_versions(
        &self,
        source: &str,
        target: &str,
    ) -> Result<(Version, Version), ExtractError> {
        let source = self
            .scheme
            .parse(source)
            .map_err(ExtractError::InvalidSource)?;
        let target = self
            .scheme
            .parse(target)
            .map_err(ExtractError::InvalidTarget)?;
        Ok((source, target))
    }

    /// Same as [`Extractor::extract`] with already parsed versions
    pub fn extract_versions<'a>(
        &self,
        document: &'a str,
        source: &Version,
        target: &Version,
    ) -> Extraction<'a> {
        if target < source {
            log::warn!(
                "Target {} is older than source {}",
                self.scheme.format(target),
                self.scheme.format(source)
            );
        }

        let scan = self.scanner.scan(document);
        let markers = ParsedMarker::parse_all(&scan.markers, &self.scheme);
        let skipped: Vec<MarkerOccurrence<'a>> = markers
            .iter()
            .filter(|m| m.version.is_none())
            .map(|m| m.occurrence)
            .collect();

        let marker_window = select_range(&markers, source, target, document.len());
        let window = expand(marker_window, &scan.headings, document.len());
        log::debug!(
            "Selected markers {}..{}, expanded to {}..{} ({} markers, {} headings, {} skipped)",
            marker_window.left,
            marker_window.right,
            window.left,
            window.right,
            markers.len(),
            scan.headings.len(),
            skipped.len()
        );

        Extraction {
            text: window.slice(document),
            window,
            marker_window,
            skipped,
        }
    }
}

/// Extract with the default (`gke`) version scheme
pub fn extract_relevant(
    document: &str,
    source: &str,
    target: &str,
) -> Result<String, ExtractError> {
    let extractor = Extractor::new(VersionScheme::default())?;
    let extraction = extractor.extract(document, source, target)?;
    Ok(extraction.text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "November 14, 2025

      Feature
      GKE version 1.35.2-gke.3040000 rejects anonymous requests.

November 07, 2025

      Feature
      In GKE version 1.34.1-gke.2037001 and later, logging is faster.
      Feature
      Use 1.34.1-gke.1829001 for concurrent node pools.

October 21, 2025

      Feature
      The G4 VM is available in 1.34.0-gke.1662000 or later.
";

    fn extractor() -> Extractor {
        Extractor::new(VersionScheme::default()).unwrap()
    }

    #[test]
    fn test_extract_single_section() {
        let result = extractor()
            .extract(NOTES, "1.34.1-gke.1829001", "1.34.1-gke.2037001")
            .unwrap();

        assert!(result.text.starts_with("November 07, 2025\n"));
        assert!(result.text.contains("1.34.1-gke.2037001"));
        assert!(result.text.contains("1.34.1-gke.1829001"));
        assert!(!result.text.contains("November 14"));
        assert!(!result.text.contains("October 21"));
        assert!(result.skipped.is_empty());
        assert!(result.window.contains(&result.marker_window));
    }

    #[test]
    fn test_extract_rejects_bad_versions() {
        let err = extractor().extract(NOTES, "1.34", "1.35.2-gke.3040000").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSource(_)));

        let err = extractor().extract(NOTES, "1.34.0-gke.1", "1.35").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidTarget(_)));
        assert!(err.to_string().starts_with("invalid target version:"));
    }

    #[test]
    fn test_extract_reports_skipped_markers() {
        let doc = "May 01, 2025\n\n- 1.30.0-gke.99999999999999999999999 is broken\n";
        let result = extractor()
            .extract(doc, "1.29.0-gke.1", "1.31.0-gke.1")
            .unwrap();

        assert_eq!(result.text, doc);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].text, "1.30.0-gke.99999999999999999999999");
    }

    #[test]
    fn test_extract_downgrade_selects_between_versions() {
        let doc = "May 02, 2025\n\n- 1.35.0-gke.1\n\nMay 01, 2025\n\n- 1.30.0-gke.1\n";
        let result = extractor()
            .extract(doc, "1.34.0-gke.1", "1.31.0-gke.1")
            .unwrap();

        assert_eq!(result.marker_window, SelectionWindow::new(16, 58));
        assert_eq!(result.text, doc);
    }

    #[test]
    fn test_extract_crossed_downgrade_keeps_sections_between() {
        let result = extractor()
            .extract(NOTES, "1.35.2-gke.3040000", "1.34.0-gke.1662000")
            .unwrap();

        assert!(!result.window.is_empty());
        assert!(result.text.contains("1.34.1-gke.2037001"));
        assert!(result.window.contains(&result.marker_window));
    }

    #[test]
    fn test_extract_with_custom_scheme() {
        let doc = "March 03, 2025\n\n- 1.30.1-eks.4\n\nMarch 01, 2025\n\n- 1.29.0-eks.2\n";
        let extractor = Extractor::new(VersionScheme::new("eks")).unwrap();
        let result = extractor.extract(doc, "1.30.1-eks.4", "1.30.1-eks.4").unwrap();

        assert_eq!(result.text, "March 03, 2025\n\n- 1.30.1-eks.4\n\n");
    }

    #[test]
    fn test_extract_relevant_returns_owned_text() {
        let text = extract_relevant(NOTES, "1.34.0-gke.1662000", "1.35.2-gke.3040000").unwrap();
        assert_eq!(text, NOTES);
    }
}
