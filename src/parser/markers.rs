//! Version marker and date heading scanner
//!
//! Finds every embedded version marker and every standalone date line in a
//! release log, left to right, with byte offsets. No version semantics are
//! applied here: a marker is anything with the lexical shape, whether or not
//! it later parses.

use crate::models::VersionScheme;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A line holding only `<Month> <day>, <year>`, e.g. `October 28, 2025`
static DATE_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[^\S\n]*[A-Za-z]+[^\S\n]+[0-9]+,[^\S\n]+[0-9]+[^\S\n]*$")
        .expect("date heading pattern is valid")
});

/// A version marker found in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerOccurrence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// A standalone date line delimiting a dated section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingOccurrence {
    pub start: usize,
    pub end: usize,
}

/// Markers and headings of one document, both in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult<'a> {
    pub markers: Vec<MarkerOccurrence<'a>>,
    pub headings: Vec<HeadingOccurrence>,
}

#[derive(Debug, Clone)]
pub struct MarkerScanner {
    marker_regex: Regex,
}

impl MarkerScanner {
    /// Build a scanner for the markers of `scheme`
    pub fn new(scheme: &VersionScheme) -> Result<Self, regex::Error> {
        Ok(Self {
            marker_regex: Regex::new(&scheme.marker_pattern())?,
        })
    }

    pub fn scan<'a>(&self, document: &'a str) -> ScanResult<'a> {
        ScanResult {
            markers: self.markers(document),
            headings: headings(document),
        }
    }

    /// Every non-overlapping marker, left to right
    pub fn markers<'a>(&self, document: &'a str) -> Vec<MarkerOccurrence<'a>> {
        self.marker_regex
            .find_iter(document)
            .map(|m| MarkerOccurrence {
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

/// Every standalone date line, left to right
pub fn headings(document: &str) -> Vec<HeadingOccurrence> {
    DATE_HEADING_REGEX
        .find_iter(document)
        .map(|m| HeadingOccurrence {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
