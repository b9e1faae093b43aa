//! Marker range selection
//!
//! Release logs are written newest first, but only approximately: one day can
//! mention several versions, in any order. The selection therefore walks the
//! markers in document order and commits to an edge only once a marker is
//! unambiguously outside the wanted range; the previous marker, which may
//! still be inside, becomes the edge. Sorting the markers or bisecting them
//! would both be unsound on such input.

use super::window::SelectionWindow;
use crate::models::{Version, VersionScheme};
use crate::parser::MarkerOccurrence;
use std::cmp::Ordering;

/// A marker paired with its parsed version, `None` when it does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMarker<'a> {
    pub occurrence: MarkerOccurrence<'a>,
    pub version: Option<Version>,
}

impl<'a> ParsedMarker<'a> {
    pub fn parse_all(markers: &[MarkerOccurrence<'a>], scheme: &VersionScheme) -> Vec<Self> {
        markers
            .iter()
            .map(|occurrence| {
                let version = match scheme.parse(occurrence.text) {
                    Ok(v) => Some(v),
                    Err(e) => {
                        log::debug!("Skipping marker at {}: {}", occurrence.start, e);
                        None
                    }
                };
                ParsedMarker {
                    occurrence: *occurrence,
                    version,
                }
            })
            .collect()
    }
}

/// Left edge, driven by the target version, scanning from the newest end
///
/// Returns `None` when every parsable marker is newer than `target`.
pub fn left_boundary(markers: &[ParsedMarker<'_>], target: &Version) -> Option<usize> {
    for (index, marker) in markers.iter().enumerate() {
        let Some(version) = marker.version else {
            continue;
        };
        match version.compare(target) {
            Ordering::Equal => return Some(marker.occurrence.start),
            Ordering::Less => {
                // target sits before this marker; the previous one bounds it
                let edge = match index {
                    0 => marker,
                    _ => &markers[index - 1],
                };
                return Some(edge.occurrence.start);
            }
            Ordering::Greater => {}
        }
    }
    None
}

/// Right edge, driven by the source version, scanning from the oldest end
///
/// Returns `None` when every parsable marker is older than `source`.
pub fn right_boundary(markers: &[ParsedMarker<'_>], source: &Version) -> Option<usize> {
    for (index, marker) in markers.iter().enumerate().rev() {
        let Some(version) = marker.version else {
            continue;
        };
        match version.compare(source) {
            Ordering::Equal => return Some(marker.occurrence.end),
            Ordering::Greater => {
                // source sits after this marker; the next one bounds it
                let edge = markers.get(index + 1).unwrap_or(marker);
                return Some(edge.occurrence.end);
            }
            Ordering::Less => {}
        }
    }
    None
}

/// Pre-expansion window for an upgrade from `source` to `target`
///
/// Edges without a committing marker fall back to the document edges. The
/// edges only cross when `target` is older than `source`; they are swapped so
/// the window stays well formed.
pub fn select_range(
    markers: &[ParsedMarker<'_>],
    source: &Version,
    target: &Version,
    document_len: usize,
) -> SelectionWindow {
    let left = left_boundary(markers, target).unwrap_or(0);
    let right = right_boundary(markers, source).unwrap_or(document_len);

    if left > right {
        log::debug!("Marker edges crossed ({} > {}), swapping", left, right);
        return SelectionWindow::new(right, left);
    }
    SelectionWindow::new(left, right)
}
