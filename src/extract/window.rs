//! Selection window and its expansion to whole dated sections

use crate::parser::HeadingOccurrence;
use serde::Serialize;

/// A `[left, right)` byte range of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionWindow {
    pub left: usize,
    pub right: usize,
}

impl SelectionWindow {
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right, "window edges out of order: {left} > {right}");
        Self { left, right }
    }

    /// The window covering the whole document
    pub fn full(document_len: usize) -> Self {
        Self::new(0, document_len)
    }

    pub fn len(&self) -> usize {
        self.right - self.left
    }

    pub fn is_empty(&self) -> bool {
        self.left == self.right
    }

    pub fn contains(&self, other: &SelectionWindow) -> bool {
        self.left <= other.left && other.right <= self.right
    }

    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.left..self.right]
    }
}

/// Widen a marker-granular window so both edges sit on section boundaries
///
/// The left edge moves back to the start of the last heading that ends at or
/// before it, keeping sibling bullets of the same dated section. The right
/// edge moves forward to the start of the first heading at or after it, so the
/// selected section's trailing bullets are kept but the next section is not.
/// Without such a heading, an edge moves to the document edge.
pub fn expand(
    window: SelectionWindow,
    headings: &[HeadingOccurrence],
    document_len: usize,
) -> SelectionWindow {
    // headings are in document order and never overlap
    let before = headings.partition_point(|h| h.end <= window.left);
    let left = match before {
        0 => 0,
        n => headings[n - 1].start,
    };

    let after = headings.partition_point(|h| h.start < window.right);
    let right = headings
        .get(after)
        .map(|h| h.start)
        .unwrap_or(document_len);

    SelectionWindow::new(left, right)
}
