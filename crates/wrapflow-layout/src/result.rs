//! Output of one layout pass.

use std::ops::Range;

use wrapflow_core::{Bounds, Point, Size};

/// A maximal run of items sharing the same `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Indices of the items on this row, in input order
    pub range: Range<usize>,
    /// Top edge of the row
    pub y: f64,
    /// Distance from the top edge to the tallest item's bottom edge
    pub height: f64,
}

impl Row {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Positions for every item, relative to the container's top-left corner.
///
/// Positions are index-aligned with the sizes the pass was run on. The
/// bounding size is the largest right and bottom edge over all positions,
/// or zero when there are no items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    positions: Vec<Bounds>,
    rows: Vec<Row>,
    size: Size,
}

impl LayoutResult {
    pub(crate) fn new(positions: Vec<Bounds>, rows: Vec<Row>) -> Self {
        let size = positions.iter().fold(Size::ZERO, |acc, b| {
            Size::new(acc.width.max(b.right()), acc.height.max(b.bottom()))
        });

        Self { positions, rows, size }
    }

    pub fn positions(&self) -> &[Bounds] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Bounds> {
        self.positions
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Bounding size over all positions.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions translated so the container's corner sits at `origin`.
    pub fn placed_at(&self, origin: Point) -> Vec<Bounds> {
        self.positions.iter().map(|b| b.offset(origin)).collect()
    }
}
