//! Two-phase measure/place engine around [`compute_positions`].

use wrapflow_core::{Bounds, LayoutError, Size, Spacing};

use crate::compute::compute_positions;
use crate::provider::{ProposedSize, SizeProvider};
use crate::result::LayoutResult;

/// Flow layout configuration and entry points.
///
/// The host calls [`FlowLayout::measure`] with a proposed width to learn how
/// much room the items need, then [`FlowLayout::place`] with the bounds it
/// finally grants. Both run the same position pass, so as long as the width,
/// the spacing and the items are unchanged between the two calls, the placed
/// items fit inside the measured size (an item wider than the width still
/// overflows alone on its row).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowLayout {
    /// Gaps between items and between rows
    pub spacing: Spacing,
}

impl FlowLayout {
    /// Create a flow layout with no spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both gaps.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing.clamped();
        self
    }

    /// Set the gap between items on a row.
    pub fn with_horizontal_spacing(mut self, horizontal: f64) -> Self {
        self.spacing = Spacing::new(horizontal, self.spacing.vertical);
        self
    }

    /// Set the gap between rows.
    pub fn with_vertical_spacing(mut self, vertical: f64) -> Self {
        self.spacing = Spacing::new(self.spacing.horizontal, vertical);
        self
    }

    /// Run one full pass and return positions relative to the container.
    pub fn layout<P: SizeProvider>(&self, width: f64, items: &[P]) -> LayoutResult {
        let sizes = ideal_sizes(items);
        self.compute(&sizes, width)
    }

    /// Bounding size the items need when flowed into `proposed_width`.
    ///
    /// A width of zero or less means no width was proposed and the items are
    /// laid out on a single row.
    pub fn measure<P: SizeProvider>(&self, proposed_width: f64, items: &[P]) -> Size {
        self.layout(proposed_width, items).size()
    }

    /// Absolute bounds for every item inside `bounds`, in input order.
    pub fn place<P: SizeProvider>(&self, bounds: Bounds, items: &[P]) -> Vec<Bounds> {
        self.layout(bounds.width, items).placed_at(bounds.origin())
    }

    /// [`FlowLayout::measure`], remembering what was measured in `cache`.
    pub fn measure_cached<P: SizeProvider>(
        &self,
        proposed_width: f64,
        items: &[P],
        cache: &mut FlowCache,
    ) -> Size {
        let sizes = ideal_sizes(items);
        let size = self.compute(&sizes, proposed_width).size();

        cache.measured = Some(Measured {
            width: proposed_width,
            sizes,
        });

        size
    }

    /// [`FlowLayout::place`], checked against the pass recorded in `cache`.
    ///
    /// Fails when the cache is empty, or when the items no longer match the
    /// measured ones in count or size. A different width is allowed: the host
    /// may legitimately resize between the two phases, which can change how
    /// rows wrap.
    pub fn place_cached<P: SizeProvider>(
        &self,
        bounds: Bounds,
        items: &[P],
        cache: &FlowCache,
    ) -> Result<Vec<Bounds>, LayoutError> {
        let measured = cache.measured.as_ref().ok_or(LayoutError::NotMeasured)?;
        let sizes = ideal_sizes(items);

        if let Err(err) = check_consistent(&measured.sizes, &sizes) {
            tracing::warn!(error = %err, "measure and place disagree on items");
            return Err(err);
        }

        if !same_width(measured.width, bounds.width) {
            tracing::debug!(
                measured_width = measured.width,
                placed_width = bounds.width,
                "width changed between measure and place; rows may wrap differently"
            );
        }

        Ok(self.compute(&sizes, bounds.width).placed_at(bounds.origin()))
    }

    fn compute(&self, sizes: &[Size], width: f64) -> LayoutResult {
        let result = compute_positions(sizes, width, self.spacing);
        tracing::trace!(
            items = sizes.len(),
            width,
            rows = result.rows().len(),
            measured_width = result.size().width,
            measured_height = result.size().height,
            "flow layout pass"
        );
        result
    }
}

/// Per-pass state carried by the host from measure to place.
///
/// Owned by the host and scoped to one measure/place pair; the layout keeps
/// nothing between calls. Reusing a cache for a new pair overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowCache {
    measured: Option<Measured>,
}

#[derive(Debug, Clone, PartialEq)]
struct Measured {
    width: f64,
    sizes: Vec<Size>,
}

impl FlowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_measured(&self) -> bool {
        self.measured.is_some()
    }

    /// Width of the last measure pass, if any.
    pub fn measured_width(&self) -> Option<f64> {
        self.measured.as_ref().map(|m| m.width)
    }

    pub fn clear(&mut self) {
        self.measured = None;
    }
}

fn ideal_sizes<P: SizeProvider>(items: &[P]) -> Vec<Size> {
    items
        .iter()
        .map(|item| item.size_given(ProposedSize::UNSPECIFIED).sanitized())
        .collect()
}

fn check_consistent(measured: &[Size], placed: &[Size]) -> Result<(), LayoutError> {
    if measured.len() != placed.len() {
        return Err(LayoutError::ItemCountMismatch {
            measured: measured.len(),
            placed: placed.len(),
        });
    }

    match measured.iter().zip(placed).position(|(m, p)| m != p) {
        Some(index) => Err(LayoutError::ItemSizeMismatch {
            index,
            measured: measured[index],
            placed: placed[index],
        }),
        None => Ok(()),
    }
}

fn same_width(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
