//! Row-wrapping position computation.

use wrapflow_core::{Bounds, Size, Spacing};

use crate::result::{LayoutResult, Row};

/// Compute positions for `sizes` flowed into rows no wider than `max_width`.
///
/// Items are placed left to right in input order. An item that would cross
/// `max_width` moves to a new row, unless it is the first item on its row, in
/// which case it stays and overflows alone. A `max_width` that is not a
/// positive finite number means the width is unconstrained and everything
/// lands on one row.
///
/// Positions are relative to the container's top-left corner and every
/// position keeps the item's size. Negative spacing and negative or NaN item
/// dimensions are clamped to zero.
pub fn compute_positions(sizes: &[Size], max_width: f64, spacing: Spacing) -> LayoutResult {
    let spacing = spacing.clamped();
    let wrap_width = (max_width.is_finite() && max_width > 0.0).then_some(max_width);

    let mut positions = Vec::with_capacity(sizes.len());
    let mut rows = Vec::new();

    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut row_bottom = 0.0_f64;
    let mut row_start = 0;

    for (index, size) in sizes.iter().enumerate() {
        let size = size.sanitized();

        // Row occupancy rather than `x > 0`, so zero-width items still get a gap
        if index > row_start {
            x += spacing.horizontal;

            if wrap_width.is_some_and(|limit| x + size.width > limit) {
                rows.push(Row {
                    range: row_start..index,
                    y,
                    height: row_bottom - y,
                });
                y = row_bottom + spacing.vertical;
                x = 0.0;
                row_start = index;
            }
        }

        row_bottom = row_bottom.max(y + size.height);
        positions.push(Bounds::new(x, y, size.width, size.height));
        x += size.width;
    }

    if !sizes.is_empty() {
        rows.push(Row {
            range: row_start..sizes.len(),
            y,
            height: row_bottom - y,
        });
    }

    LayoutResult::new(positions, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(list: &[(f64, f64)]) -> Vec<Size> {
        list.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    fn assert_bounds(actual: Bounds, x: f64, y: f64, width: f64, height: f64) {
        assert!((actual.x - x).abs() < 0.001, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 0.001, "y: {} != {}", actual.y, y);
        assert!((actual.width - width).abs() < 0.001, "width: {} != {}", actual.width, width);
        assert!((actual.height - height).abs() < 0.001, "height: {} != {}", actual.height, height);
    }

    #[test]
    fn test_wraps_when_row_is_full() {
        let result = compute_positions(
            &sizes(&[(40.0, 20.0), (40.0, 20.0), (40.0, 20.0)]),
            90.0,
            Spacing::new(10.0, 10.0),
        );

        let p = result.positions();
        assert_eq!(p.len(), 3);
        // 50 + 40 = 90 fits exactly
        assert_bounds(p[0], 0.0, 0.0, 40.0, 20.0);
        assert_bounds(p[1], 50.0, 0.0, 40.0, 20.0);
        // 90 + 10 + 40 = 140 > 90
        assert_bounds(p[2], 0.0, 30.0, 40.0, 20.0);

        assert_eq!(result.size(), Size::new(90.0, 50.0));
        assert_eq!(result.rows().len(), 2);
        assert_eq!(result.rows()[0].range, 0..2);
        assert_eq!(result.rows()[1].range, 2..3);
    }

    #[test]
    fn test_empty_input() {
        let result = compute_positions(&[], 100.0, Spacing::uniform(10.0));
        assert!(result.is_empty());
        assert!(result.rows().is_empty());
        assert_eq!(result.size(), Size::ZERO);
    }

    #[test]
    fn test_oversized_item_overflows_alone() {
        let result = compute_positions(&sizes(&[(150.0, 20.0)]), 100.0, Spacing::ZERO);
        assert_bounds(result.positions()[0], 0.0, 0.0, 150.0, 20.0);
        assert_eq!(result.size(), Size::new(150.0, 20.0));
    }

    #[test]
    fn test_oversized_item_pushes_neighbours_to_other_rows() {
        let result = compute_positions(
            &sizes(&[(30.0, 10.0), (150.0, 20.0), (30.0, 10.0)]),
            100.0,
            Spacing::new(5.0, 5.0),
        );

        let p = result.positions();
        assert_bounds(p[0], 0.0, 0.0, 30.0, 10.0);
        assert_bounds(p[1], 0.0, 15.0, 150.0, 20.0);
        assert_bounds(p[2], 0.0, 40.0, 30.0, 10.0);
        assert_eq!(result.rows().len(), 3);
    }

    #[test]
    fn test_unconstrained_width_never_wraps() {
        let items = sizes(&[(40.0, 20.0), (40.0, 20.0)]);
        let spacing = Spacing::new(5.0, 0.0);

        for width in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = compute_positions(&items, width, spacing);
            assert_bounds(result.positions()[0], 0.0, 0.0, 40.0, 20.0);
            assert_bounds(result.positions()[1], 45.0, 0.0, 40.0, 20.0);
            assert_eq!(result.rows().len(), 1);
        }
    }

    #[test]
    fn test_next_row_starts_below_tallest_item() {
        let result = compute_positions(
            &sizes(&[(40.0, 10.0), (40.0, 35.0), (40.0, 10.0)]),
            90.0,
            Spacing::new(10.0, 4.0),
        );

        assert_bounds(result.positions()[2], 0.0, 39.0, 40.0, 10.0);
        assert!((result.rows()[0].height - 35.0).abs() < 0.001);
    }

    #[test]
    fn test_row_opened_by_wrap_counts_towards_its_bottom() {
        // Third row must clear the tall item that opened the second row
        let result = compute_positions(
            &sizes(&[(60.0, 10.0), (60.0, 50.0), (60.0, 10.0)]),
            100.0,
            Spacing::new(0.0, 5.0),
        );

        assert_bounds(result.positions()[1], 0.0, 15.0, 60.0, 50.0);
        assert_bounds(result.positions()[2], 0.0, 70.0, 60.0, 10.0);
    }

    #[test]
    fn test_negative_spacing_is_clamped() {
        let raw = Spacing { horizontal: -10.0, vertical: -10.0 };
        let result = compute_positions(&sizes(&[(40.0, 20.0), (40.0, 20.0), (40.0, 20.0)]), 80.0, raw);

        assert_bounds(result.positions()[1], 40.0, 0.0, 40.0, 20.0);
        assert_bounds(result.positions()[2], 0.0, 20.0, 40.0, 20.0);
    }

    #[test]
    fn test_zero_size_items_are_placed() {
        let result = compute_positions(
            &sizes(&[(0.0, 0.0), (0.0, 0.0), (10.0, 10.0)]),
            100.0,
            Spacing::new(3.0, 0.0),
        );

        let p = result.positions();
        assert_bounds(p[0], 0.0, 0.0, 0.0, 0.0);
        assert_bounds(p[1], 3.0, 0.0, 0.0, 0.0);
        assert_bounds(p[2], 6.0, 0.0, 10.0, 10.0);
    }

    #[test]
    fn test_spacing_not_added_before_first_item_of_row() {
        let result = compute_positions(
            &sizes(&[(50.0, 10.0), (50.0, 10.0)]),
            60.0,
            Spacing::new(20.0, 0.0),
        );

        assert_bounds(result.positions()[1], 0.0, 10.0, 50.0, 10.0);
        assert_eq!(result.size(), Size::new(50.0, 20.0));
    }
}
