//! Geometry value types used by the layout passes.
//!
//! All coordinates are `f64` in the host's logical units. `glam` conversions
//! are provided for hosts that keep their scene in `Vec2`.

use glam::Vec2;

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp negative or NaN dimensions to zero.
    pub fn sanitized(self) -> Self {
        Self {
            width: non_negative(self.width),
            height: non_negative(self.height),
        }
    }

    /// Create from a `glam` vector.
    pub fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }

    /// Convert to a `glam` vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A point in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Position relative to the flow container (or absolute after placement)
    pub x: f64,
    pub y: f64,
    /// Size of the item
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from an origin and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(Point::from_vec2(position), Size::from_vec2(size))
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Translate by `delta`, keeping the size.
    pub fn offset(&self, delta: Point) -> Bounds {
        Bounds::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Compute intersection with another bounds.
    pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Bounds::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Compute union (bounding box) with another bounds.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Bounds::new(x1, y1, x2 - x1, y2 - y1)
    }
}

/// Gaps between items on a row and between rows.
///
/// Both values are clamped to zero on construction, so a `Spacing` built
/// through [`Spacing::new`] is always non-negative. Deserialized values go
/// through the same clamp when handed to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Gap between neighbouring items on the same row
    pub horizontal: f64,
    /// Gap between the bottom of one row and the top of the next
    pub vertical: f64,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing { horizontal: 0.0, vertical: 0.0 };

    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal: non_negative(horizontal),
            vertical: non_negative(vertical),
        }
    }

    /// Same gap in both directions.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Re-apply the non-negative clamp.
    pub fn clamped(self) -> Self {
        Self::new(self.horizontal, self.vertical)
    }
}

fn non_negative(value: f64) -> f64 {
    // NaN fails the comparison and falls through to zero.
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
