//! Core types for the wrapflow layout engine.
//!
//! This crate provides:
//! - Geometry value types (sizes, points, bounds, spacing)
//! - Error types shared by the layout phases

pub mod errors;
pub mod geometry;

pub use errors::LayoutError;
pub use geometry::{Bounds, Point, Size, Spacing};
