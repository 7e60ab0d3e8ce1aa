//! Flow layout computation.
//!
//! Places an ordered sequence of boxes left to right, wrapping to a new row
//! whenever the next box would overflow the available width.
//!
//! # Architecture
//!
//! 1. **Position computation**: [`compute_positions`] is a pure greedy pass
//!    from item sizes to row-wrapped positions relative to the container
//! 2. **Two-phase engine**: [`FlowLayout`] runs that pass twice for the host,
//!    once to *measure* a bounding size for a proposed width and once to
//!    *place* items at absolute coordinates inside finalized bounds
//! 3. **Size providers**: items report their ideal size through
//!    [`SizeProvider`]; the engine never mutates them
//!
//! # Example
//!
//! ```
//! use wrapflow_layout::{FlowLayout, Size, Bounds, Spacing};
//!
//! let items = [Size::new(40.0, 20.0), Size::new(40.0, 20.0), Size::new(40.0, 20.0)];
//! let flow = FlowLayout::new().with_spacing(Spacing::uniform(10.0));
//!
//! let size = flow.measure(90.0, &items);
//! assert_eq!(size, Size::new(90.0, 50.0));
//!
//! let placed = flow.place(Bounds::new(5.0, 5.0, 90.0, size.height), &items);
//! assert_eq!(placed[2], Bounds::new(5.0, 35.0, 40.0, 20.0));
//! ```

mod compute;
mod engine;
mod provider;
mod result;

pub use compute::compute_positions;
pub use engine::{FlowCache, FlowLayout};
pub use provider::{from_fn, ProposedSize, SizeFn, SizeProvider};
pub use result::{LayoutResult, Row};

pub use wrapflow_core::{Bounds, LayoutError, Point, Size, Spacing};
