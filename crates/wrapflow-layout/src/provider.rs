//! The seam between the layout and the host's items.

use wrapflow_core::{Bounds, Size};

/// Size proposal handed to an item when asking for its size.
///
/// `None` on an axis means the container makes no proposal there and the
/// item should answer with its ideal extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProposedSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ProposedSize {
    /// No proposal on either axis.
    pub const UNSPECIFIED: ProposedSize = ProposedSize { width: None, height: None };

    pub const fn new(width: Option<f64>, height: Option<f64>) -> Self {
        Self { width, height }
    }

    pub fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Anything that can report a size for a proposal.
///
/// The flow layout only ever asks with [`ProposedSize::UNSPECIFIED`] and
/// treats the answer as the item's ideal size for the rest of the pass.
pub trait SizeProvider {
    fn size_given(&self, proposal: ProposedSize) -> Size;
}

impl SizeProvider for Size {
    fn size_given(&self, _proposal: ProposedSize) -> Size {
        *self
    }
}

impl SizeProvider for Bounds {
    fn size_given(&self, _proposal: ProposedSize) -> Size {
        self.size()
    }
}

impl<T: SizeProvider + ?Sized> SizeProvider for &T {
    fn size_given(&self, proposal: ProposedSize) -> Size {
        (**self).size_given(proposal)
    }
}

impl<T: SizeProvider + ?Sized> SizeProvider for Box<T> {
    fn size_given(&self, proposal: ProposedSize) -> Size {
        (**self).size_given(proposal)
    }
}

/// A [`SizeProvider`] backed by a closure. Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct SizeFn<F>(F);

impl<F> std::fmt::Debug for SizeFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SizeFn")
    }
}

impl<F: Fn(ProposedSize) -> Size> SizeProvider for SizeFn<F> {
    fn size_given(&self, proposal: ProposedSize) -> Size {
        (self.0)(proposal)
    }
}

/// Wrap a closure so it can be laid out as an item.
pub fn from_fn<F: Fn(ProposedSize) -> Size>(f: F) -> SizeFn<F> {
    SizeFn(f)
}
