//! Error types for the wrapflow engine.

use crate::geometry::Size;
use thiserror::Error;

/// Errors raised when the measure and place phases disagree.
///
/// The plain `measure`/`place` pair is total and never fails. These errors
/// only come out of the cached two-phase path, where the placement pass can
/// check the items it receives against the ones that were measured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Placement requested before any measure pass filled the cache")]
    NotMeasured,

    #[error("Inconsistent layout state: measured {measured} items but asked to place {placed}")]
    ItemCountMismatch { measured: usize, placed: usize },

    #[error(
        "Inconsistent layout state: item {index} measured as {}x{} but placed as {}x{}",
        .measured.width, .measured.height, .placed.width, .placed.height
    )]
    ItemSizeMismatch {
        index: usize,
        measured: Size,
        placed: Size,
    },
}
