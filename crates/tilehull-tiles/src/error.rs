//! This module defines the error types used by the `tilehull-tiles` crate.

use crate::map::GridPoint;

/// Error type for tile map and collision operations.
///
/// Every variant is a terminal failure for the call that produced it; the
/// operations are deterministic, so retrying with the same input fails the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    /// Grid shape or tile size violates its constraints.
    /// Raised before any extraction work starts.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The requested layer is not part of the tile map.
    #[error("Layer not found: {name:?}")]
    LayerNotFound {
        /// Name that was looked up.
        name: String,
    },
    /// A cell outside the layer was addressed.
    #[error("Cell {cell:?} is outside the {width}x{height} layer")]
    OutOfBounds {
        /// The offending cell.
        cell: GridPoint,
        /// Layer width in cells.
        width: usize,
        /// Layer height in cells.
        height: usize,
    },
}

impl TileError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TileError::InvalidInput(msg.into())
    }
}
