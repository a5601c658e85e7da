//! Grid cell coordinates and tile dimensions.

use crate::error::TileError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a cell in grid coordinates.
///
/// Rows grow downward: row 0 is the topmost row of the source data.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPoint {
    /// The column index in the grid.
    pub x: usize,
    /// The row index in the grid.
    pub y: usize,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Size of one tile in world units. Both sides are strictly positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TileSize {
    width: i64,
    height: i64,
}

impl TileSize {
    /// Creates a new `TileSize`.
    ///
    /// # Errors
    ///
    /// [`TileError::InvalidInput`] if either side is zero or negative.
    pub fn new(width: i64, height: i64) -> Result<Self, TileError> {
        if width <= 0 || height <= 0 {
            return Err(TileError::invalid(format!(
                "tile size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Creates a `TileSize` from floating-point dimensions, as read from
    /// configuration files.
    ///
    /// # Errors
    ///
    /// [`TileError::InvalidInput`] unless both values are finite positive
    /// integers.
    pub fn from_dimensions(width: f64, height: f64) -> Result<Self, TileError> {
        let to_int = |v: f64| -> Result<i64, TileError> {
            if !v.is_finite() || v.fract() != 0.0 || v.abs() >= i64::MAX as f64 {
                return Err(TileError::invalid(format!(
                    "tile size must be a whole number, got {v}"
                )));
            }
            Ok(v as i64)
        };
        Self::new(to_int(width)?, to_int(height)?)
    }

    /// Tile width in world units.
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Tile height in world units.
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Area covered by one tile.
    pub const fn area(&self) -> i128 {
        self.width as i128 * self.height as i128
    }
}

impl Default for TileSize {
    /// 70x70, the tile size of the stock platformer tile sets.
    fn default() -> Self {
        Self {
            width: 70,
            height: 70,
        }
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
