//! Occupancy grid abstraction.

use super::GridPoint;

/// Tile identifier as stored in a layer. Zero or negative means empty.
pub type TileId = i64;

/// Abstract interface for a rectangular occupancy grid.
///
/// Implemented by [`TileLayer`](super::TileLayer) and by any external tile
/// source that can answer these three questions.
pub trait TileGrid {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows. Row 0 is the topmost row.
    fn height(&self) -> usize;

    /// Tile id at `cell`. Cells outside the grid read as empty.
    fn tile_id_at(&self, cell: GridPoint) -> TileId;

    /// Returns `true` if `cell` holds a tile.
    fn is_occupied(&self, cell: GridPoint) -> bool {
        self.tile_id_at(cell) > 0
    }

    /// Counts the occupied cells.
    fn occupied_count(&self) -> usize {
        (0..self.height())
            .flat_map(|y| (0..self.width()).map(move |x| GridPoint::new(x, y)))
            .filter(|cell| self.is_occupied(*cell))
            .count()
    }
}
