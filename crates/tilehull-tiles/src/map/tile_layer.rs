#![warn(missing_docs)]

//! Row-major tile layers.

use super::{GridPoint, TileGrid, TileId};
use crate::error::TileError;

/// A named, row-major layer of tile ids.
///
/// Row 0 is the topmost row, matching the order tile editors export rows in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    /// Layer name, e.g. `"ground"`
    name: String,
    /// Width of the layer in cells
    width: usize,
    /// Height of the layer in cells
    height: usize,
    /// Tile ids, `width * height` of them
    data: Vec<TileId>,
}

impl TileLayer {
    /// Creates a layer from row-major tile ids.
    ///
    /// # Arguments
    /// * `name` - Layer name
    /// * `width` - Width of the layer in cells
    /// * `height` - Height of the layer in cells
    /// * `data` - `width * height` tile ids, row 0 first
    ///
    /// # Returns
    /// * `Result<Self, TileError>` - The layer, or `InvalidInput` if the data does not fit the dimensions
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        data: Vec<TileId>,
    ) -> Result<Self, TileError> {
        let Some(cells) = width.checked_mul(height) else {
            return Err(TileError::invalid(
                "Layer dimensions too large, would cause overflow",
            ));
        };
        if data.len() != cells {
            return Err(TileError::invalid(format!(
                "{}x{} layer needs {} tile ids, got {}",
                width,
                height,
                cells,
                data.len()
            )));
        }

        Ok(TileLayer {
            name: name.into(),
            width,
            height,
            data,
        })
    }

    /// Creates an empty (all zero) layer.
    pub fn empty(name: impl Into<String>, width: usize, height: usize) -> Result<Self, TileError> {
        let Some(cells) = width.checked_mul(height) else {
            return Err(TileError::invalid(
                "Layer dimensions too large, would cause overflow",
            ));
        };
        Self::new(name, width, height, vec![0; cells])
    }

    /// Creates a layer from a list of rows, topmost row first.
    ///
    /// # Returns
    /// * `Result<Self, TileError>` - The layer, or `InvalidInput` if the rows are ragged
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<TileId>>) -> Result<Self, TileError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TileError::invalid(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                width
            )));
        }
        Self::new(name, width, height, rows.into_iter().flatten().collect())
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn get_index(&self, p: GridPoint) -> Option<usize> {
        (p.x < self.width && p.y < self.height).then(|| p.y * self.width + p.x)
    }

    /// Gets the tile id of a cell.
    ///
    /// # Returns
    /// * `Result<TileId, TileError>` - The id, or `OutOfBounds` outside the layer
    pub fn get_tile(&self, p: GridPoint) -> Result<TileId, TileError> {
        self.get_index(p)
            .map(|i| self.data[i])
            .ok_or_else(|| self.out_of_bounds(p))
    }

    /// Sets the tile id of a cell.
    ///
    /// # Returns
    /// * `Result<(), TileError>` - Success, or `OutOfBounds` outside the layer
    pub fn set_tile(&mut self, p: GridPoint, id: TileId) -> Result<(), TileError> {
        let index = self.get_index(p).ok_or_else(|| self.out_of_bounds(p))?;
        self.data[index] = id;
        Ok(())
    }

    /// Gets a reference to the underlying tile ids.
    pub fn get_data(&self) -> &[TileId] {
        &self.data
    }

    /// Clears the layer, setting all cells to empty.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    fn out_of_bounds(&self, cell: GridPoint) -> TileError {
        TileError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        }
    }
}

impl TileGrid for TileLayer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn tile_id_at(&self, cell: GridPoint) -> TileId {
        self.get_index(cell).map_or(0, |i| self.data[i])
    }

    fn occupied_count(&self) -> usize {
        self.data.iter().filter(|id| **id > 0).count()
    }
}

impl std::fmt::Display for TileLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TileLayer {:?} ({}x{})", self.name, self.width, self.height)?;
        for row in self.data.chunks(self.width.max(1)) {
            for id in row {
                write!(f, "{}", if *id > 0 { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_creation() {
        let layer = TileLayer::new("ground", 3, 2, vec![0, 1, 0, 1, 1, 1]).unwrap();
        assert_eq!(layer.name(), "ground");
        assert_eq!(layer.width(), 3);
        assert_eq!(layer.height(), 2);
        assert_eq!(layer.occupied_count(), 4);
    }

    #[test]
    fn test_invalid_creation() {
        assert!(matches!(
            TileLayer::new("ground", 3, 2, vec![1; 5]),
            Err(TileError::InvalidInput(_))
        ));
        assert!(matches!(
            TileLayer::new("ground", usize::MAX, 2, vec![]),
            Err(TileError::InvalidInput(_))
        ));
        assert!(matches!(
            TileLayer::from_rows("ground", vec![vec![1, 1], vec![1]]),
            Err(TileError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_layers_are_valid() {
        let layer = TileLayer::from_rows("ground", vec![]).unwrap();
        assert_eq!((layer.width(), layer.height()), (0, 0));
        assert_eq!(layer.occupied_count(), 0);

        let layer = TileLayer::empty("ground", 4, 3).unwrap();
        assert_eq!(layer.get_data().len(), 12);
        assert_eq!(layer.occupied_count(), 0);
    }

    #[test]
    fn test_tile_operations() {
        let mut layer = TileLayer::empty("ground", 5, 5).unwrap();
        let p = GridPoint::new(2, 3);

        layer.set_tile(p, 7).unwrap();
        assert_eq!(layer.get_tile(p).unwrap(), 7);
        assert_eq!(layer.tile_id_at(p), 7);
        assert!(layer.is_occupied(p));

        // Negative ids are empty
        layer.set_tile(p, -1).unwrap();
        assert!(!layer.is_occupied(p));

        assert!(matches!(
            layer.set_tile(GridPoint::new(5, 2), 1),
            Err(TileError::OutOfBounds { .. })
        ));
        assert!(matches!(
            layer.get_tile(GridPoint::new(2, 5)),
            Err(TileError::OutOfBounds { .. })
        ));
        assert_eq!(layer.tile_id_at(GridPoint::new(9, 9)), 0);

        layer.set_tile(p, 3).unwrap();
        layer.clear();
        assert_eq!(layer.occupied_count(), 0);
    }

    #[test]
    fn test_rows_are_row_major() {
        let layer = TileLayer::from_rows("ground", vec![vec![1, 0], vec![0, 2]]).unwrap();
        assert_eq!(layer.tile_id_at(GridPoint::new(0, 0)), 1);
        assert_eq!(layer.tile_id_at(GridPoint::new(1, 0)), 0);
        assert_eq!(layer.tile_id_at(GridPoint::new(1, 1)), 2);
    }

    #[test]
    fn test_display() {
        let layer = TileLayer::from_rows("ground", vec![vec![0, 1], vec![1, 1]]).unwrap();
        let display_str = format!("{}", layer);
        assert!(display_str.contains("TileLayer \"ground\" (2x2)"));
        assert!(display_str.contains(".#\n##\n"));
    }
}
