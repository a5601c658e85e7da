//! Candidate vertex extraction from occupied tiles.
//!
//! Every occupied cell contributes its four corners in world space. Grid rows
//! grow downward while world Y grows upward, so row `r` of a grid with `H`
//! rows sits at `y = (H - 1 - r) * tile_height`. Corners shared between
//! neighbouring cells collapse in the returned set; no edge merging happens.

use std::collections::HashSet;

use tilehull_geometry::{MAX_COORD, Point};
use tracing::debug;

use crate::error::TileError;
use crate::map::{GridPoint, TileGrid, TileSize};

/// World-space extent of the grid along one axis, checked against
/// [`MAX_COORD`].
fn world_extent(cells: usize, tile: i64, axis: &str) -> Result<i64, TileError> {
    i64::try_from(cells)
        .ok()
        .and_then(|c| c.checked_mul(tile))
        .filter(|extent| *extent <= MAX_COORD)
        .ok_or_else(|| {
            TileError::invalid(format!(
                "grid {axis} of {cells} tiles of size {tile} exceeds the world coordinate range"
            ))
        })
}

/// Checks that the whole grid fits the world coordinate range.
fn check_extent<G>(grid: &G, tile_size: TileSize) -> Result<(), TileError>
where
    G: TileGrid + ?Sized,
{
    world_extent(grid.width(), tile_size.width(), "width")?;
    world_extent(grid.height(), tile_size.height(), "height")?;
    Ok(())
}

/// Corners of a cell already known to be inside a grid of `grid_height`
/// rows whose extent passed [`check_extent`].
fn corners(cell: GridPoint, grid_height: usize, tile_size: TileSize) -> [Point; 4] {
    let (w, h) = (tile_size.width(), tile_size.height());
    let world_x = cell.x as i64 * w;
    let world_y = (grid_height - 1 - cell.y) as i64 * h;
    [
        Point::new(world_x, world_y),
        Point::new(world_x + w, world_y),
        Point::new(world_x + w, world_y + h),
        Point::new(world_x, world_y + h),
    ]
}

/// Returns the four world-space corners of `cell` in `grid`,
/// counter-clockwise from its bottom-left corner.
///
/// # Errors
///
/// * [`TileError::OutOfBounds`] if `cell` is not inside the grid.
/// * [`TileError::InvalidInput`] if the grid's world extent exceeds
///   [`MAX_COORD`].
pub fn cell_corners<G>(
    grid: &G,
    cell: GridPoint,
    tile_size: TileSize,
) -> Result<[Point; 4], TileError>
where
    G: TileGrid + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    if cell.x >= width || cell.y >= height {
        return Err(TileError::OutOfBounds {
            cell,
            width,
            height,
        });
    }
    check_extent(grid, tile_size)?;
    Ok(corners(cell, height, tile_size))
}

/// Collects the de-duplicated corners of every occupied cell of `grid`.
///
/// Returns a fresh set on every call; the grid is only read. An empty grid
/// yields an empty set.
///
/// # Errors
///
/// [`TileError::InvalidInput`] if the grid's world extent does not fit the
/// coordinate range. Checked before any cell is visited.
pub fn extract_vertices<G>(grid: &G, tile_size: TileSize) -> Result<HashSet<Point>, TileError>
where
    G: TileGrid + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    check_extent(grid, tile_size)?;

    let mut vertices = HashSet::new();
    let mut occupied = 0usize;
    for row in 0..height {
        for col in 0..width {
            let cell = GridPoint::new(col, row);
            if !grid.is_occupied(cell) {
                continue;
            }
            occupied += 1;
            vertices.extend(corners(cell, height, tile_size));
        }
    }

    debug!(
        width,
        height,
        occupied,
        vertices = vertices.len(),
        tile_size = %tile_size,
        "Extracted candidate vertices"
    );
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileLayer;

    fn set(points: &[(i64, i64)]) -> HashSet<Point> {
        points.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_row_flip() {
        // 1 column, 2 rows, only the top row (row 0) occupied
        let layer = TileLayer::from_rows("ground", vec![vec![1], vec![0]]).unwrap();
        let vertices = extract_vertices(&layer, TileSize::new(70, 70).unwrap()).unwrap();
        assert_eq!(vertices, set(&[(0, 70), (70, 70), (70, 140), (0, 140)]));
        assert!(vertices.iter().all(|p| (70..=140).contains(&p.y)));
    }

    #[test]
    fn test_empty_grid() {
        let size = TileSize::default();
        let layer = TileLayer::from_rows("ground", vec![]).unwrap();
        assert!(extract_vertices(&layer, size).unwrap().is_empty());

        let layer = TileLayer::empty("ground", 4, 4).unwrap();
        assert!(extract_vertices(&layer, size).unwrap().is_empty());
    }

    #[test]
    fn test_shared_corners_deduplicated() {
        // Two side by side tiles share an edge: 6 distinct corners
        let layer = TileLayer::from_rows("ground", vec![vec![1, 1]]).unwrap();
        let vertices = extract_vertices(&layer, TileSize::new(10, 20).unwrap()).unwrap();
        assert_eq!(
            vertices,
            set(&[(0, 0), (10, 0), (20, 0), (0, 20), (10, 20), (20, 20)])
        );
    }

    #[test]
    fn test_interior_corners_kept() {
        // A full 2x2 block keeps its centre corner, no adjacency merging
        let layer = TileLayer::from_rows("ground", vec![vec![1, 1], vec![1, 1]]).unwrap();
        let vertices = extract_vertices(&layer, TileSize::new(1, 1).unwrap()).unwrap();
        assert_eq!(vertices.len(), 9);
        assert!(vertices.contains(&Point::new(1, 1)));
    }

    #[test]
    fn test_non_positive_ids_are_empty() {
        let layer = TileLayer::from_rows("ground", vec![vec![0, -3, 2]]).unwrap();
        let vertices = extract_vertices(&layer, TileSize::new(5, 5).unwrap()).unwrap();
        assert_eq!(vertices, set(&[(10, 0), (15, 0), (15, 5), (10, 5)]));
    }

    #[test]
    fn test_cell_corners_order() {
        let layer = TileLayer::empty("ground", 3, 3).unwrap();
        let corners = cell_corners(&layer, GridPoint::new(2, 0), TileSize::new(70, 70).unwrap());
        assert_eq!(
            corners.unwrap(),
            [
                Point::new(140, 140),
                Point::new(210, 140),
                Point::new(210, 210),
                Point::new(140, 210)
            ]
        );
    }

    #[test]
    fn test_cell_corners_outside_grid() {
        let size = TileSize::default();
        let empty = TileLayer::from_rows("ground", vec![]).unwrap();
        assert_eq!(
            cell_corners(&empty, GridPoint::new(0, 0), size),
            Err(TileError::OutOfBounds {
                cell: GridPoint::new(0, 0),
                width: 0,
                height: 0
            })
        );

        let layer = TileLayer::empty("ground", 2, 3).unwrap();
        assert!(matches!(
            cell_corners(&layer, GridPoint::new(0, 3), size),
            Err(TileError::OutOfBounds { .. })
        ));
        assert!(matches!(
            cell_corners(&layer, GridPoint::new(2, 0), size),
            Err(TileError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_extent_overflow_rejected() {
        let layer = TileLayer::from_rows("ground", vec![vec![1, 1]]).unwrap();
        let huge = TileSize::new(MAX_COORD, 1).unwrap();
        assert!(matches!(
            extract_vertices(&layer, huge),
            Err(TileError::InvalidInput(_))
        ));
        assert!(matches!(
            cell_corners(&layer, GridPoint::new(1, 0), huge),
            Err(TileError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_grid_is_not_mutated_and_calls_are_independent() {
        let layer = TileLayer::from_rows("ground", vec![vec![1, 0], vec![0, 1]]).unwrap();
        let before = layer.clone();
        let size = TileSize::new(3, 3).unwrap();
        let first = extract_vertices(&layer, size).unwrap();
        let second = extract_vertices(&layer, size).unwrap();
        assert_eq!(first, second);
        assert_eq!(layer, before);
    }
}
