//! Collision polygon construction for a tile layer.
//!
//! The polygon is the convex hull of the occupied cells' corners. It matches
//! the occupied region exactly only when that region is convex; otherwise
//! concave notches and gaps between islands are filled in, which
//! [`CollisionPolygon::is_exact`] reports.

use tilehull_geometry::{Point, convex_hull, signed_area_doubled};
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::TileError;
use crate::extract::extract_vertices;
use crate::map::{TileGrid, TileSize};

/// A counter-clockwise collision polygon and how well it covers its layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CollisionPolygon {
    vertices: Vec<Point>,
    occupied_cells: usize,
    occupied_area: f64,
    hull_area: f64,
    exact: bool,
}

impl CollisionPolygon {
    /// Hull vertices, counter-clockwise, starting at the lowest-leftmost one.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Consumes the polygon, handing the vertices to a collider.
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Number of occupied cells in the source grid.
    pub fn occupied_cells(&self) -> usize {
        self.occupied_cells
    }

    /// Area covered by occupied tiles.
    pub fn occupied_area(&self) -> f64 {
        self.occupied_area
    }

    /// Area enclosed by the polygon.
    pub fn hull_area(&self) -> f64 {
        self.hull_area
    }

    /// Returns `true` when the polygon covers exactly the occupied tiles.
    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

/// Extracts the occupied-cell corners of `grid` and wraps them in their
/// convex hull.
///
/// # Errors
///
/// [`TileError::InvalidInput`] from [`extract_vertices`].
pub fn build_collision_polygon<G>(grid: &G, tile_size: TileSize) -> Result<CollisionPolygon, TileError>
where
    G: TileGrid + ?Sized,
{
    let candidates: Vec<Point> = extract_vertices(grid, tile_size)?.into_iter().collect();
    let vertices = convex_hull(&candidates);

    let occupied_cells = grid.occupied_count();
    let occupied_doubled = 2 * occupied_cells as i128 * tile_size.area();
    let hull_doubled = signed_area_doubled(&vertices);
    let exact = hull_doubled == occupied_doubled;

    let polygon = CollisionPolygon {
        vertices,
        occupied_cells,
        occupied_area: occupied_doubled as f64 / 2.0,
        hull_area: hull_doubled as f64 / 2.0,
        exact,
    };

    if exact {
        debug!(
            vertices = polygon.vertices.len(),
            area = polygon.hull_area,
            "Built collision polygon"
        );
    } else {
        warn!(
            vertices = polygon.vertices.len(),
            occupied_area = polygon.occupied_area,
            hull_area = polygon.hull_area,
            "Collision polygon fills in concave or disconnected regions of the layer"
        );
    }
    Ok(polygon)
}
