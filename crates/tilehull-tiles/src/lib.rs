#![warn(missing_docs)]
//! Tile layers and the convex collision polygons built from them.
//!
//! The pipeline has two stages: [`extract_vertices`] turns the occupied cells
//! of a [`TileGrid`] into a set of world-space corners, and
//! [`tilehull_geometry::convex_hull`] wraps those corners in a
//! counter-clockwise polygon. [`build_collision_polygon`] runs both.
//!
//! ```
//! use tilehull_tiles::{TileLayer, TileSize, build_collision_polygon};
//!
//! let ground = TileLayer::from_rows("ground", vec![vec![0, 1], vec![1, 1]]).unwrap();
//! let polygon = build_collision_polygon(&ground, TileSize::new(70, 70).unwrap()).unwrap();
//! assert_eq!(polygon.vertices().len(), 5);
//! assert!(!polygon.is_exact());
//! ```

pub mod collider;
pub mod error;
pub mod extract;
pub mod map;

pub use collider::{CollisionPolygon, build_collision_polygon};
pub use error::TileError;
pub use extract::{cell_corners, extract_vertices};
pub use map::{GridPoint, TileGrid, TileId, TileLayer, TileMap, TileSize};
