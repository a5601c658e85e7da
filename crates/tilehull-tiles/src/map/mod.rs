//! Tile map representation.
//!
//! This module provides the occupancy grid abstraction consumed by the vertex
//! extractor, plus concrete tile layers and named-layer maps.

pub mod grid;
pub mod point_types;
pub mod tile_layer;
pub mod tile_map;

pub use grid::{TileGrid, TileId};
pub use point_types::{GridPoint, TileSize};
pub use tile_layer::TileLayer;
pub use tile_map::TileMap;
