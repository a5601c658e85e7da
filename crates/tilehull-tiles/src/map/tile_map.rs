//! Named collections of tile layers.

use tracing::{debug, error};

use super::{TileLayer, TileSize};
use crate::collider::{CollisionPolygon, build_collision_polygon};
use crate::error::TileError;

/// A tile map: one tile size shared by a set of uniquely named layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    tile_size: TileSize,
    layers: Vec<TileLayer>,
}

impl TileMap {
    /// Creates a map with no layers.
    pub fn new(tile_size: TileSize) -> Self {
        Self {
            tile_size,
            layers: Vec::new(),
        }
    }

    /// Tile size shared by every layer.
    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Replaces the tile size, e.g. with a command-line override.
    pub fn set_tile_size(&mut self, tile_size: TileSize) {
        self.tile_size = tile_size;
    }

    /// Adds a layer.
    ///
    /// # Errors
    ///
    /// [`TileError::InvalidInput`] if a layer with the same name exists.
    pub fn add_layer(&mut self, layer: TileLayer) -> Result<(), TileError> {
        if self.layers.iter().any(|l| l.name() == layer.name()) {
            return Err(TileError::invalid(format!(
                "duplicate layer name {:?}",
                layer.name()
            )));
        }
        debug!(layer = layer.name(), "Added layer to tile map");
        self.layers.push(layer);
        Ok(())
    }

    /// Looks up a layer by name.
    ///
    /// # Errors
    ///
    /// [`TileError::LayerNotFound`] if no layer has that name.
    pub fn layer(&self, name: &str) -> Result<&TileLayer, TileError> {
        self.layers
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| TileError::LayerNotFound {
                name: name.to_string(),
            })
    }

    /// Iterates over the layers in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter()
    }

    /// Builds the collision polygon of the named layer with the map's tile size.
    ///
    /// # Errors
    ///
    /// [`TileError::LayerNotFound`] if the layer is missing, otherwise any
    /// error of [`build_collision_polygon`].
    pub fn collision_polygon(&self, layer_name: &str) -> Result<CollisionPolygon, TileError> {
        let layer = self.layer(layer_name).inspect_err(|_| {
            error!(layer = layer_name, "Collision layer not found");
        })?;
        build_collision_polygon(layer, self.tile_size)
    }
}
