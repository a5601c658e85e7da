//! TOML tile map files.
//!
//! ```toml
//! tile_width = 70
//! tile_height = 70
//!
//! [[layers]]
//! name = "ground"
//! rows = [[0, 0, 1], [1, 1, 1]]
//! ```
//!
//! Rows are listed top to bottom. The tile size keys are optional and fall
//! back to the configured size.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tilehull_tiles::{TileId, TileLayer, TileMap, TileSize};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MapFile {
    tile_width: Option<f64>,
    tile_height: Option<f64>,
    #[serde(default)]
    layers: Vec<LayerFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerFile {
    name: String,
    rows: Vec<Vec<TileId>>,
}

/// Parses map file contents. Missing tile size keys take their value from
/// `fallback`.
pub fn parse_map(text: &str, fallback: TileSize) -> anyhow::Result<TileMap> {
    let file: MapFile = toml::from_str(text).context("malformed map file")?;

    let width = file.tile_width.unwrap_or(fallback.width() as f64);
    let height = file.tile_height.unwrap_or(fallback.height() as f64);
    let mut map = TileMap::new(TileSize::from_dimensions(width, height)?);

    for layer in file.layers {
        let name = layer.name.clone();
        let layer = TileLayer::from_rows(layer.name, layer.rows)
            .with_context(|| format!("invalid layer {name:?}"))?;
        map.add_layer(layer)?;
    }
    Ok(map)
}

/// Reads and parses a map file from disk.
pub fn load_map(path: &Path, fallback: TileSize) -> anyhow::Result<TileMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read map file {}", path.display()))?;
    let map = parse_map(&text, fallback)
        .with_context(|| format!("failed to load map file {}", path.display()))?;
    info!(
        path = %path.display(),
        layers = map.layers().count(),
        tile_size = %map.tile_size(),
        "Loaded tile map"
    );
    Ok(map)
}
