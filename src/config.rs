use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tilehull_tiles::{TileError, TileSize};
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `x, y` vertex per line
    Text,
    /// A JSON object with vertices and areas
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileSettings {
    pub width: f64,
    pub height: f64,
}

impl TileSettings {
    pub fn tile_size(&self) -> Result<TileSize, TileError> {
        TileSize::from_dimensions(self.width, self.height)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollisionSettings {
    pub layer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tiles: TileSettings,
    pub collision: CollisionSettings,
    pub output: OutputSettings,
    pub log: LogSettings,
}

/// Loads settings from built-in defaults, then a TOML file, then
/// `TILEHULL__SECTION__KEY` environment variables.
///
/// An explicit `path` must exist; the default `config/default.toml` is
/// optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(p) => File::from(p).format(FileFormat::Toml).required(true),
        None => File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false),
    };

    let settings = Config::builder()
        .set_default("tiles.width", 70)?
        .set_default("tiles.height", 70)?
        .set_default("collision.layer", "ground")?
        .set_default("output.format", "text")?
        .set_default("log.level", "info")?
        .add_source(file)
        .add_source(
            Environment::with_prefix("TILEHULL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(
                path = %path.map_or(DEFAULT_CONFIG_PATH.into(), |p| p.display().to_string()),
                "Loaded configuration"
            );
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
