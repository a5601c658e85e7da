//! Command-line front end: builds convex collision polygons from tile maps or
//! plain point lists and prints them.

mod config;
mod map_file;
mod report;

use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tilehull_geometry::hull_from_strings;
use tilehull_tiles::TileSize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{OutputFormat, Settings, load_settings};

#[derive(Parser)]
#[command(name = "tilehull", version)]
#[command(about = "Builds convex collision polygons from tile map layers")]
#[command(long_about = "Builds convex collision polygons from tile map layers:
  tilehull map level.toml                  # collider for the configured layer
  tilehull map level.toml --layer walls    # collider for another layer
  tilehull points corners.txt              # hull of \"x, y\" lines
  tilehull points - --format json          # read points from stdin")]
struct Cli {
    /// Settings file (defaults to config/default.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding output.format from the settings
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the collision polygon of a layer in a TOML tile map
    Map {
        /// Map file path
        file: PathBuf,

        /// Layer to build the collider from, overriding collision.layer
        #[arg(long)]
        layer: Option<String>,

        /// Tile width in world units, overriding the map file
        #[arg(long, requires = "tile_height")]
        tile_width: Option<f64>,

        /// Tile height in world units, overriding the map file
        #[arg(long, requires = "tile_width")]
        tile_height: Option<f64>,
    },
    /// Compute the convex hull of "x, y" lines read from a file or stdin
    Points {
        /// Input file, or "-" for stdin
        #[arg(default_value = "-")]
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref());
    let level = settings
        .as_ref()
        .map_or("info", |s| s.log.level.as_str())
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let result = settings
        .context("failed to load settings")
        .and_then(|settings| run(cli, settings));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, settings: Settings) -> anyhow::Result<()> {
    let format = cli.format.unwrap_or(settings.output.format);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Map {
            file,
            layer,
            tile_width,
            tile_height,
        } => {
            let configured = settings
                .tiles
                .tile_size()
                .context("invalid tile size in settings")?;
            let mut map = map_file::load_map(&file, configured)?;
            if let (Some(w), Some(h)) = (tile_width, tile_height) {
                map.set_tile_size(TileSize::from_dimensions(w, h)?);
            }

            let layer = layer.unwrap_or(settings.collision.layer);
            info!(layer = %layer, tile_size = %map.tile_size(), "Building collision polygon");
            let polygon = map
                .collision_polygon(&layer)
                .with_context(|| format!("cannot build collider from {}", file.display()))?;
            info!(vertices = polygon.vertices().len(), "Collision polygon complete");

            report::write_polygon(&mut stdout, format, &layer, map.tile_size(), &polygon)
        }
        Command::Points { file } => {
            let tokens = read_point_lines(&file)?;
            debug!(points = tokens.len(), source = %file, "Read point list");
            let hull = hull_from_strings(&tokens)
                .with_context(|| format!("invalid point list in {}", file))?;
            info!(vertices = hull.len(), "Convex hull complete");

            report::write_hull(&mut stdout, format, &hull)
        }
    }
}

/// Reads non-empty, non-comment lines from `source` ("-" for stdin).
fn read_point_lines(source: &str) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = if source == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = std::fs::File::open(source)
            .with_context(|| format!("failed to open point list {}", source))?;
        Box::new(BufReader::new(file))
    };

    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", source))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        tokens.push(trimmed.to_string());
    }
    Ok(tokens)
}
