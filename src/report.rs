use std::io::Write;

use serde::Serialize;
use tilehull_geometry::{Point, area};
use tilehull_tiles::{CollisionPolygon, TileSize};

use crate::config::OutputFormat;

#[derive(Serialize)]
struct HullReport<'a> {
    vertices: &'a [Point],
    area: f64,
}

#[derive(Serialize)]
struct PolygonReport<'a> {
    layer: &'a str,
    tile_size: TileSize,
    vertices: &'a [Point],
    area: f64,
    occupied_area: f64,
    exact: bool,
}

fn write_vertices(out: &mut impl Write, vertices: &[Point]) -> anyhow::Result<()> {
    for p in vertices {
        writeln!(out, "{}", p)?;
    }
    Ok(())
}

/// Writes a bare hull, as produced from a point list.
pub fn write_hull(out: &mut impl Write, format: OutputFormat, hull: &[Point]) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_vertices(out, hull),
        OutputFormat::Json => {
            let report = HullReport {
                vertices: hull,
                area: area(hull),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

/// Writes the collision polygon of a map layer.
pub fn write_polygon(
    out: &mut impl Write,
    format: OutputFormat,
    layer: &str,
    tile_size: TileSize,
    polygon: &CollisionPolygon,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_vertices(out, polygon.vertices()),
        OutputFormat::Json => {
            let report = PolygonReport {
                layer,
                tile_size,
                vertices: polygon.vertices(),
                area: polygon.hull_area(),
                occupied_area: polygon.occupied_area(),
                exact: polygon.is_exact(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}
