use tilehull_tiles::{TileLayer, TileMap, TileSize};

fn main() {
    // A small level: a floor, a raised step on the right and a floating block
    let ground = TileLayer::from_rows(
        "ground",
        vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 3, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 2, 2],
            vec![1, 1, 1, 1, 1, 1],
        ],
    )
    .unwrap();
    println!("{}", ground);

    let mut map = TileMap::new(TileSize::new(70, 70).unwrap());
    map.add_layer(ground).unwrap();

    let polygon = match map.collision_polygon("ground") {
        Ok(polygon) => polygon,
        Err(e) => {
            eprintln!("Failed to build collider: {}", e);
            return;
        }
    };

    println!("Collision polygon ({} vertices):", polygon.vertices().len());
    for p in polygon.vertices() {
        println!("  {}", p);
    }
    println!(
        "Occupied area: {:.0}, hull area: {:.0}, exact: {}",
        polygon.occupied_area(),
        polygon.hull_area(),
        polygon.is_exact()
    );

    // Looking up a layer the map does not have
    if let Err(e) = map.collision_polygon("walls") {
        println!("\n{}", e);
    }
}
