use tilehull_geometry::{area, contains, hull_from_strings};

fn main() {
    // Corners of an L-shaped run of 70x70 tiles, as a tile tool would dump them
    let corners = [
        "0, 0", "70, 0", "140, 0", "210, 0",
        "0, 70", "70, 70", "140, 70", "210, 70",
        "0, 140", "70, 140",
    ];

    let hull = match hull_from_strings(&corners) {
        Ok(hull) => hull,
        Err(e) => {
            eprintln!("Failed to build hull: {}", e);
            return;
        }
    };

    println!("Hull has {} vertices (counter-clockwise):", hull.len());
    for p in &hull {
        println!("  {}", p);
    }
    println!("Hull area: {:.1}", area(&hull));

    // The notch above the horizontal arm is filled in by the hull
    let notch = "105, 105".parse().unwrap();
    println!("Notch point {} covered by hull: {}", notch, contains(&hull, notch));

    // Malformed input is rejected before any geometry runs
    if let Err(e) = hull_from_strings(&["0, 0", "abc, 1"]) {
        println!("\nRejected input: {}", e);
    }
}
