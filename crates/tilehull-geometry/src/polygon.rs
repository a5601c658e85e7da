//! Shoelace measures and point containment for hull polygons.

use crate::point::{Point, cross};

/// Iterates over the edges of a closed polygon, including the wraparound edge.
fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    polygon
        .iter()
        .copied()
        .zip(polygon.iter().copied().cycle().skip(1))
}

/// Twice the signed area of `polygon` (shoelace formula).
///
/// Positive for counter-clockwise vertex order, negative for clockwise and
/// zero for fewer than three vertices or a collinear chain. Kept doubled so
/// the result stays an exact integer.
///
/// Summed as a fan of triangles around the first vertex, so a convex polygon
/// with coordinates within `±`[`MAX_COORD`](crate::MAX_COORD) never overflows.
pub fn signed_area_doubled(polygon: &[Point]) -> i128 {
    match polygon {
        [first, rest @ ..] if rest.len() >= 2 => rest
            .windows(2)
            .map(|pair| cross(*first, pair[0], pair[1]))
            .sum(),
        _ => 0,
    }
}

/// Unsigned area of `polygon` in world units squared.
pub fn area(polygon: &[Point]) -> f64 {
    signed_area_doubled(polygon).unsigned_abs() as f64 / 2.0
}

/// Returns `true` when the vertices wind counter-clockwise.
pub fn is_counter_clockwise(polygon: &[Point]) -> bool {
    signed_area_doubled(polygon) > 0
}

/// Returns `true` if `p` lies inside or on the boundary of `polygon`.
///
/// `polygon` must be convex and counter-clockwise, as produced by
/// [`convex_hull`](crate::convex_hull). One- and two-vertex polygons are
/// treated as a point and a segment.
pub fn contains(polygon: &[Point], p: Point) -> bool {
    match polygon {
        [] => false,
        [a] => *a == p,
        [a, b] => {
            cross(*a, *b, p) == 0
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y)
        }
        _ => edges(polygon).all(|(a, b)| cross(a, b, p) >= 0),
    }
}
