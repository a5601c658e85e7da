//! Graham-scan convex hull over integer points.
//!
//! The hull is returned counter-clockwise, starting at the lowest point (ties
//! broken by the smallest x), with no closing vertex. Points lying strictly
//! inside a hull edge are dropped, so every consecutive triple of the result
//! makes a strict left turn.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::Result;
use crate::point::{Point, cross, distance_sq, parse_points};

/// Removes repeated points, keeping the first occurrence of each.
fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().copied().filter(|p| seen.insert(*p)).collect()
}

/// Index of the lowest point, leftmost among equals.
fn anchor_index(points: &[Point]) -> usize {
    points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Orders `a` and `b` by bearing from `anchor`, nearer first when collinear.
fn polar_order(anchor: Point, a: Point, b: Point) -> Ordering {
    match cross(anchor, a, b).cmp(&0) {
        // b lies counter-clockwise of a
        Ordering::Greater => Ordering::Less,
        Ordering::Less => Ordering::Greater,
        Ordering::Equal => distance_sq(anchor, a).cmp(&distance_sq(anchor, b)),
    }
}

/// Computes the convex hull of `points`.
///
/// Duplicates are ignored. With fewer than three distinct points there is no
/// polygon to build and the distinct points are returned in input order.
///
/// Coordinates must lie within `±`[`MAX_COORD`](crate::MAX_COORD), which
/// [`hull_from_strings`] and the tile extractor guarantee. Beyond it the
/// orientation tests are no longer exact.
///
/// # Arguments
///
/// * `points` - Candidate vertices in any order.
///
/// # Returns
///
/// The hull vertices in counter-clockwise order.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut unique = dedup_points(points);
    if unique.len() < 3 {
        debug!(points = unique.len(), "Too few distinct points for a hull");
        return unique;
    }

    let anchor = unique.swap_remove(anchor_index(&unique));
    // Every other point sits above the anchor, or level with it and to its
    // right, so bearings span [0, pi) and the ordering is total.
    unique.sort_unstable_by(|a, b| polar_order(anchor, *a, *b));

    let mut stack: Vec<Point> = Vec::with_capacity(unique.len() + 1);
    stack.push(anchor);
    for p in unique {
        while matches!(stack.as_slice(), &[.., a, b] if cross(a, b, p) <= 0) {
            stack.pop();
        }
        stack.push(p);
    }

    debug!(
        input = points.len(),
        vertices = stack.len(),
        anchor_x = anchor.x,
        anchor_y = anchor.y,
        "Computed convex hull"
    );
    stack
}

/// Parses `"x, y"` tokens and returns their convex hull.
///
/// Every token is parsed before any geometry runs.
///
/// # Errors
///
/// [`GeometryError::Parse`](crate::GeometryError::Parse) for the first token
/// that is not two integers within `±`[`MAX_COORD`](crate::MAX_COORD).
pub fn hull_from_strings<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Point>> {
    let points = parse_points(tokens)?;
    Ok(convex_hull(&points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::polygon::{contains, signed_area_doubled};

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    /// Rotates a hull so it starts at `first`, for order-insensitive checks.
    fn rotate_to(hull: &[Point], first: Point) -> Vec<Point> {
        let idx = hull.iter().position(|p| *p == first).unwrap();
        let mut out = hull[idx..].to_vec();
        out.extend_from_slice(&hull[..idx]);
        out
    }

    #[test]
    fn test_known_square() {
        let hull = hull_from_strings(&["0,0", "0,70", "70,0", "70,70"]).unwrap();
        assert_eq!(hull, pts(&[(0, 0), (70, 0), (70, 70), (0, 70)]));
    }

    #[test]
    fn test_degenerate_inputs_pass_through() {
        assert!(convex_hull(&[]).is_empty());

        let p = Point::new(3, 4);
        assert_eq!(convex_hull(&[p]), vec![p]);

        let q = Point::new(-1, 9);
        assert_eq!(convex_hull(&[p, q]), vec![p, q]);
        assert_eq!(convex_hull(&[q, p]), vec![q, p]);
    }

    #[test]
    fn test_duplicates_collapse_before_degenerate_check() {
        let p = Point::new(1, 1);
        let q = Point::new(2, 2);
        assert_eq!(convex_hull(&[p, p, q, p, q]), vec![p, q]);
    }

    #[test]
    fn test_collinear_point_removed() {
        let hull = convex_hull(&pts(&[(0, 0), (5, 0), (10, 0), (5, 5)]));
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (5, 5)]));
        assert!(!hull.contains(&Point::new(5, 0)));
    }

    #[test]
    fn test_collinear_points_on_closing_edge_removed() {
        // (0, 35) lies on the edge from (0, 70) back to the anchor
        let hull = convex_hull(&pts(&[(0, 0), (70, 0), (70, 70), (0, 70), (0, 35), (35, 0)]));
        assert_eq!(hull, pts(&[(0, 0), (70, 0), (70, 70), (0, 70)]));
    }

    #[test]
    fn test_all_collinear_keeps_extremes() {
        let hull = convex_hull(&pts(&[(2, 2), (0, 0), (1, 1), (3, 3)]));
        assert_eq!(hull, pts(&[(0, 0), (3, 3)]));
    }

    #[test]
    fn test_interior_points_dropped() {
        let input = pts(&[(0, 0), (10, 0), (10, 10), (0, 10), (5, 5), (2, 7), (9, 1)]);
        let hull = convex_hull(&input);
        assert_eq!(hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
        for p in &input {
            assert!(contains(&hull, *p), "{p} should be covered by the hull");
        }
    }

    #[test]
    fn test_anchor_tie_breaks_on_x() {
        let hull = convex_hull(&pts(&[(5, 0), (1, 0), (3, 4)]));
        assert_eq!(hull[0], Point::new(1, 0));
        assert_eq!(hull, pts(&[(1, 0), (5, 0), (3, 4)]));
    }

    #[test]
    fn test_negative_coordinates() {
        let hull = convex_hull(&pts(&[(-5, -5), (5, -5), (0, 5), (0, 0)]));
        assert_eq!(hull, pts(&[(-5, -5), (5, -5), (0, 5)]));
        assert!(signed_area_doubled(&hull) > 0);
    }

    #[test]
    fn test_idempotent_and_duplicate_invariant() {
        let input = pts(&[(3, 1), (7, 2), (9, 6), (4, 9), (0, 5), (5, 5), (6, 3), (1, 2)]);
        let hull = convex_hull(&input);
        assert_eq!(convex_hull(&hull), hull);

        let mut doubled = input.clone();
        doubled.extend_from_slice(&input);
        assert_eq!(convex_hull(&doubled), hull);

        let mut reversed = input.clone();
        reversed.reverse();
        assert_eq!(rotate_to(&convex_hull(&reversed), hull[0]), hull);
    }

    #[test]
    fn test_parse_failure_produces_no_hull() {
        let err = hull_from_strings(&["0, 0", "abc, 1", "5, 5"]).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Parse {
                token: "abc, 1".into()
            }
        );
    }

    #[test]
    fn test_extreme_coordinates_fail_to_parse() {
        let tokens = [
            "-9223372036854775808, -9223372036854775808",
            "9223372036854775807, -9223372036854775808",
            "-9223372036854775808, 9223372036854775807",
        ];
        assert_eq!(
            hull_from_strings(&tokens),
            Err(GeometryError::parse(tokens[0]))
        );
    }

    #[test]
    fn test_hull_at_coordinate_bound() {
        let m = crate::MAX_COORD;
        let hull = hull_from_strings(&[
            "-2305843009213693952, -2305843009213693952",
            "2305843009213693952, -2305843009213693952",
            "-2305843009213693952, 2305843009213693952",
            "0, 0",
            "2305843009213693952, 2305843009213693952",
        ])
        .unwrap();
        assert_eq!(
            hull,
            [
                Point::new(-m, -m),
                Point::new(m, -m),
                Point::new(m, m),
                Point::new(-m, m)
            ]
        );
        assert!(signed_area_doubled(&hull) > 0);
    }
}
