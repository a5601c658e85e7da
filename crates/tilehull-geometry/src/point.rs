//! World-space points and the `"x, y"` text form.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::GeometryError;

/// Largest coordinate magnitude for which [`cross`], [`distance_sq`] and the
/// shoelace sums stay exact in `i128`.
///
/// Parsed points are checked against it. Points built directly must respect
/// it before being handed to [`convex_hull`](crate::convex_hull).
pub const MAX_COORD: i64 = 1 << 61;

/// A point in world coordinates.
///
/// Coordinates are integers so equality, hashing and the collinearity test in
/// [`cross`] are exact.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// World-frame x coordinate.
    pub x: i64,
    /// World-frame y coordinate, growing upward.
    pub y: i64,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates lie within `±`[`MAX_COORD`].
    #[must_use]
    pub const fn in_range(&self) -> bool {
        self.x >= -MAX_COORD
            && self.x <= MAX_COORD
            && self.y >= -MAX_COORD
            && self.y <= MAX_COORD
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GeometryError;

    /// Parses `"<integer>, <integer>"`, allowing any whitespace around the
    /// comma and at either end. Coordinates beyond [`MAX_COORD`] are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(GeometryError::parse(s));
        };
        let x = x.trim().parse::<i64>().map_err(|_| GeometryError::parse(s))?;
        let y = y.trim().parse::<i64>().map_err(|_| GeometryError::parse(s))?;
        Some(Point::new(x, y))
            .filter(Point::in_range)
            .ok_or_else(|| GeometryError::parse(s))
    }
}

/// Parses every token into a [`Point`].
///
/// All tokens are validated before anything is returned, so a single bad
/// token fails the whole call with no partial list.
///
/// # Errors
///
/// [`GeometryError::Parse`] naming the first token that is not two integers
/// within `±`[`MAX_COORD`].
pub fn parse_points<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Point>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// 2D cross product of `(a - o)` and `(b - o)`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise), negative when
/// it turns right and zero when the three points are collinear. Computed in
/// `i128`, which is exact for coordinates within `±`[`MAX_COORD`].
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (a.x as i128 - o.x as i128, a.y as i128 - o.y as i128);
    let (bx, by) = (b.x as i128 - o.x as i128, b.y as i128 - o.y as i128);
    ax * by - ay * bx
}

/// Squared euclidean distance between two points, exact within `±`[`MAX_COORD`].
#[inline]
pub fn distance_sq(a: Point, b: Point) -> i128 {
    let dx = a.x as i128 - b.x as i128;
    let dy = a.y as i128 - b.y as i128;
    dx * dx + dy * dy
}
