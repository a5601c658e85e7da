#![warn(missing_docs)]
#![doc = "Integer 2D geometry for tile collision shapes."]
#![doc = ""]
#![doc = "This crate provides the world-space [`Point`] type, parsing of `\"x, y\"` point strings,"]
#![doc = "a Graham-scan [`convex_hull`] and shoelace-based polygon measures."]
//!
//! # Example
//! ```
//! use tilehull_geometry::{hull_from_strings, Point};
//!
//! let hull = hull_from_strings(&["0,0", "0,70", "70,0", "70,70"]).unwrap();
//! assert_eq!(
//!     hull,
//!     vec![
//!         Point::new(0, 0),
//!         Point::new(70, 0),
//!         Point::new(70, 70),
//!         Point::new(0, 70),
//!     ]
//! );
//! ```

pub mod error;
pub mod hull;
pub mod point;
pub mod polygon;

pub use error::GeometryError;
pub use hull::{convex_hull, hull_from_strings};
pub use point::{MAX_COORD, Point, cross, distance_sq, parse_points};
pub use polygon::{area, contains, is_counter_clockwise, signed_area_doubled};

/// Convenience result alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
