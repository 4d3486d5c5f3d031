//! Interval arithmetic and planar geometry primitives used across frontkit.
//!
//! Two pieces make up the crate. The [`interval`] module works on closed
//! numeric ranges: union, intersection, and complement or intersection
//! against a domain. The geometry types ([`Rect`], [`LineSegment`],
//! [`Coord`], [`Vector`]) build 2D box relationships out of the same
//! closed-interval arithmetic applied to each axis.
//!
//! Coordinates follow screen conventions: the origin of a [`Rect`] is its
//! top-left corner and y grows downward.

/// Error types for geometry operations.
mod error;
/// Closed interval algebra.
pub mod interval;
/// One-dimensional projections of rectangle edges.
mod linesegment;
/// Coordinate helpers.
mod point;
/// Rectangle operations.
mod rect;
/// Polar vector conversions.
mod vector;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};
pub use interval::Interval;
pub use linesegment::LineSegment;
pub use point::{Coord, add_coords};
pub use rect::{Edges, Rect, Touch};
pub use vector::Vector;

/// Cardinal directions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Upward direction; the top edge of a rectangle.
    Up,
    /// Downward direction; the bottom edge of a rectangle.
    Down,
    /// Leftward direction.
    Left,
    /// Rightward direction.
    Right,
}
