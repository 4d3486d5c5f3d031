use serde::{Deserialize, Serialize};

use crate::Coord;

/// A magnitude and an angle in radians, measured from the y axis.
///
/// Angles for non-zero inputs fall in `[-π/2, π/2]`. The conversion from a
/// [`Coord`] uses `atan(x / y)` rather than `atan2`, so it folds the lower
/// half-plane onto the upper one and is only invertible for `y > 0` or on the
/// x axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Magnitude, never negative.
    pub length: f64,
    /// Angle from the y axis, in radians.
    pub angle: f64,
}

impl Vector {
    /// Construct a new vector.
    pub fn new(length: f64, angle: f64) -> Self {
        Self { length, angle }
    }

    /// Convert back to cartesian coordinates.
    pub fn to_coord(&self) -> Coord {
        Coord {
            x: self.length * self.angle.sin(),
            y: self.length * self.angle.cos(),
        }
    }
}

impl From<Coord> for Vector {
    fn from(c: Coord) -> Self {
        c.to_vector()
    }
}

impl From<Vector> for Coord {
    fn from(v: Vector) -> Self {
        v.to_coord()
    }
}
