use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

use crate::Vector;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate, growing downward.
    pub y: f64,
}

impl Coord {
    /// Construct a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub fn zero() -> Self {
        (0.0, 0.0).into()
    }

    /// Is this the origin?
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Convert to a [`Vector`].
    ///
    /// The origin has length zero and a NaN angle. A point straight down the
    /// negative y axis yields an angle of `-0.0`, not `π`.
    pub fn to_vector(&self) -> Vector {
        Vector {
            length: (self.x * self.x + self.y * self.y).sqrt(),
            angle: (self.x / self.y).atan(),
        }
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sum for Coord {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<(f64, f64)> for Coord {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

/// Componentwise sum of any number of coordinates. The sum of nothing is the
/// origin.
pub fn add_coords(coords: &[Coord]) -> Coord {
    coords.iter().copied().sum()
}
