use serde::{Deserialize, Serialize};

use crate::Interval;

/// A directionless one-dimensional line segment: the projection of a pair of
/// rectangle edges onto one axis.
///
/// The operations here expect `c1 <= c2`. Callers projecting rectangle edges
/// get that for free as long as widths and heights are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    /// The near end of the segment.
    pub c1: f64,
    /// The far end of the segment.
    pub c2: f64,
}

impl LineSegment {
    /// The value [`overlap`](Self::overlap) returns for segments that do not
    /// meet.
    pub const ZERO: Self = Self { c1: 0.0, c2: 0.0 };

    /// Construct a new segment.
    pub fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }

    /// The length of the segment.
    pub fn len(&self) -> f64 {
        self.c2 - self.c1
    }

    /// Does this segment have zero (or negative) length?
    pub fn is_zero(&self) -> bool {
        self.len() <= 0.0
    }

    /// Do these segments share at least one point? Segments that meet end to
    /// end touch.
    pub fn touches(&self, other: &Self) -> bool {
        self.c1 <= other.c2 && other.c1 <= self.c2
    }

    /// Does other lie completely within this segment.
    pub fn contains(&self, other: &Self) -> bool {
        self.c1 <= other.c1 && self.c2 >= other.c2
    }

    /// Return the overlap between this segment and other.
    ///
    /// Segments that do not meet produce [`LineSegment::ZERO`]. Segments that
    /// meet end to end produce a zero-length segment at the shared point,
    /// which is only distinguishable from `ZERO` when that point is not the
    /// origin. Use [`intersection`](Self::intersection) when the difference
    /// matters.
    pub fn overlap(&self, other: &Self) -> Self {
        if other.c1 > self.c2 || other.c2 < self.c1 {
            Self::ZERO
        } else if self.contains(other) {
            *other
        } else if other.contains(self) {
            *self
        } else if self.c1 <= other.c1 {
            Self {
                c1: other.c1,
                c2: self.c2,
            }
        } else {
            Self {
                c1: self.c1,
                c2: other.c2,
            }
        }
    }

    /// Return the overlap between this segment and other, or `None` if they
    /// are disjoint. Unlike [`overlap`](Self::overlap), a zero-length result
    /// always means the segments touch.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if self.touches(other) {
            Some(self.overlap(other))
        } else {
            None
        }
    }
}

impl From<Interval> for LineSegment {
    fn from(v: Interval) -> Self {
        Self {
            c1: v.start,
            c2: v.end,
        }
    }
}

impl From<LineSegment> for Interval {
    fn from(v: LineSegment) -> Self {
        Self::new(v.c1, v.c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    fn seg(c1: f64, c2: f64) -> LineSegment {
        LineSegment::new(c1, c2)
    }

    #[test]
    fn len() -> Result<()> {
        assert_eq!(seg(5.0, 10.0).len(), 5.0);
        assert!(seg(5.0, 5.0).is_zero());
        assert!(!seg(5.0, 6.0).is_zero());
        Ok(())
    }

    #[test]
    fn interval_conversion() -> Result<()> {
        assert_eq!(LineSegment::from(Interval::new(1.0, 2.0)), seg(1.0, 2.0));
        assert_eq!(Interval::from(seg(3.0, 3.0)), Interval::new(3.0, 3.0));
        Ok(())
    }

    #[test]
    fn overlap() -> Result<()> {
        let l = seg(5.0, 10.0);

        // Contained
        assert_eq!(l.overlap(&seg(6.0, 8.0)), seg(6.0, 8.0));
        // Containing
        assert_eq!(l.overlap(&seg(1.0, 11.0)), l);
        // Overlapping right
        assert_eq!(l.overlap(&seg(6.0, 14.0)), seg(6.0, 10.0));
        // Overlapping left
        assert_eq!(l.overlap(&seg(0.0, 8.0)), seg(5.0, 8.0));
        assert_eq!(l.overlap(&l), l);
        // Disjoint before and after
        assert_eq!(l.overlap(&seg(0.0, 2.0)), LineSegment::ZERO);
        assert_eq!(l.overlap(&seg(12.0, 14.0)), LineSegment::ZERO);
        // Touching
        assert_eq!(l.overlap(&seg(10.0, 12.0)), seg(10.0, 10.0));
        assert_eq!(l.overlap(&seg(0.0, 5.0)), seg(5.0, 5.0));
        Ok(())
    }

    #[test]
    fn sentinel_ambiguity() -> Result<()> {
        // Touching at the origin is indistinguishable from no overlap at all.
        let a = seg(-2.0, 0.0);
        let b = seg(0.0, 3.0);
        let far = seg(4.0, 6.0);
        assert_eq!(a.overlap(&b), LineSegment::ZERO);
        assert_eq!(a.overlap(&far), LineSegment::ZERO);

        assert_eq!(a.intersection(&b), Some(LineSegment::ZERO));
        assert_eq!(a.intersection(&far), None);
        Ok(())
    }

    #[test]
    fn touches() -> Result<()> {
        let v = seg(1.0, 4.0);
        assert!(v.touches(&seg(4.0, 8.0)));
        assert!(v.touches(&seg(0.0, 1.0)));
        assert!(v.touches(&seg(2.0, 3.0)));
        assert!(!v.touches(&seg(4.5, 8.0)));
        assert!(!v.touches(&seg(-1.0, 0.5)));
        Ok(())
    }

    #[test]
    fn contains() -> Result<()> {
        let v = seg(1.0, 4.0);
        assert!(v.contains(&seg(1.0, 4.0)));
        assert!(!v.contains(&seg(1.0, 5.0)));
        assert!(!v.contains(&seg(2.0, 5.0)));
        assert!(!v.contains(&seg(0.0, 2.0)));
        Ok(())
    }
}
