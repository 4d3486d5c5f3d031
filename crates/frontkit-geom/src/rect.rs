use serde::{Deserialize, Serialize};

use crate::{Coord, Direction, Error, LineSegment, Result};

/// An axis-aligned rectangle. The origin is the top-left corner, and y grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width
    pub w: f64,
    /// Height
    pub h: f64,
}

/// A rectangle expressed as its four edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Left edge.
    pub x1: f64,
    /// Top edge.
    pub y1: f64,
    /// Right edge.
    pub x2: f64,
    /// Bottom edge.
    pub y2: f64,
}

/// Where one rectangle touches another: the edge of the first rectangle that
/// is touched, and the stretch of that edge the two rectangles share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    /// The touched edge.
    pub dir: Direction,
    /// The shared stretch, along the axis of the touched edge.
    pub line: LineSegment,
}

impl Edges {
    /// Convert back to a rectangle.
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x1,
            y: self.y1,
            w: self.x2 - self.x1,
            h: self.y2 - self.y1,
        }
    }
}

impl Rect {
    /// Construct a new rectangle without validation.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Construct a new rectangle, rejecting negative or NaN extents.
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        if w >= 0.0 && h >= 0.0 {
            Ok(Self { x, y, w, h })
        } else {
            Err(Error::InvalidRect { w, h })
        }
    }

    /// The area of this rect.
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Does this rect have a zero area?
    pub fn is_zero(&self) -> bool {
        self.w == 0.0 || self.h == 0.0
    }

    /// The edge coordinates of this rect.
    pub fn edges(&self) -> Edges {
        Edges {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.w,
            y2: self.y + self.h,
        }
    }

    /// The projection of this rect onto the x axis.
    pub fn hline(&self) -> LineSegment {
        LineSegment::new(self.x, self.x + self.w)
    }

    /// The projection of this rect onto the y axis.
    pub fn vline(&self) -> LineSegment {
        LineSegment::new(self.y, self.y + self.h)
    }

    /// Does this rect overlap or touch another? Rects that share only an edge
    /// or a corner intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        let a = self.edges();
        let b = other.edges();
        a.x1 <= b.x2 && a.x2 >= b.x1 && a.y1 <= b.y2 && a.y2 >= b.y1
    }

    /// The overlapping region of two rects, or `None` if the overlap has no
    /// area.
    ///
    /// Rects that only share an edge produce `None` here even though
    /// [`intersects`](Self::intersects) reports them as intersecting.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let h = self.hline().overlap(&other.hline());
        let v = self.vline().overlap(&other.vline());
        if h.len() <= 0.0 || v.len() <= 0.0 {
            None
        } else {
            Some(Self {
                x: h.c1,
                y: v.c1,
                w: h.len(),
                h: v.len(),
            })
        }
    }

    /// Does other sit against one of the outer edges of this rect, within a
    /// tolerance of `pixel`?
    ///
    /// Edges are checked in the order left, right, top, bottom and the first
    /// match wins, so a rect touching two edges at once (at a corner, or when
    /// the tolerance is large) reports only the first. The returned line is
    /// the overlap of the two rects along the touched edge, and is
    /// [`LineSegment::ZERO`] when the edges line up but the rects do not
    /// share any of that stretch.
    pub fn touching(&self, other: &Self, pixel: f64) -> Option<Touch> {
        let a = self.edges();
        let b = other.edges();
        let near = |p: f64, q: f64| (p - q).abs() <= pixel;

        let dir = if near(a.x1, b.x2) {
            Direction::Left
        } else if near(a.x2, b.x1) {
            Direction::Right
        } else if near(a.y1, b.y2) {
            Direction::Up
        } else if near(a.y2, b.y1) {
            Direction::Down
        } else {
            return None;
        };
        let line = match dir {
            Direction::Left | Direction::Right => self.vline().overlap(&other.vline()),
            Direction::Up | Direction::Down => self.hline().overlap(&other.hline()),
        };
        tracing::trace!(?dir, ?line, pixel, "rects touching");
        Some(Touch { dir, line })
    }

    /// Does this rect contain the point? Points on the boundary are outside.
    pub fn contains_point(&self, p: Coord) -> bool {
        let e = self.edges();
        p.x > e.x1 && p.x < e.x2 && p.y > e.y1 && p.y < e.y2
    }
}

impl From<Edges> for Rect {
    fn from(e: Edges) -> Self {
        e.rect()
    }
}

impl From<Rect> for Edges {
    fn from(r: Rect) -> Self {
        r.edges()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn construct() -> Result<()> {
        assert_eq!(Rect::try_new(1.0, 2.0, 3.0, 4.0)?, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(Rect::try_new(0.0, 0.0, 0.0, 0.0)?.is_zero());
        assert!(Rect::try_new(0.0, 0.0, -1.0, 4.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 1.0, f64::NAN).is_err());
        assert_eq!(Rect::new(0.0, 0.0, 3.0, 4.0).area(), 12.0);
        Ok(())
    }

    #[test]
    fn edges() -> Result<()> {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            r.edges(),
            Edges {
                x1: 1.0,
                y1: 2.0,
                x2: 4.0,
                y2: 6.0
            }
        );
        assert_eq!(r.edges().rect(), r);
        assert_eq!(r.hline(), LineSegment::new(1.0, 4.0));
        assert_eq!(r.vline(), LineSegment::new(2.0, 6.0));
        Ok(())
    }

    #[test]
    fn intersect() -> Result<()> {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);

        let o = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(r.intersects(&o));
        assert_eq!(r.intersection(&o), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));

        let inner = Rect::new(2.0, 3.0, 4.0, 1.0);
        assert!(r.intersects(&inner));
        assert_eq!(r.intersection(&inner), Some(inner));
        assert_eq!(inner.intersection(&r), Some(inner));

        let o = Rect::new(-5.0, 2.0, 8.0, 20.0);
        assert_eq!(r.intersection(&o), Some(Rect::new(0.0, 2.0, 3.0, 8.0)));

        let far = Rect::new(20.0, 20.0, 1.0, 1.0);
        assert!(!r.intersects(&far));
        assert_eq!(r.intersection(&far), None);

        // Overlapping on one axis only.
        let beside = Rect::new(2.0, 11.0, 3.0, 3.0);
        assert!(!r.intersects(&beside));
        assert_eq!(r.intersection(&beside), None);
        Ok(())
    }

    #[test]
    fn touching_edges_intersect_without_area() -> Result<()> {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);

        let right = Rect::new(10.0, 2.0, 5.0, 5.0);
        assert!(r.intersects(&right));
        assert_eq!(r.intersection(&right), None);

        let below = Rect::new(0.0, 10.0, 10.0, 5.0);
        assert!(r.intersects(&below));
        assert_eq!(r.intersection(&below), None);

        let corner = Rect::new(10.0, 10.0, 1.0, 1.0);
        assert!(r.intersects(&corner));
        assert_eq!(r.intersection(&corner), None);
        Ok(())
    }

    #[test]
    fn touching() -> Result<()> {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);

        assert_eq!(
            r.touching(&Rect::new(5.0, 12.0, 5.0, 4.0), 0.0),
            Some(Touch {
                dir: Direction::Left,
                line: LineSegment::new(12.0, 16.0)
            })
        );
        assert_eq!(
            r.touching(&Rect::new(20.0, 5.0, 5.0, 10.0), 0.0),
            Some(Touch {
                dir: Direction::Right,
                line: LineSegment::new(10.0, 15.0)
            })
        );
        assert_eq!(
            r.touching(&Rect::new(0.0, 0.0, 30.0, 10.0), 0.0),
            Some(Touch {
                dir: Direction::Up,
                line: LineSegment::new(10.0, 20.0)
            })
        );
        assert_eq!(
            r.touching(&Rect::new(15.0, 20.0, 2.0, 2.0), 0.0),
            Some(Touch {
                dir: Direction::Down,
                line: LineSegment::new(15.0, 17.0)
            })
        );
        assert_eq!(r.touching(&Rect::new(30.0, 30.0, 2.0, 2.0), 0.0), None);
        Ok(())
    }

    #[test]
    fn touching_tolerance() -> Result<()> {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        let gap = Rect::new(22.0, 12.0, 5.0, 5.0);
        assert_eq!(r.touching(&gap, 0.0), None);
        assert_eq!(r.touching(&gap, 1.0), None);
        assert_eq!(
            r.touching(&gap, 2.0),
            Some(Touch {
                dir: Direction::Right,
                line: LineSegment::new(12.0, 17.0)
            })
        );
        // Slight overlap is also within tolerance.
        let overlap = Rect::new(19.0, 12.0, 5.0, 5.0);
        assert_eq!(r.touching(&overlap, 1.0).map(|t| t.dir), Some(Direction::Right));
        Ok(())
    }

    #[test]
    fn touching_priority() -> Result<()> {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        // Diagonal neighbour sits against both the left and top edges.
        let corner = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert_eq!(
            r.touching(&corner, 0.0),
            Some(Touch {
                dir: Direction::Left,
                line: LineSegment::new(10.0, 10.0)
            })
        );
        // Edge aligned, but no shared stretch.
        let apart = Rect::new(5.0, 40.0, 5.0, 5.0);
        assert_eq!(
            r.touching(&apart, 0.0),
            Some(Touch {
                dir: Direction::Left,
                line: LineSegment::ZERO
            })
        );
        Ok(())
    }

    #[test]
    fn contains_point() -> Result<()> {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Coord::new(5.0, 5.0)));
        assert!(r.contains_point(Coord::new(0.5, 9.5)));
        assert!(!r.contains_point(Coord::new(0.0, 5.0)));
        assert!(!r.contains_point(Coord::new(10.0, 5.0)));
        assert!(!r.contains_point(Coord::new(5.0, 10.0)));
        assert!(!r.contains_point(Coord::new(0.0, 0.0)));
        assert!(!r.contains_point(Coord::new(-1.0, 5.0)));
        Ok(())
    }

    fn grid_rect() -> impl Strategy<Value = Rect> {
        (0i32..20, 0i32..20, 0i32..8, 0i32..8)
            .prop_map(|(x, y, w, h)| Rect::new(x as f64, y as f64, w as f64, h as f64))
    }

    proptest! {
        #[test]
        fn intersection_agrees_with_positive_overlap(r in grid_rect(), o in grid_rect()) {
            let (a, b) = (r.edges(), o.edges());
            let w = a.x2.min(b.x2) - a.x1.max(b.x1);
            let h = a.y2.min(b.y2) - a.y1.max(b.y1);
            let positive = w > 0.0 && h > 0.0;

            let i = r.intersection(&o);
            prop_assert_eq!(i.is_some(), positive, "{:?} {:?}", r, o);
            if let Some(i) = i {
                prop_assert!(r.intersects(&o));
                prop_assert_eq!(i.area(), w * h);
                prop_assert_eq!(Some(i), o.intersection(&r));
            }
        }
    }
}
