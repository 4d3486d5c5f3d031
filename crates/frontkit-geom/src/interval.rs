//! Closed interval algebra.
//!
//! All operations treat intervals as closed ranges `[start, end]`, and all of
//! them agree on adjacency: two intervals that share only a boundary point
//! are considered overlapping, so `[1, 3]` and `[3, 5]` merge into `[1, 5]`.
//! Results are always emitted in ascending order of `start`.
//!
//! None of these functions validate their input. An interval with
//! `start > end` produces an unspecified result, but never a panic. Use
//! [`Interval::try_new`] at the boundary if input is untrusted.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A closed numeric range `[start, end]`.
///
/// An interval with `start == end` is a valid single point and is preserved
/// by every operation in this module. Intervals serialize as a two-element
/// array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    /// Lower bound, inclusive.
    pub start: f64,
    /// Upper bound, inclusive.
    pub end: f64,
}

impl Interval {
    /// Construct an interval without validation.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Construct an interval, rejecting NaN bounds and `start > end`.
    pub fn try_new(start: f64, end: f64) -> Result<Self> {
        // Comparisons with NaN are false, so this also catches NaN bounds.
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(Error::InvalidInterval { start, end })
        }
    }

    /// The length of the interval. Zero for a point interval.
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Does the interval contain no points at all? Only a reversed interval
    /// is empty; a point interval is not.
    pub fn is_empty(&self) -> bool {
        self.start > self.end || self.start.is_nan() || self.end.is_nan()
    }

    /// Is this a single-point interval?
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Does the interval contain the value? Both bounds are inclusive.
    pub fn contains(&self, v: f64) -> bool {
        self.start <= v && v <= self.end
    }

    /// Do the two intervals share at least one point?
    pub fn touches(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// The overlap of two intervals, or `None` if they are disjoint.
    ///
    /// Intervals that meet at a single point intersect in a point interval.
    ///
    /// ```
    /// # use frontkit_geom::Interval;
    /// let a = Interval::new(3.0, 8.0);
    /// assert_eq!(a.intersection(&Interval::new(5.0, 9.0)), Some(Interval::new(5.0, 8.0)));
    /// assert_eq!(a.intersection(&Interval::new(8.0, 9.0)), Some(Interval::new(8.0, 8.0)));
    /// assert_eq!(a.intersection(&Interval::new(9.0, 10.0)), None);
    /// ```
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start > end {
            None
        } else {
            Some(Self { start, end })
        }
    }
}

impl From<(f64, f64)> for Interval {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self {
            start: v.0,
            end: v.1,
        }
    }
}

impl From<[f64; 2]> for Interval {
    #[inline]
    fn from(v: [f64; 2]) -> Self {
        Self {
            start: v[0],
            end: v[1],
        }
    }
}

impl From<Interval> for [f64; 2] {
    fn from(v: Interval) -> Self {
        [v.start, v.end]
    }
}

/// Free-function form of [`Interval::intersection`].
pub fn intersection(a: &Interval, b: &Interval) -> Option<Interval> {
    a.intersection(b)
}

/// Merge a set of intervals into the minimal ascending set covering the same
/// points. Overlapping and touching intervals are joined.
///
/// ```
/// # use frontkit_geom::{Interval, interval::union};
/// let merged = union(&[
///     Interval::new(6.0, 8.0),
///     Interval::new(1.0, 7.0),
///     Interval::new(2.0, 4.0),
///     Interval::new(9.0, 10.0),
/// ]);
/// assert_eq!(merged, [Interval::new(1.0, 8.0), Interval::new(9.0, 10.0)]);
/// ```
pub fn union(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut ret = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut open) = iter.next() else {
        return ret;
    };
    for next in iter {
        if next.start <= open.end {
            open.end = open.end.max(next.end);
        } else {
            ret.push(open);
            open = next;
        }
    }
    ret.push(open);
    ret
}

/// The parts of `domain` not covered by any of `intervals`, in ascending
/// order.
///
/// Gaps always have a strictly positive width: a gap that would collapse to a
/// single point is dropped. If `intervals` is empty the domain is returned
/// unchanged.
pub fn multi_complement(domain: Interval, intervals: &[Interval]) -> Vec<Interval> {
    if intervals.is_empty() {
        return vec![domain];
    }
    let merged = union(intervals);

    let mut ret = vec![];
    let mut cursor = domain.start;
    for iv in &merged {
        if iv.start > domain.end {
            break;
        }
        if iv.start > cursor {
            ret.push(Interval::new(cursor, iv.start));
        }
        cursor = cursor.max(iv.end);
    }
    if cursor < domain.end {
        ret.push(Interval::new(cursor, domain.end));
    }
    tracing::trace!(
        merged = merged.len(),
        gaps = ret.len(),
        "complement within [{}, {}]",
        domain.start,
        domain.end
    );
    ret
}

/// The parts of `domain` covered by at least one of `intervals`, in
/// ascending order with overlaps coalesced.
///
/// A merged interval that only meets the domain at a boundary contributes a
/// point interval; one that misses it entirely contributes nothing.
pub fn multi_intersection(domain: Interval, intervals: &[Interval]) -> Vec<Interval> {
    union(intervals)
        .iter()
        .filter_map(|iv| iv.intersection(&domain))
        .collect()
}

/// Total length covered by a set of intervals. Overlaps are counted once.
pub fn measure(intervals: &[Interval]) -> f64 {
    union(intervals).iter().map(Interval::len).sum()
}
