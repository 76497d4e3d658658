//! Integer points and line segments, with the orientation-based crossing test.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A 2D point in pixel space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Creates a segment from `(x1, y1)` to `(x2, y2)`.
    #[inline]
    pub fn from_xyxy(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Returns the segment as `(x1, y1, x2, y2)`.
    #[inline]
    pub fn as_xyxy(&self) -> (i64, i64, i64, i64) {
        (self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// Returns true if the two segments properly cross.
    ///
    /// Collinear overlaps and segments that only touch at an endpoint are
    /// not reliably reported, since the orientation test is strict.
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, y1, x2, y2) = self.as_xyxy();
        write!(f, "Segment(({x1}, {y1}) -> ({x2}, {y2}))")
    }
}

impl From<(i64, i64, i64, i64)> for Segment {
    fn from((x1, y1, x2, y2): (i64, i64, i64, i64)) -> Self {
        Self::from_xyxy(x1, y1, x2, y2)
    }
}

/// Returns true if `c` lies strictly counterclockwise of the directed line `a -> b`.
///
/// Exact for every `i64` point: coordinate differences fit in 65 bits and
/// their products are compared as sign plus `u128` magnitude.
pub fn counterclockwise(a: Point, b: Point, c: Point) -> bool {
    let lhs = wide_mul(diff(c.y, a.y), diff(b.x, a.x));
    let rhs = wide_mul(diff(b.y, a.y), diff(c.x, a.x));
    cmp_wide(lhs, rhs) == Ordering::Greater
}

#[inline]
fn diff(a: i64, b: i64) -> i128 {
    a as i128 - b as i128
}

/// Product of two values with magnitude below `2^64`, as `(negative, magnitude)`.
#[inline]
fn wide_mul(a: i128, b: i128) -> (bool, u128) {
    let magnitude = a.unsigned_abs() * b.unsigned_abs();
    (magnitude != 0 && (a < 0) != (b < 0), magnitude)
}

fn cmp_wide((l_neg, l_mag): (bool, u128), (r_neg, r_mag): (bool, u128)) -> Ordering {
    match (l_neg, r_neg) {
        (false, false) => l_mag.cmp(&r_mag),
        (true, true) => r_mag.cmp(&l_mag),
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
    }
}

/// Returns true if segment `a-b` crosses segment `c-d`.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    counterclockwise(a, c, d) != counterclockwise(b, c, d)
        && counterclockwise(a, b, c) != counterclockwise(a, b, d)
}
