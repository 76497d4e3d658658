//! Canonical box representation and the pure functions that derive it.
//!
//! Detectors report corners in whatever order they like. [`normalize`]
//! turns such a raw `(x1, y1, x2, y2[, class])` sequence into a
//! [`CanonicalBox`] with ordered integer corners, and the remaining
//! functions derive the measurements every query works from.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::{Point, Segment};
use crate::error::BBoxError;

/// Largest coordinate magnitude accepted from a raw box.
///
/// Keeps `width * height` well inside `i64`.
pub const COORD_LIMIT: f64 = (1u64 << 30) as f64;

/// A detector class identifier carried along with a box.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub i64);

impl ClassId {
    /// Creates a new ClassId.
    #[inline]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying i64 value.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered box: `xmin < xmax` and `ymin < ymax` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalBox {
    pub xmin: i64,
    pub ymin: i64,
    pub xmax: i64,
    pub ymax: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<ClassId>,
}

impl CanonicalBox {
    /// Returns the corners as `(xmin, ymin, xmax, ymax)`.
    #[inline]
    pub fn as_xyxy(&self) -> (i64, i64, i64, i64) {
        (self.xmin, self.ymin, self.xmax, self.ymax)
    }

    /// Returns the raw form of this box, suitable for feeding back to [`normalize`].
    pub fn to_raw(&self) -> Vec<f64> {
        let mut raw = vec![
            self.xmin as f64,
            self.ymin as f64,
            self.xmax as f64,
            self.ymax as f64,
        ];
        if let Some(class_id) = self.class_id {
            raw.push(class_id.as_i64() as f64);
        }
        raw
    }
}

/// Integer midpoint of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Middle {
    pub x: i64,
    pub y: i64,
}

impl Middle {
    #[inline]
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

/// Width and height of a box in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
}

impl Dimensions {
    #[inline]
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.width * self.height
    }
}

/// The four edges of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub top: Segment,
    pub bottom: Segment,
    pub left: Segment,
    pub right: Segment,
}

impl Walls {
    /// Iterates the walls in the order top, bottom, left, right.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        [&self.top, &self.bottom, &self.left, &self.right].into_iter()
    }
}

/// Normalizes a raw `(x1, y1, x2, y2[, class])` sequence.
///
/// Corners may be given in any order. Values are truncated toward zero.
///
/// # Errors
///
/// Returns [`BBoxError::InvalidBox`] if the sequence is not 4 or 5 values
/// long, contains a non-finite or out-of-range value, has equal x or equal
/// y coordinates, truncates to all zeros (likely normalized `[0, 1]`
/// input), or collapses to zero width or height after truncation.
pub fn normalize(raw: &[f64]) -> Result<CanonicalBox, BBoxError> {
    if raw.len() != 4 && raw.len() != 5 {
        return Err(reject(format!(
            "expected 4 or 5 values (x1, y1, x2, y2[, class]), got {}",
            raw.len()
        )));
    }

    if let Some(v) = raw.iter().find(|v| !v.is_finite()) {
        return Err(reject(format!("non-finite value {v}")));
    }

    if let Some(v) = raw[..4].iter().find(|v| v.abs() >= COORD_LIMIT) {
        return Err(reject(format!("coordinate {v} exceeds {COORD_LIMIT}")));
    }

    if raw[0] == raw[2] || raw[1] == raw[3] {
        return Err(reject(format!(
            "zero width or height ({}, {}, {}, {})",
            raw[0], raw[1], raw[2], raw[3]
        )));
    }

    let canonical = CanonicalBox {
        xmin: raw[0].min(raw[2]) as i64,
        ymin: raw[1].min(raw[3]) as i64,
        xmax: raw[0].max(raw[2]) as i64,
        ymax: raw[1].max(raw[3]) as i64,
        class_id: raw.get(4).map(|&c| ClassId::new(c as i64)),
    };

    let (xmin, ymin, xmax, ymax) = canonical.as_xyxy();
    let all_zero = xmin == 0
        && ymin == 0
        && xmax == 0
        && ymax == 0
        && canonical.class_id.is_none_or(|c| c.as_i64() == 0);
    if all_zero {
        return Err(reject(
            "all values truncate to 0; coordinates might be normalized",
        ));
    }

    if xmax <= xmin || ymax <= ymin {
        return Err(reject(format!(
            "box collapses to ({xmin}, {ymin}, {xmax}, {ymax}) after truncation"
        )));
    }

    Ok(canonical)
}

fn reject(reason: impl Into<String>) -> BBoxError {
    let err = BBoxError::invalid_box(reason);
    tracing::debug!(%err, "rejected raw box");
    err
}

/// Integer midpoint of a box, truncated toward zero.
pub fn middle(canonical: &CanonicalBox) -> Middle {
    Middle {
        x: (canonical.xmax + canonical.xmin) / 2,
        y: (canonical.ymax + canonical.ymin) / 2,
    }
}

pub fn dimensions(canonical: &CanonicalBox) -> Dimensions {
    Dimensions {
        width: canonical.xmax - canonical.xmin,
        height: canonical.ymax - canonical.ymin,
    }
}

pub fn walls(canonical: &CanonicalBox) -> Walls {
    let (xmin, ymin, xmax, ymax) = canonical.as_xyxy();
    Walls {
        top: Segment::new(Point::new(xmin, ymin), Point::new(xmax, ymin)),
        bottom: Segment::new(Point::new(xmin, ymax), Point::new(xmax, ymax)),
        left: Segment::new(Point::new(xmin, ymin), Point::new(xmin, ymax)),
        right: Segment::new(Point::new(xmax, ymin), Point::new(xmax, ymax)),
    }
}
