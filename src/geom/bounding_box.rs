//! The [`BoundingBox`] entity: a validated box with its derived measurements cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use super::canonical::{self, CanonicalBox, ClassId, Dimensions, Middle, Walls};
use super::point::Segment;
use crate::error::BBoxError;

/// An axis-aligned bounding box built from detector output.
///
/// Construction normalizes the raw corners and caches the middle,
/// dimensions, area and walls. Every query reads those cached values;
/// the `*_in_place` resize methods recompute all of them together and only
/// swap them in once the new box has been validated.
///
/// # Example
///
/// ```
/// use easy_bbox::BoundingBox;
///
/// let bbox = BoundingBox::new(&[400.0, 400.0, 200.0, 200.0]).unwrap();
/// assert_eq!(bbox.as_slice(), &[200, 200, 400, 400]);
/// assert_eq!(bbox.middle().as_tuple(), (300, 300));
/// assert_eq!(bbox.area(), 40_000);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    canonical: CanonicalBox,
    middle: Middle,
    dimensions: Dimensions,
    area: i64,
    walls: Walls,
    values: [i64; 5],
    len: usize,
}

impl BoundingBox {
    /// Creates a box from a raw `(x1, y1, x2, y2[, class])` sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BBoxError::InvalidBox`] for anything [`canonical::normalize`]
    /// rejects.
    pub fn new(raw: &[f64]) -> Result<Self, BBoxError> {
        Self::from_canonical(canonical::normalize(raw)?)
    }

    /// Creates a box without a class id.
    pub fn from_xyxy(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, BBoxError> {
        Self::new(&[x1, y1, x2, y2])
    }

    /// Creates a box carrying a class id, as appended by most detectors.
    pub fn from_xyxy_class(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        class_id: f64,
    ) -> Result<Self, BBoxError> {
        Self::new(&[x1, y1, x2, y2, class_id])
    }

    fn from_canonical(canonical: CanonicalBox) -> Result<Self, BBoxError> {
        let middle = canonical::middle(&canonical);
        let dimensions = canonical::dimensions(&canonical);
        let area = dimensions.area();
        if area <= 0 {
            return Err(BBoxError::invalid_box(format!(
                "area must be greater than 0, got {area}"
            )));
        }

        let (xmin, ymin, xmax, ymax) = canonical.as_xyxy();
        let (values, len) = match canonical.class_id {
            Some(class_id) => ([xmin, ymin, xmax, ymax, class_id.as_i64()], 5),
            None => ([xmin, ymin, xmax, ymax, 0], 4),
        };

        Ok(Self {
            middle,
            dimensions,
            area,
            walls: canonical::walls(&canonical),
            canonical,
            values,
            len,
        })
    }

    #[inline]
    pub fn canonical(&self) -> &CanonicalBox {
        &self.canonical
    }

    #[inline]
    pub fn xmin(&self) -> i64 {
        self.canonical.xmin
    }

    #[inline]
    pub fn ymin(&self) -> i64 {
        self.canonical.ymin
    }

    #[inline]
    pub fn xmax(&self) -> i64 {
        self.canonical.xmax
    }

    #[inline]
    pub fn ymax(&self) -> i64 {
        self.canonical.ymax
    }

    #[inline]
    pub fn class_id(&self) -> Option<ClassId> {
        self.canonical.class_id
    }

    #[inline]
    pub fn middle(&self) -> Middle {
        self.middle
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Returns the area in pixels. Always positive.
    #[inline]
    pub fn area(&self) -> i64 {
        self.area
    }

    #[inline]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    /// Returns `(xmin, ymin, xmax, ymax[, class])`.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.values[..self.len]
    }

    /// Number of values in [`as_slice`](Self::as_slice): 4, or 5 with a class id.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a box holds at least its four corners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the value at `index` in [`as_slice`](Self::as_slice).
    ///
    /// # Errors
    ///
    /// Returns [`BBoxError::IndexOutOfRange`] past the end of the sequence.
    pub fn get(&self, index: usize) -> Result<i64, BBoxError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(BBoxError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Returns the fraction of this box covered by `other`.
    ///
    /// The intersection area is divided by `self.area()` only, not by the
    /// union, so `a.iou(&b)` and `b.iou(&a)` differ when the areas differ.
    /// Thresholds tuned against this value depend on that.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let x_left = self.xmin().max(other.xmin());
        let y_top = self.ymin().max(other.ymin());
        let x_right = self.xmax().min(other.xmax());
        let y_bottom = self.ymax().min(other.ymax());

        if x_right < x_left || y_bottom < y_top {
            return 0.0;
        }

        if self.area == 0 {
            return 0.0;
        }

        let intersection_area = (x_right - x_left) * (y_bottom - y_top);
        intersection_area as f64 / self.area as f64
    }

    /// Returns true if `line` crosses any wall of this box.
    ///
    /// A line lying entirely inside the box crosses no wall and returns false.
    pub fn box_intercept_line(&self, line: &Segment) -> bool {
        self.walls.iter().any(|wall| wall.intersects(line))
    }

    /// Returns true unless the boxes are separated on some axis.
    ///
    /// Boxes that share only an edge or a corner count as overlapping.
    pub fn box_intercept_box(&self, other: &BoundingBox) -> bool {
        !(self.xmin() > other.xmax()
            || self.xmax() < other.xmin()
            || self.ymin() > other.ymax()
            || self.ymax() < other.ymin())
    }

    /// Returns a copy scaled by `percentage` about the middle.
    ///
    /// # Errors
    ///
    /// Returns [`BBoxError::InvalidArgument`] unless `percentage` is a
    /// positive finite number, and [`BBoxError::InvalidBox`] if the scaled
    /// box collapses.
    pub fn change_size(&self, percentage: f64) -> Result<BoundingBox, BBoxError> {
        if !(percentage > 0.0 && percentage.is_finite()) {
            return Err(BBoxError::InvalidArgument {
                name: "percentage",
                value: percentage,
                expected: "must be a finite number greater than 0",
            });
        }

        let new_width = self.dimensions.width as f64 * percentage;
        let new_height = self.dimensions.height as f64 * percentage;
        let (mid_x, mid_y) = (self.middle.x as f64, self.middle.y as f64);

        let corners = [
            (mid_x - new_width / 2.0).trunc(),
            (mid_y - new_height / 2.0).trunc(),
            (mid_x + new_width / 2.0).trunc(),
            (mid_y + new_height / 2.0).trunc(),
        ];
        tracing::trace!(percentage, ?corners, "change_size");
        self.with_corners(corners)
    }

    /// Scales this box by `percentage` about its middle, replacing its state.
    ///
    /// On error the box is left unchanged.
    pub fn change_size_in_place(&mut self, percentage: f64) -> Result<(), BBoxError> {
        *self = self.change_size(percentage)?;
        Ok(())
    }

    /// Returns a copy with each edge moved independently.
    ///
    /// `percentages` are given as `(xmin, ymin, xmax, ymax)` in `[0, 1]` and
    /// are remapped to signed offsets with `2 * p - 1`. An edge lands at
    /// `middle -/+ half_dimension * offset`, so `1.0` keeps the edge where
    /// it is, `0.5` pulls it onto the middle and `0.0` pushes it to the
    /// opposite side.
    ///
    /// # Errors
    ///
    /// Returns [`BBoxError::InvalidArgument`] for a non-finite percentage and
    /// [`BBoxError::InvalidBox`] if the resulting box is degenerate.
    pub fn precise_change_size(&self, percentages: [f64; 4]) -> Result<BoundingBox, BBoxError> {
        if let Some(&value) = percentages.iter().find(|p| !p.is_finite()) {
            return Err(BBoxError::InvalidArgument {
                name: "percentages",
                value,
                expected: "must be finite",
            });
        }

        let [x_min, y_min, x_max, y_max] = percentages.map(|p| p * 2.0 - 1.0);
        let half_width = self.dimensions.width as f64 / 2.0;
        let half_height = self.dimensions.height as f64 / 2.0;
        let (mid_x, mid_y) = (self.middle.x as f64, self.middle.y as f64);

        let corners = [
            (mid_x - half_width * x_min).trunc(),
            (mid_y - half_height * y_min).trunc(),
            (mid_x + half_width * x_max).trunc(),
            (mid_y + half_height * y_max).trunc(),
        ];
        tracing::trace!(?percentages, ?corners, "precise_change_size");
        self.with_corners(corners)
    }

    /// Moves each edge of this box independently, replacing its state.
    ///
    /// On error the box is left unchanged.
    pub fn precise_change_size_in_place(
        &mut self,
        percentages: [f64; 4],
    ) -> Result<(), BBoxError> {
        *self = self.precise_change_size(percentages)?;
        Ok(())
    }

    fn with_corners(&self, corners: [f64; 4]) -> Result<BoundingBox, BBoxError> {
        let mut raw = corners.to_vec();
        if let Some(class_id) = self.class_id() {
            raw.push(class_id.as_i64() as f64);
        }
        Self::new(&raw)
    }
}

impl Index<usize> for BoundingBox {
    type Output = i64;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`; use [`BoundingBox::get`] to avoid it.
    fn index(&self, index: usize) -> &i64 {
        &self.as_slice()[index]
    }
}

impl TryFrom<&[f64]> for BoundingBox {
    type Error = BBoxError;

    fn try_from(raw: &[f64]) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = BBoxError;

    fn try_from(raw: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl TryFrom<[f64; 5]> for BoundingBox {
    type Error = BBoxError;

    fn try_from(raw: [f64; 5]) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BoundingBox");
        s.field("xmin", &self.xmin())
            .field("ymin", &self.ymin())
            .field("xmax", &self.xmax())
            .field("ymax", &self.ymax());
        if let Some(class_id) = self.class_id() {
            s.field("class_id", &class_id);
        }
        s.finish()
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (xmin, ymin, xmax, ymax) = self.canonical.as_xyxy();
        write!(f, "box: ({xmin}, {ymin}, {xmax}, {ymax})")?;
        if let Some(class_id) = self.class_id() {
            write!(f, " class {class_id}")?;
        }
        writeln!(f)?;
        writeln!(f, "middle: ({}, {})", self.middle.x, self.middle.y)?;
        writeln!(
            f,
            "dimensions: {}x{} (area {})",
            self.dimensions.width, self.dimensions.height, self.area
        )?;
        write!(
            f,
            "walls: top {:?}, bottom {:?}, left {:?}, right {:?}",
            self.walls.top, self.walls.bottom, self.walls.left, self.walls.right
        )
    }
}

// Serialized as the plain detector sequence, so any 4/5 number array round-trips
// through full validation.
impl Serialize for BoundingBox {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<f64>::deserialize(deserializer)?;
        BoundingBox::new(&raw).map_err(serde::de::Error::custom)
    }
}
