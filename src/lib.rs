//! Easy-bbox: axis-aligned bounding boxes for detection post-processing.
//!
//! Object detectors report boxes as `(x1, y1, x2, y2[, class])` with no
//! ordering guarantee between the corners. This crate normalizes such output
//! into a validated [`BoundingBox`] and answers the questions usually asked
//! of it: how much of it another box covers, whether it touches another box,
//! whether a line crosses it, and what it looks like grown or shrunk.
//!
//! # Modules
//!
//! - [`geom`]: Box normalization, the [`BoundingBox`] entity, points and segments
//! - [`error`]: Error types for box operations

pub mod error;
pub mod geom;

pub use error::BBoxError;
pub use geom::{BoundingBox, Segment};
