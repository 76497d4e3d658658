//! Geometry for axis-aligned bounding boxes.
//!
//! # Design Principles
//!
//! 1. **Validate Once**: raw detector output is normalized and checked when
//!    a [`BoundingBox`] is built; every later query trusts the cached values.
//!
//! 2. **Integer Pixels**: canonical corners, middles and dimensions are
//!    integers, truncated toward zero rather than rounded.
//!
//! 3. **Explicit Mutation**: each resize comes as a pure method returning a
//!    new box and an `*_in_place` method that replaces the receiver.
//!
//! # Example
//!
//! ```
//! use easy_bbox::geom::{BoundingBox, Segment};
//!
//! let space = BoundingBox::new(&[500.0, 20.0, 700.0, 350.0]).unwrap();
//! let car = BoundingBox::new(&[547.31, 41.473, 940.4, 712.92, 2.0]).unwrap();
//!
//! assert!(space.iou(&car) > 0.0);
//! assert!(space.box_intercept_box(&car));
//!
//! let shrunk = car.change_size(0.5).unwrap();
//! assert!(shrunk.area() < car.area());
//!
//! let line = Segment::from_xyxy(0, 100, 1000, 100);
//! assert!(space.box_intercept_line(&line));
//! ```

mod bounding_box;
pub mod canonical;
mod point;

// Re-export core types for convenient access
pub use bounding_box::BoundingBox;
pub use canonical::{
    dimensions, middle, normalize, walls, CanonicalBox, ClassId, Dimensions, Middle, Walls,
    COORD_LIMIT,
};
pub use point::{counterclockwise, segments_intersect, Point, Segment};
