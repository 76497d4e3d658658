//! Fuzz target for box construction and queries.
//!
//! Arbitrary bytes are read as little-endian f64 values: two raw boxes, a
//! scale and four edge percentages. Construction may fail, but nothing may
//! panic and every successfully built box must keep its invariants.

#![no_main]

use easy_bbox::{BoundingBox, Segment};
use libfuzzer_sys::fuzz_target;

fn read_f64s(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect()
}

fn check(bbox: &BoundingBox) {
    assert!(bbox.xmin() < bbox.xmax());
    assert!(bbox.ymin() < bbox.ymax());
    assert_eq!(bbox.area(), bbox.dimensions().area());
    assert!(bbox.area() > 0);
}

fuzz_target!(|data: &[u8]| {
    let values = read_f64s(data);
    if values.len() < 15 {
        return;
    }

    let class_len = if values[14].is_sign_negative() { 4 } else { 5 };
    let Ok(a) = BoundingBox::new(&values[..class_len]) else {
        return;
    };
    check(&a);
    assert_eq!(a.iou(&a), 1.0);

    if let Ok(b) = BoundingBox::new(&values[5..9]) {
        check(&b);
        let iou = a.iou(&b);
        assert!((0.0..=1.0).contains(&iou));
        assert_eq!(a.box_intercept_box(&b), b.box_intercept_box(&a));

        let line = Segment::from_xyxy(b.xmin(), b.ymin(), b.xmax(), b.ymax());
        let _ = a.box_intercept_line(&line);
    }

    if let Ok(resized) = a.change_size(values[9]) {
        check(&resized);
        assert_eq!(resized.class_id(), a.class_id());
    }

    let percentages = [values[10], values[11], values[12], values[13]];
    if let Ok(resized) = a.precise_change_size(percentages) {
        check(&resized);
    }
});
