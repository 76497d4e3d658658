#![allow(dead_code)]

use easy_bbox::BoundingBox;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Tolerance, in pixels, for corners recomputed through a truncating resize.
pub const TRUNCATION_TOLERANCE: i64 = 1;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Raw `(x1, y1, x2, y2)` with integer values, non-zero extent and corners in
/// arbitrary order.
pub fn arb_raw_box() -> BoxedStrategy<[f64; 4]> {
    (
        -10_000i64..10_000,
        -10_000i64..10_000,
        1i64..5_000,
        1i64..5_000,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(x, y, w, h, flip_x, flip_y)| {
            let (x1, x2) = if flip_x { (x + w, x) } else { (x, x + w) };
            let (y1, y2) = if flip_y { (y + h, y) } else { (y, y + h) };
            [x1 as f64, y1 as f64, x2 as f64, y2 as f64]
        })
        .boxed()
}

/// Like [`arb_raw_box`] but with a class id appended.
pub fn arb_raw_box_with_class() -> BoxedStrategy<[f64; 5]> {
    (arb_raw_box(), 0i64..80)
        .prop_map(|([x1, y1, x2, y2], class)| [x1, y1, x2, y2, class as f64])
        .boxed()
}

pub fn arb_bbox() -> BoxedStrategy<BoundingBox> {
    prop_oneof![
        arb_raw_box().prop_map(|raw| BoundingBox::try_from(raw).expect("generated box is valid")),
        arb_raw_box_with_class()
            .prop_map(|raw| BoundingBox::try_from(raw).expect("generated box is valid")),
    ]
    .boxed()
}

/// Returns true if every corner of `a` is within `tolerance` of `b`.
pub fn corners_close(a: &BoundingBox, b: &BoundingBox, tolerance: i64) -> bool {
    a.as_slice()[..4]
        .iter()
        .zip(&b.as_slice()[..4])
        .all(|(l, r)| (l - r).abs() <= tolerance)
}
