//! Serialization of boxes and canonical records through serde_json.

use easy_bbox::geom::{normalize, CanonicalBox, ClassId};
use easy_bbox::BoundingBox;

#[test]
fn bounding_box_serializes_as_detector_sequence() {
    let bbox = BoundingBox::new(&[30.7, 40.2, 10.0, 20.0, 5.0]).expect("box");
    let json = serde_json::to_string(&bbox).expect("serialize");
    assert_eq!(json, "[10,20,30,40,5]");

    let plain = BoundingBox::new(&[30.0, 40.0, 10.0, 20.0]).expect("box");
    assert_eq!(serde_json::to_string(&plain).expect("serialize"), "[10,20,30,40]");
}

#[test]
fn bounding_box_deserializes_through_validation() {
    let bbox: BoundingBox = serde_json::from_str("[547.31, 41.473, 940.4, 712.92, 2]").expect("parse");
    assert_eq!(bbox.as_slice(), &[547, 41, 940, 712, 2]);
    assert_eq!(bbox.class_id(), Some(ClassId::new(2)));

    let err = serde_json::from_str::<BoundingBox>("[5, 5, 5, 5]").unwrap_err();
    assert!(err.to_string().contains("Invalid box"), "{err}");

    assert!(serde_json::from_str::<BoundingBox>("[1, 2, 3]").is_err());
}

#[test]
fn canonical_box_serializes_as_struct() {
    let canonical = normalize(&[1.0, 2.0, 3.0, 4.0]).expect("normalize");
    let json = serde_json::to_value(canonical).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "xmin": 1, "ymin": 2, "xmax": 3, "ymax": 4 })
    );

    let restored: CanonicalBox = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored, canonical);
}
