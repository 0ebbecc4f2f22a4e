use porthole_core::description::{SavedView, ViewDescription};
use porthole_core::error::PortholeError;

fn sample_view() -> ViewDescription {
    ViewDescription {
        frame_width: 15.0,
        frame_height: 10.0,
        image_width: 3000.0,
        image_height: 1000.0,
        scale: 0.1 + 0.2, // deliberately awkward binary fraction
        offset_x: -123.456_789_012_345,
        offset_y: -0.000_000_001,
    }
}

#[test]
fn test_json_round_trip_is_lossless() {
    let saved = SavedView {
        image_id: "holiday-03.png".into(),
        view: sample_view(),
    };

    let text = saved.to_json().unwrap();
    let parsed = SavedView::from_json(&text).unwrap();

    assert_eq!(parsed, saved);
    assert_eq!(parsed.view.scale.to_bits(), saved.view.scale.to_bits());
    assert_eq!(parsed.view.offset_x.to_bits(), saved.view.offset_x.to_bits());
    assert_eq!(parsed.view.offset_y.to_bits(), saved.view.offset_y.to_bits());
}

#[test]
fn test_non_json_text_is_rejected() {
    for text in ["", "not json at all", "{", "[1, 2, 3]", "42"] {
        let err = SavedView::from_json(text).unwrap_err();
        assert!(
            matches!(err, PortholeError::MalformedDescription(_)),
            "{text:?} should be malformed"
        );
    }
}

#[test]
fn test_missing_field_is_rejected() {
    // A record without offset_y.
    let text = r#"{
        "image_id": "x",
        "view": {
            "frame_width": 15.0,
            "frame_height": 10.0,
            "image_width": 800.0,
            "image_height": 600.0,
            "scale": 1.0,
            "offset_x": 0.0
        }
    }"#;
    let err = SavedView::from_json(text).unwrap_err();
    assert!(matches!(err, PortholeError::MalformedDescription(_)));
}

#[test]
fn test_non_numeric_field_is_rejected() {
    let text = r#"{
        "image_id": "x",
        "view": {
            "frame_width": 15.0,
            "frame_height": 10.0,
            "image_width": 800.0,
            "image_height": 600.0,
            "scale": "big",
            "offset_x": 0.0,
            "offset_y": 0.0
        }
    }"#;
    let err = SavedView::from_json(text).unwrap_err();
    assert!(matches!(err, PortholeError::MalformedDescription(_)));
}

#[test]
fn test_degenerate_record_is_rejected() {
    let mut view = sample_view();
    view.image_height = 0.0;
    let text = SavedView {
        image_id: "x".into(),
        view,
    }
    .to_json()
    .unwrap();

    let err = SavedView::from_json(&text).unwrap_err();
    assert!(matches!(err, PortholeError::MalformedDescription(_)));
}

#[test]
fn test_validate_rejects_nonpositive_and_nonfinite() {
    let good = sample_view();
    assert!(good.validate().is_ok());

    let mut bad = good;
    bad.scale = -1.0;
    assert!(bad.validate().is_err());

    bad = good;
    bad.frame_width = 0.0;
    assert!(bad.validate().is_err());

    bad = good;
    bad.offset_x = f64::INFINITY;
    assert!(bad.validate().is_err());
}
