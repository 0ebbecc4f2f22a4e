use porthole_core::binding::{PanDirection, ViewportBinding};
use porthole_core::description::{SavedView, ViewDescription};
use porthole_core::error::PortholeError;
use porthole_core::frame::{FixedFrameSize, PixelSize};
use porthole_core::viewport::Viewport;

fn binding(px_w: f64, px_h: f64) -> ViewportBinding {
    ViewportBinding::new(Viewport::new(
        15.0,
        10.0,
        Box::new(FixedFrameSize(PixelSize { w: px_w, h: px_h })),
    ))
}

/// Binding with a 600x400 image loaded into a 300x200 frame.
fn loaded_binding() -> ViewportBinding {
    let mut b = binding(300.0, 200.0);
    let generation = b.begin_load("img-a");
    b.image_decoded(generation, 600.0, 400.0).unwrap();
    b
}

#[test]
fn test_controls_error_before_any_load() {
    let mut b = binding(300.0, 200.0);

    assert!(matches!(
        b.nudge(PanDirection::Left).unwrap_err(),
        PortholeError::NotLoaded
    ));
    assert!(matches!(
        b.set_zoom(30.0).unwrap_err(),
        PortholeError::NotLoaded
    ));
    assert!(matches!(
        b.export_view().unwrap_err(),
        PortholeError::NotLoaded
    ));
    assert!(!b.is_interactive());
}

#[test]
fn test_load_cycle_fits_and_enables_controls() {
    let mut b = binding(300.0, 200.0);

    let generation = b.begin_load("img-a");
    assert!(!b.is_interactive());
    assert!(!b.viewport().is_loaded());

    assert!(b.image_decoded(generation, 600.0, 400.0).unwrap());
    assert!(b.is_interactive());
    assert_eq!(b.viewport().scale(), b.viewport().min_scale());
    assert_eq!(b.viewport().offset(), (0.0, 0.0));
    assert_eq!(b.image_id(), Some("img-a"));
}

#[test]
fn test_stale_decode_result_is_ignored() {
    let mut b = binding(300.0, 200.0);

    let first = b.begin_load("img-a");
    let second = b.begin_load("img-b");

    // The first image's dimensions arrive after a newer load started.
    assert!(!b.image_decoded(first, 100.0, 100.0).unwrap());
    assert!(!b.is_interactive());
    assert!(!b.viewport().is_loaded());

    assert!(b.image_decoded(second, 600.0, 400.0).unwrap());
    assert!(b.is_interactive());
    assert_eq!(b.image_id(), Some("img-b"));
    assert_eq!(b.viewport().image_size(), Some((600.0, 400.0)));
}

#[test]
fn test_new_load_resets_previous_geometry() {
    let mut b = loaded_binding();
    b.set_zoom(60.0).unwrap();
    b.nudge(PanDirection::Left).unwrap();

    b.begin_load("img-b");
    assert!(!b.is_interactive());
    assert!(!b.viewport().is_loaded());
    assert!(matches!(
        b.nudge(PanDirection::Left).unwrap_err(),
        PortholeError::NotLoaded
    ));
}

#[test]
fn test_invalid_dimensions_abandon_the_load() {
    let mut b = binding(300.0, 200.0);
    let generation = b.begin_load("img-a");

    let err = b.image_decoded(generation, 0.0, 600.0).unwrap_err();
    assert!(matches!(err, PortholeError::InvalidDimensions { .. }));
    assert!(!b.is_interactive());
    assert!(!b.viewport().is_loaded());
}

#[test]
fn test_decode_failure_resets_unless_stale() {
    let mut b = loaded_binding();
    let stale = b.generation();

    b.begin_load("img-b");
    assert!(!b.decode_failed(stale));

    assert!(b.decode_failed(b.generation()));
    assert!(!b.is_interactive());
    assert!(!b.viewport().is_loaded());
}

#[test]
fn test_nudges_move_by_fixed_step() {
    let mut b = loaded_binding();
    // Scale 1.5 leaves 600 px of horizontal and 400 px of vertical slack.
    b.set_zoom(100.0).unwrap();
    let start = b.viewport().offset();

    b.nudge(PanDirection::Left).unwrap();
    assert_eq!(b.viewport().offset().0, start.0 - 10.0);
    b.nudge(PanDirection::Right).unwrap();
    assert_eq!(b.viewport().offset().0, start.0);
    b.nudge(PanDirection::Up).unwrap();
    assert_eq!(b.viewport().offset().1, start.1 - 10.0);
    b.nudge(PanDirection::Down).unwrap();
    assert_eq!(b.viewport().offset(), start);
}

#[test]
fn test_nudges_saturate_at_the_edge() {
    let mut b = loaded_binding();
    b.set_zoom(100.0).unwrap();

    for _ in 0..200 {
        b.nudge(PanDirection::Right).unwrap();
    }
    assert_eq!(b.viewport().offset().0, 0.0);

    b.nudge(PanDirection::Right).unwrap();
    assert_eq!(b.viewport().offset().0, 0.0);
}

#[test]
fn test_reset_view_returns_to_fitted_state() {
    let mut b = loaded_binding();
    b.set_zoom(85.0).unwrap();
    b.nudge(PanDirection::Down).unwrap();

    b.reset_view().unwrap();
    assert_eq!(b.viewport().scale(), b.viewport().min_scale());
    assert_eq!(b.viewport().offset(), (0.0, 0.0));
}

#[test]
fn test_export_import_round_trip() {
    let mut b = loaded_binding();
    b.set_zoom(40.0).unwrap();
    b.nudge(PanDirection::Left).unwrap();
    b.nudge(PanDirection::Up).unwrap();
    let text = b.export_json().unwrap();
    let saved_scale = b.viewport().scale();
    let saved_offset = b.viewport().offset();

    // Wander off, then restore.
    b.set_zoom(90.0).unwrap();
    b.nudge(PanDirection::Down).unwrap();
    b.import_json(&text).unwrap();

    assert_eq!(b.viewport().scale().to_bits(), saved_scale.to_bits());
    assert_eq!(b.viewport().offset().0.to_bits(), saved_offset.0.to_bits());
    assert_eq!(b.viewport().offset().1.to_bits(), saved_offset.1.to_bits());
}

#[test]
fn test_import_for_another_image_is_rejected() {
    let mut b = loaded_binding();
    let saved = b.export_view().unwrap();
    let before = b.viewport().describe().unwrap();

    let generation = b.begin_load("img-b");
    b.image_decoded(generation, 600.0, 400.0).unwrap();

    let err = b.import_view(&saved).unwrap_err();
    assert!(matches!(err, PortholeError::IdentityMismatch { .. }));
    // The newly loaded image keeps its fitted view.
    assert_eq!(b.viewport().scale(), b.viewport().min_scale());
    assert_eq!(b.viewport().offset(), (0.0, 0.0));
    assert_eq!(before.image_width, 600.0);
}

#[test]
fn test_import_wrong_frame_is_rejected_distinctly() {
    let mut b = loaded_binding();
    let mut saved = b.export_view().unwrap();
    saved.view.frame_width = 4.0;
    saved.view.frame_height = 3.0;

    let err = b.import_view(&saved).unwrap_err();
    assert!(matches!(err, PortholeError::FrameMismatch { .. }));
}

#[test]
fn test_import_before_load_is_rejected() {
    let mut b = binding(300.0, 200.0);
    let saved = SavedView {
        image_id: "img-a".into(),
        view: ViewDescription {
            frame_width: 15.0,
            frame_height: 10.0,
            image_width: 600.0,
            image_height: 400.0,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        },
    };

    assert!(matches!(
        b.import_view(&saved).unwrap_err(),
        PortholeError::NotLoaded
    ));
}

#[test]
fn test_import_malformed_text_leaves_state_untouched() {
    let mut b = loaded_binding();
    b.set_zoom(20.0).unwrap();
    let before = b.viewport().describe().unwrap();

    let err = b.import_json("{ definitely not a view }").unwrap_err();
    assert!(matches!(err, PortholeError::MalformedDescription(_)));
    assert_eq!(b.viewport().describe().unwrap(), before);
}
