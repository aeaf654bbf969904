use egui::{pos2, vec2};
use pixelpad::view::{MAX_ZOOM, MIN_ZOOM, ViewTransform, ZOOM_EPSILON};

#[test]
fn identity_maps_screen_cells_directly() {
    let view = ViewTransform::new();
    assert_eq!(view.screen_to_canvas(pos2(0.0, 0.0)), Some((0, 0)));
    assert_eq!(view.screen_to_canvas(pos2(3.7, 5.2)), Some((3, 5)));
}

#[test]
fn screen_to_canvas_truncates_toward_zero() {
    let view = ViewTransform::new();
    // Truncation, not flooring: values in (-1, 1) all land in cell 0.
    assert_eq!(view.screen_to_canvas(pos2(-0.5, -0.9)), Some((0, 0)));
    assert_eq!(view.screen_to_canvas(pos2(-1.5, 2.9)), Some((-1, 2)));
}

#[test]
fn mapping_refuses_near_zero_zoom() {
    let mut view = ViewTransform::new();
    view.zoom = ZOOM_EPSILON;
    assert_eq!(view.screen_to_canvas(pos2(10.0, 10.0)), None);
    view.zoom = 0.0;
    assert_eq!(view.screen_to_canvas(pos2(10.0, 10.0)), None);
}

#[test]
fn pan_translates_without_touching_zoom() {
    let mut view = ViewTransform::new();
    view.pan(vec2(15.0, -4.0));
    view.pan(vec2(5.0, 4.0));
    assert_eq!(view.offset, vec2(20.0, 0.0));
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.screen_to_canvas(pos2(25.0, 3.0)), Some((5, 3)));
}

#[test]
fn canvas_to_screen_rect_scales_with_zoom() {
    let mut view = ViewTransform::new();
    view.zoom = 2.0;
    view.offset = vec2(10.0, 20.0);
    let rect = view.canvas_to_screen_rect(100, 50);
    assert_eq!(rect.min, pos2(10.0, 20.0));
    assert_eq!(rect.width(), 200.0);
    assert_eq!(rect.height(), 100.0);
}

#[test]
fn zoom_keeps_the_anchored_canvas_point_fixed() {
    let mut view = ViewTransform::new();
    let anchor = pos2(201.0, 151.0);

    let before = view.screen_to_canvas(anchor);
    assert!(view.zoom_at(anchor, 1.5));
    assert_eq!(view.screen_to_canvas(anchor), before);

    assert!(view.zoom_at(anchor, 0.5));
    assert_eq!(view.screen_to_canvas(anchor), before);
}

#[test]
fn zoom_anchor_holds_under_repeated_steps() {
    let mut view = ViewTransform::new();
    view.offset = vec2(12.0, -8.0);
    // Anchor mid-cell so float rounding across steps can't flip truncation.
    let anchor = pos2(97.5, 63.5);
    let before = view.screen_to_canvas(anchor);
    for _ in 0..6 {
        view.zoom_at(anchor, 1.1);
    }
    assert_eq!(view.screen_to_canvas(anchor), before);
}

#[test]
fn zoom_clamps_and_reports_no_change_at_the_limits() {
    let mut view = ViewTransform::new();
    view.zoom = MAX_ZOOM;
    let offset = view.offset;
    assert!(!view.zoom_at(pos2(50.0, 50.0), 2.0));
    assert_eq!(view.zoom, MAX_ZOOM);
    assert_eq!(view.offset, offset);

    view.zoom = MIN_ZOOM;
    assert!(!view.zoom_at(pos2(50.0, 50.0), 0.5));
    assert_eq!(view.zoom, MIN_ZOOM);
}

#[test]
fn zoom_partially_clamped_still_reports_a_change() {
    let mut view = ViewTransform::new();
    view.zoom = 16.0;
    assert!(view.zoom_at(pos2(0.0, 0.0), 2.0));
    assert_eq!(view.zoom, MAX_ZOOM);
}

#[test]
fn reset_restores_the_identity_view() {
    let mut view = ViewTransform::new();
    view.zoom_at(pos2(40.0, 40.0), 3.0);
    view.pan(vec2(100.0, -30.0));
    view.reset();
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.offset, vec2(0.0, 0.0));
}
