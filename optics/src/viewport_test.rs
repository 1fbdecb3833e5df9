#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{FIT_PADDING_PX, ZOOM_STEP_IN, ZOOM_STEP_OUT};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// Bench bounds for a 300 mm setup: x along the axis, y perpendicular.
fn bench_bounds() -> SceneBounds {
    SceneBounds { min_x: -30.0, max_x: 330.0, min_y: -60.0, max_y: 60.0 }
}

fn horizontal_viewport() -> Viewport {
    Viewport::create(800.0, 600.0, bench_bounds(), FIT_PADDING_PX, Orientation::Horizontal)
}

fn vertical_viewport() -> Viewport {
    Viewport::create(800.0, 600.0, bench_bounds(), FIT_PADDING_PX, Orientation::Vertical)
}

// --- Auto-fit ---

#[test]
fn fit_scale_is_set_by_the_tighter_axis() {
    let vp = horizontal_viewport();
    // 640 px for 360 mm along the axis, 440 px for 120 mm across it.
    assert!(approx_eq(vp.scale, (800.0 - 160.0) / 360.0));
    assert!(approx_eq(vp.scale, (640.0 / 360.0f64).min(440.0 / 120.0)));
}

#[test]
fn fit_scale_vertical_uses_canvas_height_for_the_axis() {
    let vp = vertical_viewport();
    assert!(approx_eq(vp.scale, (600.0 - 160.0) / 360.0));
}

#[test]
fn fit_centers_the_scene_on_the_canvas() {
    let bounds = bench_bounds();
    let center_x = bounds.center_x();
    let center_y = bounds.center_y();

    let h = horizontal_viewport().world_to_screen(center_x, center_y);
    assert!(point_approx_eq(h, Point::new(400.0, 300.0)));

    let v = vertical_viewport().world_to_screen(center_x, center_y);
    assert!(point_approx_eq(v, Point::new(400.0, 300.0)));
}

#[test]
fn fitted_scene_stays_inside_the_padded_canvas() {
    let vp = horizontal_viewport();
    let bounds = bench_bounds();
    for (wx, wy) in [
        (bounds.min_x, bounds.min_y),
        (bounds.min_x, bounds.max_y),
        (bounds.max_x, bounds.min_y),
        (bounds.max_x, bounds.max_y),
    ] {
        let p = vp.world_to_screen(wx, wy);
        assert!(p.x >= 80.0 - EPSILON && p.x <= 720.0 + EPSILON);
        assert!(p.y >= 80.0 - EPSILON && p.y <= 520.0 + EPSILON);
    }
}

// --- Projection ---

#[test]
fn world_to_screen_horizontal() {
    let vp = Viewport {
        offset_x: 10.0,
        offset_y: 20.0,
        scale: 2.0,
        orientation: Orientation::Horizontal,
        canvas_h: 600.0,
    };
    assert_eq!(vp.world_to_screen(5.0, 7.0), Point::new(20.0, 34.0));
}

#[test]
fn world_to_screen_vertical_inverts_the_axis() {
    let vp = Viewport {
        offset_x: 10.0,
        offset_y: 20.0,
        scale: 2.0,
        orientation: Orientation::Vertical,
        canvas_h: 600.0,
    };
    // Perpendicular axis lands on screen x; optical axis runs up the screen.
    assert_eq!(vp.world_to_screen(5.0, 7.0), Point::new(34.0, 580.0));
}

#[test]
fn larger_world_x_moves_toward_the_top_when_vertical() {
    let vp = vertical_viewport();
    let object = vp.world_to_screen(0.0, 0.0);
    let sensor = vp.world_to_screen(300.0, 0.0);
    assert!(sensor.y < object.y);
}

#[test]
fn screen_to_world_inverts_world_to_screen() {
    for vp in [horizontal_viewport(), vertical_viewport()] {
        for (wx, wy) in [(0.0, 0.0), (300.0, 0.0), (-30.0, 45.5), (212.4, -17.9)] {
            let screen = vp.world_to_screen(wx, wy);
            let world = vp.screen_to_world(screen.x, screen.y);
            assert!(point_approx_eq(world, Point::new(wx, wy)));
        }
    }
}

#[test]
fn world_to_screen_inverts_screen_to_world() {
    for vp in [horizontal_viewport(), vertical_viewport()] {
        for (sx, sy) in [(0.0, 0.0), (400.0, 300.0), (123.0, 456.0)] {
            let world = vp.screen_to_world(sx, sy);
            let screen = vp.world_to_screen(world.x, world.y);
            assert!(point_approx_eq(screen, Point::new(sx, sy)));
        }
    }
}

// --- Zoom ---

#[test]
fn zoom_multiplies_the_scale() {
    let vp = horizontal_viewport();
    assert!(approx_eq(vp.zoom(ZOOM_STEP_IN, 400.0, 300.0).scale, vp.scale * ZOOM_STEP_IN));
    assert!(approx_eq(vp.zoom(ZOOM_STEP_OUT, 400.0, 300.0).scale, vp.scale * ZOOM_STEP_OUT));
}

#[test]
fn zoom_keeps_the_world_point_under_the_pivot() {
    for vp in [horizontal_viewport(), vertical_viewport()] {
        for factor in [1.1, 0.9, 2.5] {
            let (px, py) = (250.0, 120.0);
            let before = vp.screen_to_world(px, py);
            let zoomed = vp.zoom(factor, px, py);
            let after = zoomed.screen_to_world(px, py);
            assert!(point_approx_eq(before, after), "factor {factor}");
            // And the anchored world point projects back onto the pivot.
            let screen = zoomed.world_to_screen(before.x, before.y);
            assert!(point_approx_eq(screen, Point::new(px, py)));
        }
    }
}

#[test]
fn zoom_in_then_out_restores_the_view() {
    let vp = horizontal_viewport();
    let back = vp.zoom(2.0, 320.0, 180.0).zoom(0.5, 320.0, 180.0);
    assert!(approx_eq(back.scale, vp.scale));
    assert!(approx_eq(back.offset_x, vp.offset_x));
    assert!(approx_eq(back.offset_y, vp.offset_y));
}

#[test]
fn zoom_returns_a_new_snapshot() {
    let vp = horizontal_viewport();
    let _ = vp.zoom(2.0, 100.0, 100.0);
    assert!(approx_eq(vp.scale, (800.0 - 160.0) / 360.0));
}

// --- Pan ---

#[test]
fn pan_horizontal_shifts_the_offsets_by_the_screen_delta() {
    let vp = horizontal_viewport();
    let panned = vp.pan(12.0, -7.0);
    assert!(approx_eq(panned.offset_x, vp.offset_x + 12.0));
    assert!(approx_eq(panned.offset_y, vp.offset_y - 7.0));
}

#[test]
fn pan_vertical_swaps_and_inverts_into_world_offsets() {
    let vp = vertical_viewport();
    let panned = vp.pan(12.0, -7.0);
    assert!(approx_eq(panned.offset_x, vp.offset_x + 7.0));
    assert!(approx_eq(panned.offset_y, vp.offset_y + 12.0));
}

#[test]
fn pan_moves_every_projected_point_by_the_delta() {
    for vp in [horizontal_viewport(), vertical_viewport()] {
        let before = vp.world_to_screen(150.0, 30.0);
        let after = vp.pan(25.0, -40.0).world_to_screen(150.0, 30.0);
        assert!(approx_eq(after.x, before.x + 25.0));
        assert!(approx_eq(after.y, before.y - 40.0));
    }
}

#[test]
fn pan_does_not_change_the_scale() {
    let vp = vertical_viewport();
    assert!(approx_eq(vp.pan(50.0, 50.0).scale, vp.scale));
}

// --- Bounds helpers ---

#[test]
fn bounds_dimensions_and_center() {
    let bounds = bench_bounds();
    assert!(approx_eq(bounds.width(), 360.0));
    assert!(approx_eq(bounds.height(), 120.0));
    assert!(approx_eq(bounds.center_x(), 150.0));
    assert!(approx_eq(bounds.center_y(), 0.0));
}
