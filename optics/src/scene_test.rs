#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::calc;
use crate::lens::{Lens, LensKind};
use crate::sensor::ShutterType;
use crate::target::TargetKind;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn bench_sensor() -> Sensor {
    Sensor {
        id: Uuid::new_v4(),
        name: "Bench Sensor".to_string(),
        resolution_mp: 5.1,
        pixel_size_micron: 3.45,
        sensor_size_inch: "2/3\"".to_string(),
        sensor_diagonal_mm: 11.1,
        shutter_type: ShutterType::Global,
        aspect_ratio: 1.2,
        aspect_ratio_label: "6:5".to_string(),
        source_url: None,
        builtin: true,
    }
}

fn bench_lens() -> Lens {
    Lens {
        id: Uuid::new_v4(),
        name: "Bench Lens".to_string(),
        focal_length_mm: 25.0,
        aperture_min: 1.4,
        aperture_max: 16.0,
        min_working_distance_mm: 150.0,
        max_image_circle_mm: 17.6,
        kind: LensKind::Catalog,
        builtin: true,
    }
}

fn bench_target() -> Target {
    Target {
        id: Uuid::new_v4(),
        name: "Bench Target".to_string(),
        width_mm: 127.8,
        height_mm: 85.5,
        depth_mm: 20.0,
        kind: TargetKind::Catalog,
        builtin: true,
    }
}

fn bench_result() -> CalculationResult {
    calc::calculate(&bench_sensor(), &bench_lens(), &bench_target(), 300.0, 4.0)
}

// --- Axis sizes ---

#[test]
fn horizontal_axis_uses_widths() {
    let sensor = bench_sensor();
    let target = bench_target();
    let result = bench_result();
    let sizes = axis_sizes(&sensor, &target, &result, ViewAxis::Horizontal);
    assert!(approx_eq(sizes.sensor_half_mm, sensor.width_mm() / 2.0));
    assert!(approx_eq(sizes.target_half_mm, 127.8 / 2.0));
    assert!(approx_eq(sizes.fov_half_mm, result.fov_horizontal_mm / 2.0));
}

#[test]
fn vertical_axis_uses_heights() {
    let sensor = bench_sensor();
    let target = bench_target();
    let result = bench_result();
    let sizes = axis_sizes(&sensor, &target, &result, ViewAxis::Vertical);
    assert!(approx_eq(sizes.sensor_half_mm, sensor.height_mm() / 2.0));
    assert!(approx_eq(sizes.target_half_mm, 85.5 / 2.0));
    assert!(approx_eq(sizes.fov_half_mm, result.fov_vertical_mm / 2.0));
}

#[test]
fn diagonal_axis_uses_diagonals() {
    let sensor = bench_sensor();
    let target = bench_target();
    let result = bench_result();
    let sizes = axis_sizes(&sensor, &target, &result, ViewAxis::Diagonal);
    assert!(approx_eq(sizes.sensor_half_mm, 11.1 / 2.0));
    assert!(approx_eq(sizes.target_half_mm, target.diagonal_mm() / 2.0));
    assert!(approx_eq(sizes.fov_half_mm, result.fov_diagonal_mm / 2.0));
}

// --- Layout ---

#[test]
fn planes_line_up_along_the_axis() {
    let result = bench_result();
    let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, ViewAxis::Horizontal);
    assert_eq!(layout.object_x, 0.0);
    assert_eq!(layout.lens_x, 300.0);
    assert!(approx_eq(layout.sensor_x, 300.0 + result.image_distance_mm));
}

#[test]
fn lens_radius_clears_the_largest_half_size() {
    let result = bench_result();
    let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, ViewAxis::Horizontal);
    let largest = layout
        .sizes
        .sensor_half_mm
        .max(layout.sizes.target_half_mm)
        .max(layout.sizes.fov_half_mm);
    assert!(approx_eq(layout.lens_radius_mm, largest * 1.1));
}

#[test]
fn dof_planes_sit_object_side_of_the_lens() {
    let result = bench_result();
    let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, ViewAxis::Horizontal);
    assert!(approx_eq(layout.dof_near_x, 300.0 - result.dof_near_mm));
    assert!(approx_eq(layout.dof_far_x, 300.0 - result.dof_far_mm));
    assert!(layout.dof_near_x > layout.dof_far_x);
}

#[test]
fn infinite_dof_far_plane_is_drawn_at_the_fallback() {
    let mut result = bench_result();
    result.dof_far_mm = f64::INFINITY;
    result.dof_total_mm = f64::INFINITY;
    let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, ViewAxis::Horizontal);
    assert!(approx_eq(layout.dof_far_x, 300.0 - (300.0 + 500.0)));
}

// --- Bounds ---

#[test]
fn bounds_pad_the_axis_and_clear_the_tallest_element() {
    let result = bench_result();
    let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, ViewAxis::Horizontal);
    assert!(approx_eq(layout.bounds.min_x, -30.0));
    assert!(approx_eq(layout.bounds.max_x, layout.sensor_x + 30.0));

    // The lens symbol is the tallest element on this bench.
    let expected_max_y = layout.lens_radius_mm + 20.0;
    assert!(approx_eq(layout.bounds.max_y, expected_max_y));
    assert!(approx_eq(layout.bounds.min_y, -expected_max_y));
}

#[test]
fn bounds_are_symmetric_about_the_axis() {
    let result = bench_result();
    for axis in [ViewAxis::Horizontal, ViewAxis::Vertical, ViewAxis::Diagonal] {
        let layout = scene_layout(&bench_sensor(), &bench_target(), &result, 300.0, axis);
        assert!(approx_eq(layout.bounds.min_y, -layout.bounds.max_y));
    }
}
