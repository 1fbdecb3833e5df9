//! Bench layout: world-space positions and sizes the drawing layer paints.
//!
//! Builds the optical bench along the axis — object plane at x = 0, lens at
//! the working distance, sensor behind it at the image distance — picks the
//! per-view-axis half-sizes, and derives the bounding box handed to
//! [`Viewport::create`](crate::viewport::Viewport::create) for auto-fit.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::config::{CalculationResult, ViewAxis};
use crate::consts::{AXIS_MARGIN_MM, DOF_FAR_FALLBACK_MM, LENS_RADIUS_FACTOR, PERP_MARGIN_MM};
use crate::sensor::Sensor;
use crate::target::Target;
use crate::viewport::SceneBounds;

/// Half-sizes of the sensor, target, and FOV extents for one view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSizes {
    /// Half the sensor extent on the selected axis.
    pub sensor_half_mm: f64,
    /// Half the target extent on the selected axis.
    pub target_half_mm: f64,
    /// Half the field of view on the selected axis.
    pub fov_half_mm: f64,
}

/// Pick the sensor/target/FOV extents for the given view axis.
#[must_use]
pub fn axis_sizes(
    sensor: &Sensor,
    target: &Target,
    result: &CalculationResult,
    axis: ViewAxis,
) -> AxisSizes {
    match axis {
        ViewAxis::Horizontal => AxisSizes {
            sensor_half_mm: sensor.width_mm() / 2.0,
            target_half_mm: target.width_mm / 2.0,
            fov_half_mm: result.fov_horizontal_mm / 2.0,
        },
        ViewAxis::Vertical => AxisSizes {
            sensor_half_mm: sensor.height_mm() / 2.0,
            target_half_mm: target.height_mm / 2.0,
            fov_half_mm: result.fov_vertical_mm / 2.0,
        },
        ViewAxis::Diagonal => AxisSizes {
            sensor_half_mm: sensor.sensor_diagonal_mm / 2.0,
            target_half_mm: target.diagonal_mm() / 2.0,
            fov_half_mm: result.fov_diagonal_mm / 2.0,
        },
    }
}

/// World-space positions and sizes of everything the bench view paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    /// Object plane position on the optical axis (always 0).
    pub object_x: f64,
    /// Lens plane position (the working distance).
    pub lens_x: f64,
    /// Sensor plane position (working distance plus image distance).
    pub sensor_x: f64,
    /// Display radius of the lens symbol.
    pub lens_radius_mm: f64,
    /// Near plane of the in-focus zone, object side of the lens.
    pub dof_near_x: f64,
    /// Far plane of the in-focus zone, object side of the lens. An infinite
    /// far plane is drawn at a fixed fallback distance instead.
    pub dof_far_x: f64,
    /// Half-sizes for the selected view axis.
    pub sizes: AxisSizes,
    /// Bounding box handed to viewport auto-fit.
    pub bounds: SceneBounds,
}

/// Assemble the bench layout for one calculated setup.
#[must_use]
pub fn scene_layout(
    sensor: &Sensor,
    target: &Target,
    result: &CalculationResult,
    working_distance_mm: f64,
    axis: ViewAxis,
) -> SceneLayout {
    let sizes = axis_sizes(sensor, target, result, axis);

    let object_x = 0.0;
    let lens_x = working_distance_mm;
    let sensor_x = working_distance_mm + result.image_distance_mm;

    let lens_radius_mm = sizes
        .sensor_half_mm
        .max(sizes.target_half_mm)
        .max(sizes.fov_half_mm)
        * LENS_RADIUS_FACTOR;

    // DoF planes sit on the object side of the lens; the far plane may lie
    // past the object plane (negative x) and is capped when infinite.
    let dof_far_mm = if result.dof_far_mm.is_finite() {
        result.dof_far_mm
    } else {
        working_distance_mm + DOF_FAR_FALLBACK_MM
    };
    let dof_near_x = lens_x - result.dof_near_mm;
    let dof_far_x = lens_x - dof_far_mm;

    let max_y = sizes
        .sensor_half_mm
        .max(sizes.target_half_mm)
        .max(sizes.fov_half_mm)
        .max(lens_radius_mm)
        + PERP_MARGIN_MM;

    SceneLayout {
        object_x,
        lens_x,
        sensor_x,
        lens_radius_mm,
        dof_near_x,
        dof_far_x,
        sizes,
        bounds: SceneBounds {
            min_x: object_x - AXIS_MARGIN_MM,
            max_x: sensor_x + AXIS_MARGIN_MM,
            min_y: -max_y,
            max_y,
        },
    }
}
