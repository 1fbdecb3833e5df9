//! Thin-lens calculation engine.
//!
//! Closed-form paraxial formulas: image distance, magnification, field of
//! view, pixel density, depth of field, angle of view, and effective
//! aperture. [`calculate`] is total over its documented domain and never
//! fails; out-of-range situations surface as embedded warnings. The one
//! case the formulas cannot express — a working distance at or inside the
//! focal length, where no real image forms — is handled by [`evaluate`],
//! the guarded entry point callers should prefer.

#[cfg(test)]
#[path = "calc_test.rs"]
mod calc_test;

use crate::config::{CalculationResult, Severity, Warning, WarningCode};
use crate::lens::Lens;
use crate::sensor::Sensor;
use crate::target::Target;
use crate::validation::{self, PartialResults};

/// Compute every derived optical quantity for the given setup.
///
/// Requires `working_distance_mm > lens.focal_length_mm`; callers that
/// cannot guarantee this should use [`evaluate`] instead.
#[must_use]
pub fn calculate(
    sensor: &Sensor,
    lens: &Lens,
    target: &Target,
    working_distance_mm: f64,
    aperture: f64,
) -> CalculationResult {
    let f = lens.focal_length_mm;
    let d_o = working_distance_mm;

    let sensor_w = sensor.width_mm();
    let sensor_h = sensor.height_mm();
    let sensor_d = sensor.sensor_diagonal_mm;
    let pixels_h = f64::from(sensor.pixels_h());
    let pixels_v = f64::from(sensor.pixels_v());

    // Thin lens: 1/f = 1/do + 1/di  =>  di = f*do / (do - f)
    let image_distance_mm = f * d_o / (d_o - f);

    // Magnification β = f / (do - f). The sign is kept for display but every
    // formula below uses |β|.
    let magnification = f / (d_o - f);
    let abs_mag = magnification.abs();

    let fov_horizontal_mm = sensor_w / abs_mag;
    let fov_vertical_mm = sensor_h / abs_mag;
    let fov_diagonal_mm = sensor_d / abs_mag;

    let pixels_per_mm_h = pixels_h / fov_horizontal_mm;
    let pixels_per_mm_v = pixels_v / fov_vertical_mm;
    let object_resolution_mm_per_px = fov_horizontal_mm / pixels_h;

    // Depth of field with a one-pixel circle of confusion.
    let c = sensor.pixel_size_micron / 1000.0;
    let f_squared = f * f;
    let denom_near = f_squared + aperture * c * (d_o - f);
    let denom_far = f_squared - aperture * c * (d_o - f);

    let dof_near_mm = d_o * f_squared / denom_near;
    // A non-positive far denominator means focus reaches to infinity.
    let dof_far_mm = if denom_far <= 0.0 {
        f64::INFINITY
    } else {
        d_o * f_squared / denom_far
    };
    let dof_total_mm = if dof_far_mm.is_finite() {
        dof_far_mm - dof_near_mm
    } else {
        f64::INFINITY
    };

    // Angle of view is a lens+sensor property, independent of distance.
    let half_angle_horizontal_deg = (sensor_w / (2.0 * f)).atan().to_degrees();
    let half_angle_vertical_deg = (sensor_h / (2.0 * f)).atan().to_degrees();
    let half_angle_diagonal_deg = (sensor_d / (2.0 * f)).atan().to_degrees();

    let effective_aperture = aperture * (1.0 + abs_mag);

    let warnings = validation::validate(
        sensor,
        lens,
        target,
        working_distance_mm,
        &PartialResults {
            fov_horizontal_mm,
            fov_vertical_mm,
            dof_total_mm,
        },
    );

    CalculationResult {
        fov_horizontal_mm,
        fov_vertical_mm,
        fov_diagonal_mm,
        magnification,
        pixels_per_mm_h,
        pixels_per_mm_v,
        object_resolution_mm_per_px,
        dof_total_mm,
        dof_near_mm,
        dof_far_mm,
        half_angle_horizontal_deg,
        half_angle_vertical_deg,
        half_angle_diagonal_deg,
        effective_aperture,
        image_distance_mm,
        warnings,
    }
}

/// Guarded entry point: at or inside the focal length the formulas never
/// run and the result is all zeros carrying a single `NO_REAL_IMAGE` error.
#[must_use]
pub fn evaluate(
    sensor: &Sensor,
    lens: &Lens,
    target: &Target,
    working_distance_mm: f64,
    aperture: f64,
) -> CalculationResult {
    if working_distance_mm <= lens.focal_length_mm {
        return CalculationResult::zeroed(vec![Warning {
            severity: Severity::Error,
            code: WarningCode::NoRealImage,
            message: "Working distance must be greater than focal length. No real image can be formed."
                .to_string(),
        }]);
    }
    calculate(sensor, lens, target, working_distance_mm, aperture)
}
