//! Configuration checks: turn raw numbers into actionable warnings.
//!
//! Checks run in a fixed order and are independent; every matching check
//! appends its warning, none short-circuits another. Consumers aggregate
//! with [`crate::config::overall_severity`]: errors dominate, then
//! warnings, then infos.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::config::{Severity, Warning, WarningCode};
use crate::lens::Lens;
use crate::sensor::Sensor;
use crate::target::Target;

/// Ratio above which the field of view dwarfs the target on both axes.
const FOV_OVERSIZE_RATIO: f64 = 3.0;

/// The subset of calculation results the checks need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialResults {
    /// Horizontal field of view in millimeters.
    pub fov_horizontal_mm: f64,
    /// Vertical field of view in millimeters.
    pub fov_vertical_mm: f64,
    /// Total depth of field in millimeters; may be `+∞`.
    pub dof_total_mm: f64,
}

/// Run every check against the configuration and partial results.
#[must_use]
pub fn validate(
    sensor: &Sensor,
    lens: &Lens,
    target: &Target,
    working_distance_mm: f64,
    results: &PartialResults,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    // At or inside the focal length no real image forms.
    if working_distance_mm <= lens.focal_length_mm {
        warnings.push(Warning {
            severity: Severity::Error,
            code: WarningCode::NoRealImage,
            message: "Working distance must be greater than focal length. No real image can be formed."
                .to_string(),
        });
    }

    if working_distance_mm < lens.min_working_distance_mm {
        warnings.push(Warning {
            severity: Severity::Error,
            code: WarningCode::BelowMinWorkingDistance,
            message: format!(
                "Working distance ({working_distance_mm}mm) is below the minimum ({}mm).",
                lens.min_working_distance_mm
            ),
        });
    }

    // An image circle smaller than the sensor diagonal vignettes the corners.
    if sensor.sensor_diagonal_mm > lens.max_image_circle_mm {
        warnings.push(Warning {
            severity: Severity::Warning,
            code: WarningCode::ImageCircleTooSmall,
            message: format!(
                "Sensor diagonal ({:.1}mm) exceeds lens image circle ({}mm). Vignetting will occur.",
                sensor.sensor_diagonal_mm, lens.max_image_circle_mm
            ),
        });
    }

    if results.dof_total_mm.is_finite() && results.dof_total_mm < target.depth_mm {
        warnings.push(Warning {
            severity: Severity::Warning,
            code: WarningCode::DofInsufficient,
            message: format!(
                "Depth of field ({:.1}mm) is less than object depth ({}mm).",
                results.dof_total_mm, target.depth_mm
            ),
        });
    }

    if results.fov_horizontal_mm < target.width_mm || results.fov_vertical_mm < target.height_mm {
        warnings.push(Warning {
            severity: Severity::Warning,
            code: WarningCode::FovTooSmall,
            message: "Field of view is smaller than the target object. Object will not be fully captured."
                .to_string(),
        });
    }

    if results.fov_horizontal_mm > target.width_mm * FOV_OVERSIZE_RATIO
        && results.fov_vertical_mm > target.height_mm * FOV_OVERSIZE_RATIO
    {
        warnings.push(Warning {
            severity: Severity::Info,
            code: WarningCode::FovMuchLarger,
            message: "Field of view is much larger than the target. Object uses only a small portion of the sensor."
                .to_string(),
        });
    }

    warnings
}
