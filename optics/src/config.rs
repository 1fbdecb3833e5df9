//! Configuration, warnings, and the calculation result.
//!
//! `Configuration` is the current selection: references to one sensor, lens
//! and target, plus working distance, aperture, and the view axis used for
//! on-screen sizing. `CalculationResult` is a derived value, recomputed
//! whenever the configuration or any referenced record changes; it is never
//! mutated in place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Which sensor/target/FOV axis pair drives on-screen sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewAxis {
    /// Sensor width, target width, horizontal FOV.
    #[default]
    Horizontal,
    /// Sensor height, target height, vertical FOV.
    Vertical,
    /// Sensor diagonal, target diagonal, diagonal FOV.
    Diagonal,
}

/// The current selection and its numeric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Selected sensor, if any.
    pub sensor_id: Option<RecordId>,
    /// Selected lens, if any.
    pub lens_id: Option<RecordId>,
    /// Selected target, if any.
    pub target_id: Option<RecordId>,
    /// Object-to-lens-front distance along the optical axis, in millimeters.
    pub working_distance_mm: f64,
    /// Aperture as an f-number.
    pub aperture: f64,
    /// Axis pair used for on-screen sizing.
    pub view_axis: ViewAxis,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            sensor_id: None,
            lens_id: None,
            target_id: None,
            working_distance_mm: 300.0,
            aperture: 4.0,
            view_axis: ViewAxis::Horizontal,
        }
    }
}

/// Warning severity. Ordered so the aggregate status of a warning list is
/// simply the maximum severity present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No correctness implication; the setup merely under-uses hardware.
    Info,
    /// The numbers are meaningful but the setup is practically risky.
    Warning,
    /// The configuration is physically invalid; downstream optical
    /// quantities are meaningless.
    Error,
}

/// Stable identifier for a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// Working distance at or inside the focal length.
    NoRealImage,
    /// Working distance below the lens's near focus limit.
    BelowMinWorkingDistance,
    /// Sensor diagonal exceeds the lens image circle; vignetting.
    ImageCircleTooSmall,
    /// Depth of field shallower than the target depth.
    DofInsufficient,
    /// Field of view smaller than the target on some axis.
    FovTooSmall,
    /// Field of view more than three times the target on both axes.
    FovMuchLarger,
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::NoRealImage => "NO_REAL_IMAGE",
            Self::BelowMinWorkingDistance => "BELOW_MIN_WORKING_DISTANCE",
            Self::ImageCircleTooSmall => "IMAGE_CIRCLE_TOO_SMALL",
            Self::DofInsufficient => "DOF_INSUFFICIENT",
            Self::FovTooSmall => "FOV_TOO_SMALL",
            Self::FovMuchLarger => "FOV_MUCH_LARGER",
        };
        f.write_str(code)
    }
}

/// A single validation finding embedded in a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// How severe the finding is.
    pub severity: Severity,
    /// Stable identifier for the finding.
    pub code: WarningCode,
    /// Human-readable description.
    pub message: String,
}

/// The highest severity present, or `None` when the list is empty (ok).
#[must_use]
pub fn overall_severity(warnings: &[Warning]) -> Option<Severity> {
    warnings.iter().map(|w| w.severity).max()
}

/// Output of the calculation engine. All lengths in millimeters, all angles
/// in degrees; `dof_far_mm` and `dof_total_mm` may be `+∞`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Object-space extent imaged onto the full sensor width.
    pub fov_horizontal_mm: f64,
    /// Object-space extent imaged onto the full sensor height.
    pub fov_vertical_mm: f64,
    /// Object-space extent imaged onto the full sensor diagonal.
    pub fov_diagonal_mm: f64,
    /// Signed thin-lens magnification β; downstream consumers use `|β|`.
    pub magnification: f64,
    /// Pixel density on the object, horizontal axis.
    pub pixels_per_mm_h: f64,
    /// Pixel density on the object, vertical axis.
    pub pixels_per_mm_v: f64,
    /// Smallest resolvable object feature, in millimeters per pixel.
    pub object_resolution_mm_per_px: f64,
    /// Total depth of the in-focus zone; `+∞` when focus reaches infinity.
    pub dof_total_mm: f64,
    /// Near edge of the in-focus zone, measured from the lens.
    pub dof_near_mm: f64,
    /// Far edge of the in-focus zone; `+∞` when focus reaches infinity.
    pub dof_far_mm: f64,
    /// Half angle of view across the sensor width.
    pub half_angle_horizontal_deg: f64,
    /// Half angle of view across the sensor height.
    pub half_angle_vertical_deg: f64,
    /// Half angle of view across the sensor diagonal.
    pub half_angle_diagonal_deg: f64,
    /// Aperture adjusted for magnification-induced light loss.
    pub effective_aperture: f64,
    /// Lens-to-sensor distance for a focused image.
    pub image_distance_mm: f64,
    /// Validation findings, in check order.
    pub warnings: Vec<Warning>,
}

impl CalculationResult {
    /// An all-zero result carrying only the given warnings. Used when no
    /// real image forms and the formulas cannot run.
    #[must_use]
    pub fn zeroed(warnings: Vec<Warning>) -> Self {
        Self {
            fov_horizontal_mm: 0.0,
            fov_vertical_mm: 0.0,
            fov_diagonal_mm: 0.0,
            magnification: 0.0,
            pixels_per_mm_h: 0.0,
            pixels_per_mm_v: 0.0,
            object_resolution_mm_per_px: 0.0,
            dof_total_mm: 0.0,
            dof_near_mm: 0.0,
            dof_far_mm: 0.0,
            half_angle_horizontal_deg: 0.0,
            half_angle_vertical_deg: 0.0,
            half_angle_diagonal_deg: 0.0,
            effective_aperture: 0.0,
            image_distance_mm: 0.0,
            warnings,
        }
    }

    /// Aggregate status: highest warning severity, `None` when clean.
    #[must_use]
    pub fn status(&self) -> Option<Severity> {
        overall_severity(&self.warnings)
    }
}
