//! Shared numeric constants for scene layout and view interaction.

// ── Scene layout ────────────────────────────────────────────────

/// World-space margin past the object and sensor along the optical axis,
/// in millimeters.
pub const AXIS_MARGIN_MM: f64 = 30.0;

/// World-space margin past the tallest element perpendicular to the axis,
/// in millimeters.
pub const PERP_MARGIN_MM: f64 = 20.0;

/// Lens display radius relative to the largest of the sensor, target, and
/// FOV half-sizes.
pub const LENS_RADIUS_FACTOR: f64 = 1.1;

/// Finite stand-in distance from the lens for drawing an infinite
/// depth-of-field far plane, in millimeters.
pub const DOF_FAR_FALLBACK_MM: f64 = 500.0;

/// Canvas padding used when auto-fitting the bench view, in pixels.
pub const FIT_PADDING_PX: f64 = 80.0;

// ── View interaction ────────────────────────────────────────────

/// Zoom-in factor per wheel notch.
pub const ZOOM_STEP_IN: f64 = 1.1;

/// Zoom-out factor per wheel notch.
pub const ZOOM_STEP_OUT: f64 = 0.9;

// ── Units ───────────────────────────────────────────────────────

/// Tolerance when matching catalog f-numbers against a lens's aperture
/// range endpoints.
pub const FSTOP_TOLERANCE: f64 = 0.05;
