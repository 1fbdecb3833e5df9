//! Display formatting and the standard f-stop series.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use crate::consts::FSTOP_TOLERANCE;

/// Format a length in millimeters; non-finite values render as `∞`.
#[must_use]
pub fn format_mm(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$} mm")
    } else {
        "∞".to_string()
    }
}

/// Format an angle in degrees.
#[must_use]
pub fn format_deg(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}°")
}

/// Format a magnification as a ratio; sub-unity values render as `1:n`.
#[must_use]
pub fn format_ratio(value: f64, decimals: usize) -> String {
    if value.abs() < 1.0 {
        format!("1:{:.1}", 1.0 / value.abs())
    } else {
        format!("{:.decimals$}:1", value.abs())
    }
}

/// Format a pixel density on the object.
#[must_use]
pub fn format_px_per_mm(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$} px/mm")
}

/// Format an aperture as an f-number.
#[must_use]
pub fn format_aperture(value: f64) -> String {
    format!("f/{value:.1}")
}

/// Standard f-numbers in third stops.
pub const FSTOPS_THIRD: [f64; 28] = [
    1.0, 1.1, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5, 2.8, 3.2, 3.5, 4.0, 4.5, 5.0, 5.6, 6.3, 7.1,
    8.0, 9.0, 10.0, 11.0, 13.0, 14.0, 16.0, 18.0, 20.0, 22.0,
];

/// The subrange of [`FSTOPS_THIRD`] usable between `min` and `max`, with a
/// small tolerance at the endpoints so catalog values match.
#[must_use]
pub fn available_f_stops(min: f64, max: f64) -> Vec<f64> {
    FSTOPS_THIRD
        .iter()
        .copied()
        .filter(|f| *f >= min - FSTOP_TOLERANCE && *f <= max + FSTOP_TOLERANCE)
        .collect()
}
