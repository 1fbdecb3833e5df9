//! Image sensor records and derived geometry.
//!
//! Stored fields are the datasheet values. Physical width/height and per-axis
//! pixel counts are never stored; they are derived on demand from the
//! diagonal, the aspect ratio, and the megapixel count, so edits to any of
//! the three stay consistent.

#[cfg(test)]
#[path = "sensor_test.rs"]
mod sensor_test;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Electronic shutter type. Informational only; no formula consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutterType {
    /// All rows exposed simultaneously.
    Global,
    /// Rows exposed sequentially, top to bottom.
    Rolling,
}

/// A physical image sensor as stored in the catalog and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique identifier for this record.
    pub id: RecordId,
    /// Display name, e.g. `"Sony IMX250"`.
    pub name: String,
    /// Total resolution in megapixels.
    pub resolution_mp: f64,
    /// Pixel pitch in micrometers.
    pub pixel_size_micron: f64,
    /// Optical format label, e.g. `"2/3\""`. Informational.
    pub sensor_size_inch: String,
    /// Active-area diagonal in millimeters. Must be > 0.
    pub sensor_diagonal_mm: f64,
    /// Electronic shutter type.
    pub shutter_type: ShutterType,
    /// Width / height ratio of the active area. Must be > 0.
    pub aspect_ratio: f64,
    /// Display label for the aspect ratio, e.g. `"4:3"`.
    pub aspect_ratio_label: String,
    /// Link to the datasheet or vendor page, if known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_url: Option<String>,
    /// Built-in catalog records survive imports; user records are replaced.
    pub builtin: bool,
}

impl Sensor {
    /// Physical width of the active area in millimeters.
    #[must_use]
    pub fn width_mm(&self) -> f64 {
        self.sensor_diagonal_mm / (1.0 + (1.0 / self.aspect_ratio).powi(2)).sqrt()
    }

    /// Physical height of the active area in millimeters.
    #[must_use]
    pub fn height_mm(&self) -> f64 {
        self.width_mm() / self.aspect_ratio
    }

    /// Horizontal pixel count, rounded to the nearest whole pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels_h(&self) -> u32 {
        (self.resolution_mp * 1e6 * self.aspect_ratio).sqrt().round() as u32
    }

    /// Vertical pixel count, rounded to the nearest whole pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels_v(&self) -> u32 {
        (f64::from(self.pixels_h()) / self.aspect_ratio).round() as u32
    }
}
