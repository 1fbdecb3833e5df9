//! Lens records and the typed patch used to edit the generic lens.
//!
//! Catalog lenses are read-only; the one generic lens is a user-adjustable
//! placeholder whose optical parameters can be changed through [`LensPatch`].
//! The distinction is a tagged [`LensKind`] so the differing mutation rules
//! are checked exhaustively, not a boolean consulted at call sites.

#[cfg(test)]
#[path = "lens_test.rs"]
mod lens_test;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Whether a lens is user-adjustable or a fixed catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensKind {
    /// User-adjustable placeholder; accepts [`LensPatch`] edits.
    Generic,
    /// Fixed catalog lens; read-only.
    Catalog,
}

/// Error applying a patch to a lens or target record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// The record is a fixed catalog entry and cannot be edited.
    #[error("record is not editable")]
    NotEditable,
    /// A dimension or optical parameter must be strictly positive.
    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),
    /// The patched aperture range would be inverted.
    #[error("aperture minimum must not exceed aperture maximum")]
    ApertureRange,
}

/// A lens as stored in the catalog and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    /// Unique identifier for this record.
    pub id: RecordId,
    /// Display name, e.g. `"Tamron M112FM25 (25mm f/1.4)"`.
    pub name: String,
    /// Focal length in millimeters. Must be > 0.
    pub focal_length_mm: f64,
    /// Widest aperture (smallest f-number).
    pub aperture_min: f64,
    /// Narrowest aperture (largest f-number). Must be ≥ `aperture_min`.
    pub aperture_max: f64,
    /// Closest object distance the lens can focus on, in millimeters.
    pub min_working_distance_mm: f64,
    /// Diameter of the image circle the lens illuminates, in millimeters.
    pub max_image_circle_mm: f64,
    /// Editable generic lens vs fixed catalog lens.
    pub kind: LensKind,
    /// Built-in catalog records survive imports; user records are replaced.
    pub builtin: bool,
}

impl Lens {
    /// Whether this lens accepts patches.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.kind, LensKind::Generic)
    }

    /// Apply a patch. Fails on catalog lenses and on patches that would
    /// violate a lens invariant; on failure the lens is unchanged.
    pub fn apply(&mut self, patch: &LensPatch) -> Result<(), PatchError> {
        match self.kind {
            LensKind::Catalog => return Err(PatchError::NotEditable),
            LensKind::Generic => {}
        }
        patch.validate(self)?;
        if let Some(ref name) = patch.name {
            self.name.clone_from(name);
        }
        if let Some(f) = patch.focal_length_mm {
            self.focal_length_mm = f;
        }
        if let Some(a) = patch.aperture_min {
            self.aperture_min = a;
        }
        if let Some(a) = patch.aperture_max {
            self.aperture_max = a;
        }
        if let Some(d) = patch.min_working_distance_mm {
            self.min_working_distance_mm = d;
        }
        if let Some(c) = patch.max_image_circle_mm {
            self.max_image_circle_mm = c;
        }
        Ok(())
    }
}

/// Sparse update for the generic lens. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LensPatch {
    /// New display name, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// New focal length in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub focal_length_mm: Option<f64>,
    /// New widest aperture, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aperture_min: Option<f64>,
    /// New narrowest aperture, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub aperture_max: Option<f64>,
    /// New minimum working distance in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_working_distance_mm: Option<f64>,
    /// New image circle diameter in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_image_circle_mm: Option<f64>,
}

impl LensPatch {
    /// Check every present field against the lens invariants, including the
    /// aperture ordering that would hold after the patch is applied.
    fn validate(&self, current: &Lens) -> Result<(), PatchError> {
        if self.focal_length_mm.is_some_and(|f| f <= 0.0) {
            return Err(PatchError::NonPositive("focal length"));
        }
        if self.aperture_min.is_some_and(|a| a <= 0.0) {
            return Err(PatchError::NonPositive("aperture minimum"));
        }
        if self.aperture_max.is_some_and(|a| a <= 0.0) {
            return Err(PatchError::NonPositive("aperture maximum"));
        }
        if self.min_working_distance_mm.is_some_and(|d| d <= 0.0) {
            return Err(PatchError::NonPositive("minimum working distance"));
        }
        if self.max_image_circle_mm.is_some_and(|c| c <= 0.0) {
            return Err(PatchError::NonPositive("image circle"));
        }
        let min = self.aperture_min.unwrap_or(current.aperture_min);
        let max = self.aperture_max.unwrap_or(current.aperture_max);
        if min > max {
            return Err(PatchError::ApertureRange);
        }
        Ok(())
    }
}
