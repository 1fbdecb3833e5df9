//! Target records: the object being imaged.
//!
//! One custom target is editable at runtime through [`TargetPatch`]; all
//! others are read-only catalog entries, mirroring the lens split in
//! [`crate::lens`].

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::lens::PatchError;

/// Whether a target is user-adjustable or a fixed catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// User-adjustable target; accepts [`TargetPatch`] edits.
    Custom,
    /// Fixed catalog target; read-only.
    Catalog,
}

/// A target object as stored in the catalog and on the wire.
///
/// All dimensions are in millimeters and must be > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Unique identifier for this record.
    pub id: RecordId,
    /// Display name, e.g. `"48-Well Plate"`.
    pub name: String,
    /// Extent perpendicular to the optical axis, horizontal.
    pub width_mm: f64,
    /// Extent perpendicular to the optical axis, vertical.
    pub height_mm: f64,
    /// Extent along the optical axis; compared against depth of field.
    pub depth_mm: f64,
    /// Editable custom target vs fixed catalog target.
    pub kind: TargetKind,
    /// Built-in catalog records survive imports; user records are replaced.
    pub builtin: bool,
}

impl Target {
    /// Face diagonal in millimeters, used for the diagonal view axis.
    #[must_use]
    pub fn diagonal_mm(&self) -> f64 {
        (self.width_mm * self.width_mm + self.height_mm * self.height_mm).sqrt()
    }

    /// Whether this target accepts patches.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self.kind, TargetKind::Custom)
    }

    /// Apply a patch. Fails on catalog targets and on non-positive
    /// dimensions; on failure the target is unchanged.
    pub fn apply(&mut self, patch: &TargetPatch) -> Result<(), PatchError> {
        match self.kind {
            TargetKind::Catalog => return Err(PatchError::NotEditable),
            TargetKind::Custom => {}
        }
        patch.validate()?;
        if let Some(ref name) = patch.name {
            self.name.clone_from(name);
        }
        if let Some(w) = patch.width_mm {
            self.width_mm = w;
        }
        if let Some(h) = patch.height_mm {
            self.height_mm = h;
        }
        if let Some(d) = patch.depth_mm {
            self.depth_mm = d;
        }
        Ok(())
    }
}

/// Sparse update for the custom target. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetPatch {
    /// New display name, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// New width in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width_mm: Option<f64>,
    /// New height in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height_mm: Option<f64>,
    /// New depth in millimeters, if being updated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth_mm: Option<f64>,
}

impl TargetPatch {
    fn validate(&self) -> Result<(), PatchError> {
        if self.width_mm.is_some_and(|w| w <= 0.0) {
            return Err(PatchError::NonPositive("width"));
        }
        if self.height_mm.is_some_and(|h| h <= 0.0) {
            return Err(PatchError::NonPositive("height"));
        }
        if self.depth_mm.is_some_and(|d| d <= 0.0) {
            return Err(PatchError::NonPositive("depth"));
        }
        Ok(())
    }
}
