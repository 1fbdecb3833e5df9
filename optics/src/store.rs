//! Explicit state container over the record collections and configuration.
//!
//! Owns the sensor/lens/target lists, the current [`Configuration`], and
//! the cached [`CalculationResult`]. Every operation that can change the
//! numbers recomputes the result through [`calc::evaluate`], which guards
//! the no-real-image case before any formula runs. The container is plain
//! single-threaded state; callers that share it wrap it themselves.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::RecordId;
use crate::calc;
use crate::catalog;
use crate::config::{CalculationResult, Configuration, ViewAxis};
use crate::lens::{Lens, LensPatch, PatchError};
use crate::sensor::Sensor;
use crate::target::{Target, TargetPatch};

/// Error from a store operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No sensor with the given id exists.
    #[error("unknown sensor id: {0}")]
    UnknownSensor(RecordId),
    /// No lens with the given id exists.
    #[error("unknown lens id: {0}")]
    UnknownLens(RecordId),
    /// No target with the given id exists.
    #[error("unknown target id: {0}")]
    UnknownTarget(RecordId),
    /// The lens list contains no generic (editable) lens.
    #[error("no generic lens in the lens list")]
    NoGenericLens,
    /// The target list contains no custom (editable) target.
    #[error("no custom target in the target list")]
    NoCustomTarget,
    /// A patch failed validation or targeted a read-only record.
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Import/export payload. On import, `None` collections are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Sensors to import, or the exported user sensors.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sensors: Option<Vec<Sensor>>,
    /// Lenses to import, or the exported user lenses.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lenses: Option<Vec<Lens>>,
    /// Targets to import, or the exported user targets.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub targets: Option<Vec<Target>>,
}

/// The application state: records, configuration, and the cached result.
pub struct Store {
    sensors: Vec<Sensor>,
    lenses: Vec<Lens>,
    targets: Vec<Target>,
    config: Configuration,
    result: Option<CalculationResult>,
}

impl Store {
    /// A store seeded with the built-in catalog and the stock selection
    /// (IMX250, Tamron 25mm, 48-well plate at 300 mm and f/4).
    #[must_use]
    pub fn new() -> Self {
        let sensors = catalog::default_sensors();
        let lenses = catalog::default_lenses();
        let targets = catalog::default_targets();
        let config = Configuration {
            sensor_id: sensors.iter().find(|s| s.name.contains("IMX250")).map(|s| s.id),
            lens_id: lenses.iter().find(|l| l.name.contains("M112FM25")).map(|l| l.id),
            target_id: targets.iter().find(|t| t.name == "48-Well Plate").map(|t| t.id),
            ..Configuration::default()
        };
        let mut store = Self { sensors, lenses, targets, config, result: None };
        store.recalculate();
        store
    }

    /// A store over explicit record lists with an empty selection.
    #[must_use]
    pub fn with_records(sensors: Vec<Sensor>, lenses: Vec<Lens>, targets: Vec<Target>) -> Self {
        Self {
            sensors,
            lenses,
            targets,
            config: Configuration {
                sensor_id: None,
                lens_id: None,
                target_id: None,
                ..Configuration::default()
            },
            result: None,
        }
    }

    // --- Queries ---

    /// All sensors, built-in and user.
    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// All lenses, built-in and user.
    #[must_use]
    pub fn lenses(&self) -> &[Lens] {
        &self.lenses
    }

    /// All targets, built-in and user.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The cached result; `None` while the selection is incomplete.
    #[must_use]
    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Look up a sensor by id.
    #[must_use]
    pub fn sensor(&self, id: RecordId) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.id == id)
    }

    /// Look up a lens by id.
    #[must_use]
    pub fn lens(&self, id: RecordId) -> Option<&Lens> {
        self.lenses.iter().find(|l| l.id == id)
    }

    /// Look up a target by id.
    #[must_use]
    pub fn target(&self, id: RecordId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    // --- Selection ---

    /// Select a sensor and recalculate.
    pub fn select_sensor(&mut self, id: RecordId) -> Result<(), StoreError> {
        if self.sensor(id).is_none() {
            return Err(StoreError::UnknownSensor(id));
        }
        self.config.sensor_id = Some(id);
        self.recalculate();
        Ok(())
    }

    /// Select a lens and recalculate. The aperture is clamped into the new
    /// lens's range.
    pub fn select_lens(&mut self, id: RecordId) -> Result<(), StoreError> {
        let lens = self.lens(id).ok_or(StoreError::UnknownLens(id))?;
        let (min, max) = (lens.aperture_min, lens.aperture_max);
        self.config.lens_id = Some(id);
        self.config.aperture = self.config.aperture.clamp(min, max);
        self.recalculate();
        Ok(())
    }

    /// Select a target and recalculate.
    pub fn select_target(&mut self, id: RecordId) -> Result<(), StoreError> {
        if self.target(id).is_none() {
            return Err(StoreError::UnknownTarget(id));
        }
        self.config.target_id = Some(id);
        self.recalculate();
        Ok(())
    }

    /// Set the working distance in millimeters and recalculate.
    pub fn set_working_distance(&mut self, mm: f64) {
        self.config.working_distance_mm = mm;
        self.recalculate();
    }

    /// Set the aperture f-number and recalculate.
    pub fn set_aperture(&mut self, f_number: f64) {
        self.config.aperture = f_number;
        self.recalculate();
    }

    /// Set the view axis. Does not affect the numbers, so no recalculation.
    pub fn set_view_axis(&mut self, axis: ViewAxis) {
        self.config.view_axis = axis;
    }

    // --- Editable records ---

    /// Patch the generic lens and recalculate.
    pub fn update_generic_lens(&mut self, patch: &LensPatch) -> Result<(), StoreError> {
        let lens = self
            .lenses
            .iter_mut()
            .find(|l| l.is_editable())
            .ok_or(StoreError::NoGenericLens)?;
        lens.apply(patch)?;
        self.recalculate();
        Ok(())
    }

    /// Patch the custom target and recalculate.
    pub fn update_custom_target(&mut self, patch: &TargetPatch) -> Result<(), StoreError> {
        let target = self
            .targets
            .iter_mut()
            .find(|t| t.is_editable())
            .ok_or(StoreError::NoCustomTarget)?;
        target.apply(patch)?;
        self.recalculate();
        Ok(())
    }

    // --- Record CRUD ---

    /// Add a sensor record.
    pub fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.push(sensor);
    }

    /// Replace a sensor record by id and recalculate.
    pub fn update_sensor(&mut self, sensor: Sensor) -> Result<(), StoreError> {
        let slot = self
            .sensors
            .iter_mut()
            .find(|s| s.id == sensor.id)
            .ok_or(StoreError::UnknownSensor(sensor.id))?;
        *slot = sensor;
        self.recalculate();
        Ok(())
    }

    /// Delete a sensor record, clearing the selection if it pointed here.
    pub fn delete_sensor(&mut self, id: RecordId) -> Result<(), StoreError> {
        let before = self.sensors.len();
        self.sensors.retain(|s| s.id != id);
        if self.sensors.len() == before {
            return Err(StoreError::UnknownSensor(id));
        }
        if self.config.sensor_id == Some(id) {
            self.config.sensor_id = None;
        }
        self.recalculate();
        Ok(())
    }

    /// Add a lens record.
    pub fn add_lens(&mut self, lens: Lens) {
        self.lenses.push(lens);
    }

    /// Replace a lens record by id and recalculate.
    pub fn update_lens(&mut self, lens: Lens) -> Result<(), StoreError> {
        let slot = self
            .lenses
            .iter_mut()
            .find(|l| l.id == lens.id)
            .ok_or(StoreError::UnknownLens(lens.id))?;
        *slot = lens;
        self.recalculate();
        Ok(())
    }

    /// Delete a lens record, clearing the selection if it pointed here.
    pub fn delete_lens(&mut self, id: RecordId) -> Result<(), StoreError> {
        let before = self.lenses.len();
        self.lenses.retain(|l| l.id != id);
        if self.lenses.len() == before {
            return Err(StoreError::UnknownLens(id));
        }
        if self.config.lens_id == Some(id) {
            self.config.lens_id = None;
        }
        self.recalculate();
        Ok(())
    }

    /// Add a target record.
    pub fn add_target(&mut self, target: Target) {
        self.targets.push(target);
    }

    /// Replace a target record by id and recalculate.
    pub fn update_target(&mut self, target: Target) -> Result<(), StoreError> {
        let slot = self
            .targets
            .iter_mut()
            .find(|t| t.id == target.id)
            .ok_or(StoreError::UnknownTarget(target.id))?;
        *slot = target;
        self.recalculate();
        Ok(())
    }

    /// Delete a target record, clearing the selection if it pointed here.
    pub fn delete_target(&mut self, id: RecordId) -> Result<(), StoreError> {
        let before = self.targets.len();
        self.targets.retain(|t| t.id != id);
        if self.targets.len() == before {
            return Err(StoreError::UnknownTarget(id));
        }
        if self.config.target_id == Some(id) {
            self.config.target_id = None;
        }
        self.recalculate();
        Ok(())
    }

    // --- Import / export ---

    /// Merge imported records: built-in records are kept, user records are
    /// replaced by the incoming user records. `None` collections are left
    /// untouched.
    pub fn import(&mut self, data: RecordSet) {
        if let Some(incoming) = data.sensors {
            self.sensors.retain(|s| s.builtin);
            self.sensors.extend(incoming.into_iter().filter(|s| !s.builtin));
        }
        if let Some(incoming) = data.lenses {
            self.lenses.retain(|l| l.builtin);
            self.lenses.extend(incoming.into_iter().filter(|l| !l.builtin));
        }
        if let Some(incoming) = data.targets {
            self.targets.retain(|t| t.builtin);
            self.targets.extend(incoming.into_iter().filter(|t| !t.builtin));
        }
        self.recalculate();
    }

    /// The user-created records, for export.
    #[must_use]
    pub fn user_records(&self) -> RecordSet {
        RecordSet {
            sensors: Some(self.sensors.iter().filter(|s| !s.builtin).cloned().collect()),
            lenses: Some(self.lenses.iter().filter(|l| !l.builtin).cloned().collect()),
            targets: Some(self.targets.iter().filter(|t| !t.builtin).cloned().collect()),
        }
    }

    // --- Recalculation ---

    /// Recompute the cached result from the current selection.
    pub fn recalculate(&mut self) {
        self.result = self.compute();
        match &self.result {
            Some(result) => {
                tracing::debug!(warnings = result.warnings.len(), "recalculated");
            }
            None => tracing::debug!("selection incomplete; result cleared"),
        }
    }

    fn compute(&self) -> Option<CalculationResult> {
        let sensor = self.sensor(self.config.sensor_id?)?;
        let lens = self.lens(self.config.lens_id?)?;
        let target = self.target(self.config.target_id?)?;
        Some(calc::evaluate(
            sensor,
            lens,
            target,
            self.config.working_distance_mm,
            self.config.aperture,
        ))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
