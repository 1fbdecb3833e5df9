//! Optical setup planning for machine vision.
//!
//! Given a sensor, a lens, a target object, a working distance and an
//! aperture, this crate predicts field of view, magnification, resolution
//! and depth of field, flags physically invalid or risky configurations,
//! and projects the resulting optical bench onto a pannable/zoomable 2D
//! viewing surface. All engines are pure functions over immutable values;
//! there is no I/O anywhere in this crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sensor`] | Sensor records and derived geometry |
//! | [`lens`] | Lens records and the generic-lens patch |
//! | [`target`] | Target records and the custom-target patch |
//! | [`config`] | Configuration, warnings, and the calculation result |
//! | [`calc`] | Thin-lens calculation engine |
//! | [`validation`] | Configuration checks producing ordered warnings |
//! | [`viewport`] | World ↔ screen projection with pan/zoom |
//! | [`scene`] | Bench layout and bounds for the drawing layer |
//! | [`catalog`] | Built-in sensors, lenses, and targets |
//! | [`store`] | Explicit state container over records + configuration |
//! | [`units`] | Display formatting and the f-stop series |
//! | [`consts`] | Shared numeric constants (margins, zoom steps, etc.) |

pub mod calc;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod lens;
pub mod scene;
pub mod sensor;
pub mod store;
pub mod target;
pub mod units;
pub mod validation;
pub mod viewport;

/// Unique identifier for a catalog or user record.
pub type RecordId = uuid::Uuid;
