//! Built-in sensors, lenses, and targets.
//!
//! These are the records available before any user edits: common industrial
//! Sony IMX sensors with datasheet values, fixed machine-vision lenses plus
//! one user-adjustable generic lens, and bench targets plus one editable
//! custom target. Built-in records are never removed by imports.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use uuid::Uuid;

use crate::lens::{Lens, LensKind};
use crate::sensor::{Sensor, ShutterType};
use crate::target::{Target, TargetKind};

fn sensor(
    name: &str,
    resolution_mp: f64,
    pixel_size_micron: f64,
    sensor_size_inch: &str,
    sensor_diagonal_mm: f64,
    shutter_type: ShutterType,
    aspect_ratio: f64,
    aspect_ratio_label: &str,
) -> Sensor {
    Sensor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        resolution_mp,
        pixel_size_micron,
        sensor_size_inch: sensor_size_inch.to_string(),
        sensor_diagonal_mm,
        shutter_type,
        aspect_ratio,
        aspect_ratio_label: aspect_ratio_label.to_string(),
        source_url: None,
        builtin: true,
    }
}

fn lens(
    name: &str,
    focal_length_mm: f64,
    aperture_min: f64,
    aperture_max: f64,
    min_working_distance_mm: f64,
    max_image_circle_mm: f64,
    kind: LensKind,
) -> Lens {
    Lens {
        id: Uuid::new_v4(),
        name: name.to_string(),
        focal_length_mm,
        aperture_min,
        aperture_max,
        min_working_distance_mm,
        max_image_circle_mm,
        kind,
        builtin: true,
    }
}

fn target(name: &str, width_mm: f64, height_mm: f64, depth_mm: f64, kind: TargetKind) -> Target {
    Target {
        id: Uuid::new_v4(),
        name: name.to_string(),
        width_mm,
        height_mm,
        depth_mm,
        kind,
        builtin: true,
    }
}

/// Common industrial image sensors.
#[must_use]
pub fn default_sensors() -> Vec<Sensor> {
    vec![
        sensor("Sony IMX273", 1.6, 3.45, "1/2.9\"", 6.3, ShutterType::Global, 1.34, "4:3"),
        sensor("Sony IMX265", 3.2, 3.45, "1/1.8\"", 8.9, ShutterType::Global, 1.34, "4:3"),
        sensor("Sony IMX264", 5.1, 3.45, "2/3\"", 11.1, ShutterType::Global, 1.2, "6:5"),
        sensor("Sony IMX250", 5.1, 3.45, "2/3\"", 11.1, ShutterType::Global, 1.2, "6:5"),
        sensor("Sony IMX255", 8.9, 3.45, "1\"", 16.1, ShutterType::Global, 1.89, "16:9"),
        sensor("Sony IMX253", 12.4, 3.45, "1.1\"", 17.6, ShutterType::Global, 1.37, "4:3"),
        sensor("Sony IMX174", 2.3, 5.86, "1/1.2\"", 13.4, ShutterType::Global, 1.78, "16:9"),
        sensor("Sony IMX178", 6.3, 2.4, "1/1.8\"", 8.9, ShutterType::Rolling, 1.49, "3:2"),
        sensor("Sony IMX183", 20.2, 2.4, "1\"", 15.9, ShutterType::Rolling, 1.5, "3:2"),
        sensor("Sony IMX226", 12.3, 1.85, "1/1.7\"", 9.3, ShutterType::Rolling, 1.36, "4:3"),
    ]
}

/// The generic placeholder lens plus fixed machine-vision lenses.
#[must_use]
pub fn default_lenses() -> Vec<Lens> {
    vec![
        lens("Generic Lens", 25.0, 1.4, 16.0, 100.0, 22.0, LensKind::Generic),
        lens("Tamron M112FM16 (16mm f/2.0)", 16.0, 2.0, 16.0, 100.0, 17.6, LensKind::Catalog),
        lens("Tamron M112FM25 (25mm f/1.4)", 25.0, 1.4, 16.0, 150.0, 17.6, LensKind::Catalog),
        lens("Tamron M112FM35 (35mm f/2.0)", 35.0, 2.0, 16.0, 200.0, 17.6, LensKind::Catalog),
        lens("Tamron M112FM50 (50mm f/2.8)", 50.0, 2.8, 16.0, 300.0, 17.6, LensKind::Catalog),
        lens("Edmund 33-303 (8mm f/1.4)", 8.0, 1.4, 16.0, 80.0, 11.0, LensKind::Catalog),
        lens("Edmund 86-571 (12mm f/1.8)", 12.0, 1.8, 16.0, 100.0, 17.6, LensKind::Catalog),
    ]
}

/// The editable custom target plus fixed bench targets.
#[must_use]
pub fn default_targets() -> Vec<Target> {
    vec![
        target("Custom", 100.0, 100.0, 10.0, TargetKind::Custom),
        target("48-Well Plate", 127.8, 85.5, 20.0, TargetKind::Catalog),
        target("96-Well Plate", 127.8, 85.5, 15.0, TargetKind::Catalog),
        target("Bee Cage (Hooper)", 100.0, 115.0, 50.0, TargetKind::Catalog),
        target("Petri Dish (100mm)", 100.0, 100.0, 15.0, TargetKind::Catalog),
    ]
}
