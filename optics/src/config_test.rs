#![allow(clippy::float_cmp)]

use super::*;

fn warning(severity: Severity, code: WarningCode) -> Warning {
    Warning { severity, code, message: String::new() }
}

// --- View axis ---

#[test]
fn view_axis_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ViewAxis::Horizontal).unwrap(), "\"horizontal\"");
    assert_eq!(serde_json::to_string(&ViewAxis::Vertical).unwrap(), "\"vertical\"");
    assert_eq!(serde_json::to_string(&ViewAxis::Diagonal).unwrap(), "\"diagonal\"");
}

#[test]
fn view_axis_defaults_to_horizontal() {
    assert_eq!(ViewAxis::default(), ViewAxis::Horizontal);
}

// --- Configuration ---

#[test]
fn default_configuration() {
    let config = Configuration::default();
    assert_eq!(config.sensor_id, None);
    assert_eq!(config.lens_id, None);
    assert_eq!(config.target_id, None);
    assert_eq!(config.working_distance_mm, 300.0);
    assert_eq!(config.aperture, 4.0);
    assert_eq!(config.view_axis, ViewAxis::Horizontal);
}

#[test]
fn configuration_serde_roundtrip() {
    let config = Configuration {
        sensor_id: Some(uuid::Uuid::new_v4()),
        working_distance_mm: 450.0,
        view_axis: ViewAxis::Diagonal,
        ..Configuration::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}

// --- Severity ---

#[test]
fn severity_orders_info_below_warning_below_error() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

#[test]
fn overall_severity_is_none_when_clean() {
    assert_eq!(overall_severity(&[]), None);
}

#[test]
fn overall_severity_is_the_maximum_present() {
    let infos = [warning(Severity::Info, WarningCode::FovMuchLarger)];
    assert_eq!(overall_severity(&infos), Some(Severity::Info));

    let mixed = [
        warning(Severity::Info, WarningCode::FovMuchLarger),
        warning(Severity::Warning, WarningCode::DofInsufficient),
    ];
    assert_eq!(overall_severity(&mixed), Some(Severity::Warning));

    let with_error = [
        warning(Severity::Warning, WarningCode::ImageCircleTooSmall),
        warning(Severity::Error, WarningCode::NoRealImage),
    ];
    assert_eq!(overall_severity(&with_error), Some(Severity::Error));
}

// --- Warning codes ---

#[test]
fn warning_codes_serialize_screaming_snake() {
    assert_eq!(serde_json::to_string(&WarningCode::NoRealImage).unwrap(), "\"NO_REAL_IMAGE\"");
    assert_eq!(
        serde_json::to_string(&WarningCode::BelowMinWorkingDistance).unwrap(),
        "\"BELOW_MIN_WORKING_DISTANCE\""
    );
    assert_eq!(
        serde_json::to_string(&WarningCode::ImageCircleTooSmall).unwrap(),
        "\"IMAGE_CIRCLE_TOO_SMALL\""
    );
}

#[test]
fn warning_code_display_matches_wire_form() {
    let codes = [
        WarningCode::NoRealImage,
        WarningCode::BelowMinWorkingDistance,
        WarningCode::ImageCircleTooSmall,
        WarningCode::DofInsufficient,
        WarningCode::FovTooSmall,
        WarningCode::FovMuchLarger,
    ];
    for code in codes {
        let wire = serde_json::to_string(&code).unwrap();
        assert_eq!(format!("\"{code}\""), wire);
    }
}

// --- Calculation result ---

#[test]
fn zeroed_result_carries_warnings_and_nothing_else() {
    let result = CalculationResult::zeroed(vec![warning(Severity::Error, WarningCode::NoRealImage)]);
    assert_eq!(result.magnification, 0.0);
    assert_eq!(result.fov_horizontal_mm, 0.0);
    assert_eq!(result.image_distance_mm, 0.0);
    assert_eq!(result.dof_total_mm, 0.0);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.status(), Some(Severity::Error));
}

#[test]
fn status_is_none_without_warnings() {
    let result = CalculationResult::zeroed(Vec::new());
    assert_eq!(result.status(), None);
}
