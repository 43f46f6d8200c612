//! Unit tests for TOML plan parsing.

use brake_bedding::config::{parse_procedure, ProcedureConfig, StageKind};
use brake_bedding::{BrakingIntensity, Miles, Mph, Plan, Stage, Thresholds};

/// Test parsing a bedding stage with every field present.
#[test]
fn test_parse_bedding_stage() {
    let toml_str = r#"
[[stages]]
kind = "bedding"
number_of_stops = 10
start_speed_mph = 54.0
target_speed_mph = 30.0
gap_distance_miles = 0.62
braking_intensity = "moderate"
"#;

    let config: ProcedureConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.stage_count(), 1);

    let record = &config.stages[0];
    assert_eq!(record.kind, StageKind::Bedding);
    assert_eq!(record.number_of_stops, Some(10));
    assert_eq!(record.start_speed, Some(Mph(54.0)));
    assert_eq!(record.target_speed, Some(Mph(30.0)));
    assert_eq!(record.gap_distance, Some(Miles(0.62)));
    assert_eq!(record.braking_intensity, Some(BrakingIntensity::Moderate));
}

/// Test that plans saved with camelCase keys still load.
#[test]
fn test_parse_camel_case_keys() {
    let toml_str = r#"
[[stages]]
numberOfStops = 20
startSpeed = 42.0
targetSpeed = 18.0
gapDistance = 0.3
brakingIntensity = "LIGHT"

[[stages]]
kind = "cooldown"
distance = 6.0
"#;

    let plan = parse_procedure(toml_str).unwrap().plan().unwrap();
    assert_eq!(plan.len(), 2);

    let first = plan.stage_at(0).and_then(Stage::as_bedding).expect("bedding stage");
    assert_eq!(first.number_of_stops, 20);
    assert_eq!(first.braking_intensity, BrakingIntensity::Light);
    assert!(plan.is_cooldown(1));
}

/// Test that plans without an intensity load as moderate.
#[test]
fn test_missing_intensity_is_moderate() {
    let toml_str = r#"
[[stages]]
number_of_stops = 2
start_speed_mph = 40.0
target_speed_mph = 20.0
gap_distance_miles = 0.5
"#;

    let plan = parse_procedure(toml_str).unwrap().plan().unwrap();
    assert_eq!(
        plan.stage_at(0).and_then(Stage::braking_intensity),
        Some(BrakingIntensity::Moderate)
    );
}

/// Test that an intensity name this version does not know loads as moderate.
#[test]
fn test_unknown_intensity_is_moderate() {
    let toml_str = r#"
[[stages]]
number_of_stops = 2
start_speed_mph = 40.0
target_speed_mph = 20.0
gap_distance_miles = 0.5
braking_intensity = "ludicrous"
"#;

    let plan = parse_procedure(toml_str).unwrap().plan().unwrap();
    assert_eq!(
        plan.stage_at(0).and_then(Stage::braking_intensity),
        Some(BrakingIntensity::Moderate)
    );
}

/// Test that missing thresholds fall back to the defaults.
#[test]
fn test_default_thresholds() {
    let config = parse_procedure("").unwrap();
    assert_eq!(config.thresholds, Thresholds::default());
    assert_eq!(config.thresholds.speed_tolerance, Mph(2.0));
    assert_eq!(config.thresholds.max_speed_overage, Mph(5.0));
    assert_eq!(config.thresholds.min_speed_underage, Mph(1.0));
    assert!(config.plan().unwrap().is_empty());
}

/// Test that partial thresholds keep defaults for the rest.
#[test]
fn test_partial_thresholds() {
    let toml_str = r#"
[thresholds]
max_speed_overage = 8.0
"#;

    let config = parse_procedure(toml_str).unwrap();
    assert_eq!(config.thresholds.speed_tolerance, Mph(2.0));
    assert_eq!(config.thresholds.max_speed_overage, Mph(8.0));
}

/// Test that a negative threshold is rejected.
#[test]
fn test_negative_threshold_rejected() {
    let toml_str = r#"
[thresholds]
speed_tolerance = -1.0
"#;

    assert!(parse_procedure(toml_str).is_err());
}

/// Test that the stored form of the standard routine parses back unchanged.
#[test]
fn test_standard_routine_survives_storage() {
    let plan = Plan::standard_routine();
    let config = ProcedureConfig::from_plan(&plan, Thresholds::default());
    let text = toml::to_string(&config).expect("serialize");

    assert!(text.contains("kind = \"cooldown\""));
    assert!(text.contains("braking_intensity = \"light\""));

    let reloaded: ProcedureConfig = toml::from_str(&text).expect("parse");
    assert_eq!(reloaded.plan().unwrap(), plan);
}
