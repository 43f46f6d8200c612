//! Unit tests for plan validation.

use brake_bedding::config::{parse_procedure, validate_plan};
use brake_bedding::error::{Error, PlanError};
use brake_bedding::{BrakingIntensity, Miles, Mph, Plan, PlanBuilder};

fn bedding(builder: PlanBuilder, start: f32, target: f32) -> PlanBuilder {
    builder.bedding(2, Mph(start), Mph(target), Miles(0.5), BrakingIntensity::Moderate)
}

/// Test that the standard routine is valid.
#[test]
fn test_standard_routine_is_valid() {
    let plan = Plan::standard_routine();
    assert!(validate_plan(plan.stages()).is_ok());
    assert_eq!(plan.total_cycles(), 41);
}

/// Test that a target speed at or above the start speed is rejected.
#[test]
fn test_target_must_be_below_start() {
    let result = bedding(PlanBuilder::new(), 40.0, 40.0).build();
    assert!(matches!(
        result,
        Err(Error::Plan(PlanError::InvalidTargetSpeed { stage: 0, .. }))
    ));
}

/// Test that zero stops are rejected.
#[test]
fn test_zero_stops_rejected() {
    let result = PlanBuilder::new()
        .bedding(0, Mph(40.0), Mph(20.0), Miles(0.5), BrakingIntensity::Light)
        .build();
    assert!(matches!(
        result,
        Err(Error::Plan(PlanError::InvalidStops { stage: 0, value: 0 }))
    ));
}

/// Test that a negative gap is rejected but a zero gap is allowed.
#[test]
fn test_gap_distance_bounds() {
    let negative = PlanBuilder::new()
        .bedding(1, Mph(40.0), Mph(20.0), Miles(-0.1), BrakingIntensity::Light)
        .build();
    assert!(matches!(
        negative,
        Err(Error::Plan(PlanError::InvalidGapDistance { .. }))
    ));

    let zero = PlanBuilder::new()
        .bedding(1, Mph(40.0), Mph(20.0), Miles(0.0), BrakingIntensity::Light)
        .build();
    assert!(zero.is_ok());
}

/// Test that a cooldown stage must be the last stage.
#[test]
fn test_cooldown_must_be_last() {
    let builder = PlanBuilder::new().cooldown(Miles(6.0));
    let result = bedding(builder, 40.0, 20.0).build();
    assert!(matches!(
        result,
        Err(Error::Plan(PlanError::CooldownNotLast { stage: 0 }))
    ));
}

/// Test that a zero-length cooldown is rejected.
#[test]
fn test_cooldown_needs_distance() {
    let result = bedding(PlanBuilder::new(), 40.0, 20.0).cooldown(Miles(0.0)).build();
    assert!(matches!(
        result,
        Err(Error::Plan(PlanError::InvalidCooldownDistance { stage: 1, .. }))
    ));
}

/// Test that a stored stage missing a required field is reported by name.
#[test]
fn test_missing_field_reported() {
    let toml_str = r#"
[[stages]]
number_of_stops = 2
start_speed_mph = 40.0
gap_distance_miles = 0.5
"#;

    let result = parse_procedure(toml_str).unwrap().plan();
    assert!(matches!(
        result,
        Err(Error::Plan(PlanError::MissingField {
            stage: 0,
            field: "target_speed_mph"
        }))
    ));
}

/// Test that error messages number stages from one.
#[test]
fn test_error_display() {
    let err = Error::Plan(PlanError::CooldownNotLast { stage: 0 });
    assert_eq!(err.to_string(), "Plan error: Stage 1: cooldown must be the last stage");
}
