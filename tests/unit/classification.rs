//! Unit tests for speed classification and distance accounting.

use brake_bedding::coach::{classify_entry, classify_hold, classify_steady, Phase, SpeedIntegrator};
use brake_bedding::{BrakingIntensity, Coach, Miles, Mph, PlanBuilder, Seconds, Thresholds};
use proptest::prelude::*;

/// Test the literal entry cases.
#[test]
fn test_entry_examples() {
    let t = Thresholds::default();
    assert_eq!(classify_entry(&t, 6.0), Phase::Decelerating);
    assert_eq!(classify_entry(&t, 0.5), Phase::HoldingSpeed);
    assert_eq!(classify_entry(&t, -3.0), Phase::Accelerating);
}

/// Test band edges: tolerance and overage are inclusive.
#[test]
fn test_entry_band_edges() {
    let t = Thresholds::default();
    assert_eq!(classify_entry(&t, 2.0), Phase::HoldingSpeed);
    assert_eq!(classify_entry(&t, -2.0), Phase::HoldingSpeed);
    assert_eq!(classify_entry(&t, 5.0), Phase::Accelerating);
    assert_eq!(classify_entry(&t, 3.5), Phase::Accelerating);
}

/// Test that steady-state checks leave accelerating alone between bands.
#[test]
fn test_steady_dead_zone() {
    let t = Thresholds::new(0.5, 5.0, 1.0);
    assert_eq!(classify_steady(&t, Phase::Accelerating, -0.8), None);
    assert_eq!(classify_steady(&t, Phase::Accelerating, -1.5), Some(Phase::Accelerating));
    assert_eq!(classify_steady(&t, Phase::Accelerating, 3.0), None);
    assert_eq!(classify_steady(&t, Phase::Decelerating, 3.0), None);
}

/// Test that a slow-down ends as soon as speed falls under the tolerance band.
#[test]
fn test_decelerating_below_band_accelerates() {
    let wide_underage = Thresholds::new(2.0, 5.0, 4.0);
    assert_eq!(
        classify_steady(&wide_underage, Phase::Decelerating, -3.0),
        Some(Phase::Accelerating)
    );
    assert_eq!(classify_steady(&wide_underage, Phase::Accelerating, -3.0), None);

    let t = Thresholds::default();
    assert_eq!(classify_steady(&t, Phase::Decelerating, -2.5), Some(Phase::Accelerating));
}

/// Test that a hold only breaks outside the band.
#[test]
fn test_hold_exits() {
    let t = Thresholds::default();
    assert_eq!(classify_hold(&t, 4.0), None);
    assert_eq!(classify_hold(&t, -2.0), None);
    assert_eq!(classify_hold(&t, 5.5), Some(Phase::Decelerating));
    assert_eq!(classify_hold(&t, -2.5), Some(Phase::Accelerating));
}

fn thresholds() -> impl Strategy<Value = Thresholds> {
    (0.0f32..10.0, 0.0f32..20.0, 0.0f32..10.0)
        .prop_map(|(tol, over, under)| Thresholds::new(tol, over, under))
}

/// Quarter-mph bands so speed differences are exact in `f32`.
fn quarter_thresholds() -> impl Strategy<Value = Thresholds> {
    (0u8..40, 0u8..80, 0u8..40).prop_map(|(tol, over, under)| {
        Thresholds::new(f32::from(tol) / 4.0, f32::from(over) / 4.0, f32::from(under) / 4.0)
    })
}

/// Phase a freshly started single-stage coach picks at `speed`.
fn phase_at_start(t: Thresholds, start: f32, speed: f32) -> Phase {
    let plan = PlanBuilder::new()
        .bedding(1, Mph(start), Mph(start / 2.0), Miles(0.5), BrakingIntensity::Moderate)
        .build()
        .expect("valid plan");
    let mut coach = Coach::new(plan, t);
    coach.on_speed_sample(Mph(speed), Seconds(1.0));
    coach.start().expect("plan has stages");
    coach.phase()
}

proptest! {
    #[test]
    fn prop_start_phase_depends_only_on_difference(
        t in quarter_thresholds(),
        start_a in 20u8..120,
        start_b in 20u8..120,
        quarters in -64i16..64,
    ) {
        let d = f32::from(quarters) / 4.0;
        let a = phase_at_start(t, f32::from(start_a), f32::from(start_a) + d);
        let b = phase_at_start(t, f32::from(start_b), f32::from(start_b) + d);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, classify_entry(&t, d));
    }

    #[test]
    fn prop_entry_matches_rules(t in thresholds(), d in -50.0f32..50.0) {
        let expected = if d > t.max_speed_overage.0 {
            Phase::Decelerating
        } else if d < -t.speed_tolerance.0 {
            Phase::Accelerating
        } else if d.abs() <= t.speed_tolerance.0 {
            Phase::HoldingSpeed
        } else {
            Phase::Accelerating
        };
        prop_assert_eq!(classify_entry(&t, d), expected);
    }

    #[test]
    fn prop_remaining_never_increases(
        gap in 0.0f32..10.0,
        samples in proptest::collection::vec((-5.0f32..150.0, -10.0f32..7200.0), 1..50),
    ) {
        let mut integrator = SpeedIntegrator::default();
        integrator.reset(Miles(gap));
        let mut previous = integrator.remaining();

        for (speed, elapsed) in samples {
            integrator.integrate(Mph(speed), Seconds(elapsed));
            let now = integrator.remaining();
            prop_assert!(now <= previous);
            prop_assert!(now.value() >= 0.0);
            previous = now;
        }
    }
}
