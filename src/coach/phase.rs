//! Coaching phases and speed classification.

use core::fmt;

use crate::config::Thresholds;

/// Closed set of coaching phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Not running. Initial state and the state after `stop()`.
    #[default]
    Idle,
    /// Below the start speed band.
    Accelerating,
    /// Too far above the start speed.
    Decelerating,
    /// Inside the start speed band, hold countdown running.
    HoldingSpeed,
    /// Braking toward the target speed.
    Braking,
    /// Driving the gap (or cooldown) distance.
    DrivingGap,
    /// Every stage done. Terminal until the next `start()`.
    ProcedureComplete,
}

impl Phase {
    /// Phase name for display/debugging.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "IDLE",
            Phase::Accelerating => "ACCELERATING",
            Phase::Decelerating => "DECELERATING",
            Phase::HoldingSpeed => "HOLDING_SPEED",
            Phase::Braking => "BRAKING",
            Phase::DrivingGap => "DRIVING_GAP",
            Phase::ProcedureComplete => "PROCEDURE_COMPLETE",
        }
    }

    /// Whether samples are processed in this phase.
    #[inline]
    pub const fn is_active(self) -> bool {
        !matches!(self, Phase::Idle | Phase::ProcedureComplete)
    }

    /// Whether the phase compares speed against the stage's start speed.
    #[inline]
    pub const fn is_speed_seeking(self) -> bool {
        matches!(
            self,
            Phase::Accelerating | Phase::Decelerating | Phase::HoldingSpeed
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase for a cycle about to begin, from `d = speed - start_speed`.
///
/// Rules apply in order: over the overage band slows the driver down, under
/// the tolerance band speeds them up, inside the band holds. Anything left
/// (above tolerance but not past the overage) falls back to accelerating.
pub fn classify_entry(thresholds: &Thresholds, d: f32) -> Phase {
    if thresholds.is_over(d) {
        Phase::Decelerating
    } else if d < -thresholds.speed_tolerance.0 {
        Phase::Accelerating
    } else if thresholds.within_tolerance(d) {
        Phase::HoldingSpeed
    } else {
        Phase::Accelerating
    }
}

/// Steady-state check while accelerating or decelerating.
///
/// Dropping under the tolerance band always ends a slow-down. The underage
/// band only decides when accelerating is re-confirmed, so it can never keep
/// the driver in `DECELERATING` below the start speed.
///
/// Returns `None` when `current` should be kept.
pub fn classify_steady(thresholds: &Thresholds, current: Phase, d: f32) -> Option<Phase> {
    let below_band = d < -thresholds.speed_tolerance.0;
    if thresholds.is_over(d) {
        Some(Phase::Decelerating)
    } else if thresholds.within_tolerance(d) {
        Some(Phase::HoldingSpeed)
    } else if d < -thresholds.min_speed_underage.0 || (current == Phase::Decelerating && below_band) {
        Some(Phase::Accelerating)
    } else {
        None
    }
}

/// Exit check while holding: `None` keeps the hold (and its countdown) alive.
pub fn classify_hold(thresholds: &Thresholds, d: f32) -> Option<Phase> {
    if thresholds.is_over(d) {
        Some(Phase::Decelerating)
    } else if d < -thresholds.speed_tolerance.0 {
        Some(Phase::Accelerating)
    } else {
        None
    }
}
