//! Mutable run state owned by the coach.

use crate::config::units::Mph;

use super::countdown::HoldCountdown;
use super::distance::{PositionOdometer, SpeedIntegrator};
use super::phase::Phase;

/// Everything that changes while a procedure runs.
///
/// Created by `start()`, mutated only by sample, tick and stop operations,
/// and reset when the procedure restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunState {
    /// Current stage (0-based). Equals the plan length once complete.
    pub stage_index: usize,
    /// Current cycle within the stage (0-based).
    pub cycle_index: u16,
    /// Current phase.
    pub phase: Phase,
    /// Last reported speed.
    pub current_speed: Mph,
    /// Gap/cooldown distance accounting.
    pub gap: SpeedIntegrator,
    /// Timestamp of the last timed sample (ms).
    pub last_sample_timestamp: Option<u64>,
    /// Hold countdown.
    pub countdown: HoldCountdown,
    /// Position cross-check for the distance phase.
    pub odometer: PositionOdometer,
}

impl RunState {
    /// Reset plan position for a new run, keeping the last known speed and
    /// invalidating any outstanding countdown token.
    pub fn restart(&mut self) {
        self.stage_index = 0;
        self.cycle_index = 0;
        self.phase = Phase::Idle;
        self.gap.reset(Default::default());
        self.countdown.cancel();
        self.odometer.reset();
    }
}
