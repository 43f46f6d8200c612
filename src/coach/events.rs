//! Events emitted by coach operations.

use core::fmt;

use heapless::Vec;

use super::countdown::CountdownTick;
use super::phase::Phase;

/// Upper bound on events produced by a single operation.
pub const MAX_EVENTS: usize = 16;

/// Batch of events from one operation, in the order they happened.
pub type Events = Vec<CoachEvent, MAX_EVENTS>;

/// Something the coach did in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoachEvent {
    /// Procedure started from stage 0.
    Started,
    /// Procedure stopped by the driver.
    Stopped,
    /// Phase transition.
    PhaseChanged {
        /// Previous phase.
        from: Phase,
        /// New phase.
        to: Phase,
    },
    /// A hold countdown was armed; the host should tick it once per second.
    CountdownArmed(CountdownTick),
    /// A hold countdown tick was applied.
    CountdownTicked {
        /// Seconds left.
        remaining: u8,
    },
    /// A stage began.
    StageStarted {
        /// Stage index.
        stage: usize,
    },
    /// A cycle finished.
    CycleComplete {
        /// Stage index.
        stage: usize,
        /// Cycle index within the stage.
        cycle: u16,
    },
    /// A stage finished.
    StageComplete {
        /// Stage index.
        stage: usize,
    },
    /// Every stage finished.
    ProcedureComplete,
    /// A reloaded plan was installed.
    PlanReloaded,
}

impl fmt::Display for CoachEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachEvent::Started => f.write_str("started"),
            CoachEvent::Stopped => f.write_str("stopped"),
            CoachEvent::PhaseChanged { from, to } => write!(f, "phase {from} -> {to}"),
            CoachEvent::CountdownArmed(tick) => {
                write!(f, "countdown-armed gen={}", tick.generation())
            }
            CoachEvent::CountdownTicked { remaining } => {
                write!(f, "countdown-ticked remaining={remaining}")
            }
            CoachEvent::StageStarted { stage } => write!(f, "stage-started {}", stage + 1),
            CoachEvent::CycleComplete { stage, cycle } => {
                write!(f, "cycle-complete {}.{}", stage + 1, cycle + 1)
            }
            CoachEvent::StageComplete { stage } => write!(f, "stage-complete {}", stage + 1),
            CoachEvent::ProcedureComplete => f.write_str("procedure-complete"),
            CoachEvent::PlanReloaded => f.write_str("plan-reloaded"),
        }
    }
}

/// Result of [`Coach::reload_stages`](super::Coach::reload_stages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReloadOutcome {
    /// Installed immediately (coach was idle).
    Applied,
    /// Held until the run stops or the next `start()`.
    Queued,
}
