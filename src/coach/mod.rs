//! Coaching state machine and the values it reports.
//!
//! [`Coach`] walks the plan stage by stage. Each bedding cycle runs through
//! speed seeking, a three second hold, braking down to the target, and a gap
//! drive; the cooldown stage is a single distance phase.

mod countdown;
mod distance;
mod driver;
mod events;
mod instruction;
mod phase;
mod progress;
mod state;

pub use countdown::{CountdownTick, HoldCountdown, HOLD_SECONDS};
pub use distance::{GeoPosition, PositionOdometer, SpeedIntegrator, EARTH_RADIUS_M};
pub use driver::Coach;
pub use events::{CoachEvent, Events, ReloadOutcome, MAX_EVENTS};
pub use instruction::{Eta, IndicatorColor, Instruction, Urgency, INSTRUCTION_LEN, NO_STAGES_TEXT};
pub use phase::{classify_entry, classify_hold, classify_steady, Phase};
pub use progress::{CellState, Progress};
pub use state::RunState;
