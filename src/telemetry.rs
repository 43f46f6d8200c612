//! Logging hooks for coaching events.
//!
//! With the `defmt` feature enabled each hook emits one defmt record; without
//! it the hooks compile to nothing.

#![cfg_attr(not(feature = "defmt"), allow(unused_variables))]

use crate::coach::{CoachEvent, Phase};
use crate::error::{Error, RenderError};

/// Log one coaching event.
pub(crate) fn coach_event(event: &CoachEvent) {
    #[cfg(feature = "defmt")]
    defmt::info!("coach: {}", event);
}

/// Log a sample dropped for carrying a non-finite value.
pub(crate) fn sample_dropped(phase: Phase) {
    #[cfg(feature = "defmt")]
    defmt::warn!("coach: dropping non-finite speed sample in {}", phase);
}

/// Log a stale countdown tick.
pub(crate) fn stale_tick(generation: u32) {
    #[cfg(feature = "defmt")]
    defmt::debug!("coach: ignoring stale countdown tick gen={}", generation);
}

/// Log a plan that could not be loaded and was replaced by an empty one.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
pub(crate) fn plan_dropped(error: &Error) {
    #[cfg(feature = "defmt")]
    defmt::warn!("plan: unusable plan data, continuing with no stages: {}", defmt::Display2Format(error));
}

/// Log a renderer failure.
pub(crate) fn render_fault(error: RenderError) {
    #[cfg(feature = "defmt")]
    defmt::warn!("render: {}", defmt::Display2Format(&error));
}
