//! Hold countdown with generation-guarded ticks.
//!
//! The host owns the one-second timer. Each time the coach enters
//! `HOLDING_SPEED` it arms a new generation and hands out a
//! [`CountdownTick`] token; the host feeds that token back once per second.
//! Ticks carrying an old generation are stale and dropped.

/// Whole seconds the driver must hold the start speed before braking.
pub const HOLD_SECONDS: u8 = 3;

/// Token identifying one armed countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownTick {
    generation: u32,
}

impl CountdownTick {
    /// Generation this tick belongs to.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Countdown state kept in the run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoldCountdown {
    generation: u32,
    remaining: u8,
    armed: bool,
}

impl HoldCountdown {
    /// Arm a fresh countdown, invalidating any earlier token.
    pub fn arm(&mut self) -> CountdownTick {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = HOLD_SECONDS;
        self.armed = true;
        CountdownTick {
            generation: self.generation,
        }
    }

    /// Invalidate the outstanding token, if any.
    pub fn cancel(&mut self) {
        if self.armed {
            self.generation = self.generation.wrapping_add(1);
        }
        self.armed = false;
        self.remaining = 0;
    }

    /// Whether `tick` belongs to the live countdown.
    #[inline]
    pub fn is_current(&self, tick: CountdownTick) -> bool {
        self.armed && tick.generation == self.generation
    }

    /// Consume one second. Returns the seconds left; the countdown disarms at zero.
    pub fn tick(&mut self) -> u8 {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
        }
        self.remaining
    }

    /// Seconds left on the live countdown.
    #[inline]
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Token for the live countdown, if armed.
    #[inline]
    pub fn pending(&self) -> Option<CountdownTick> {
        self.armed.then_some(CountdownTick {
            generation: self.generation,
        })
    }
}
