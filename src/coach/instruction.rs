//! Driver-facing instruction text and urgency signal.

use core::fmt::{self, Write};

use heapless::String;

use crate::config::units::{Miles, Mph, Seconds};
use crate::plan::BrakingIntensity;

/// Capacity of instruction text.
pub const INSTRUCTION_LEN: usize = 64;

/// Shown when `start()` is refused for an empty plan.
pub const NO_STAGES_TEXT: &str = "No stages available. Please configure stages in Settings.";

/// How urgently the driver must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Urgency {
    /// Nothing to do.
    #[default]
    None,
    /// Informational.
    Low,
    /// Act soon.
    Medium,
    /// Act now.
    High,
}

/// Indicator color painted behind the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    /// Indicator dark.
    #[default]
    Off,
    /// Accelerate / drive on.
    Green,
    /// Hold steady.
    Blue,
    /// Too fast.
    Amber,
    /// Brake.
    Red,
}

/// Instruction text plus its urgency and color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instruction {
    /// Text for the driver.
    pub text: String<INSTRUCTION_LEN>,
    /// Urgency level.
    pub urgency: Urgency,
    /// Indicator color.
    pub color: IndicatorColor,
}

impl Instruction {
    fn format(urgency: Urgency, color: IndicatorColor, args: fmt::Arguments<'_>) -> Self {
        let mut text = String::new();
        // Overlong text is truncated by the fixed capacity.
        let _ = text.write_fmt(args);
        Self {
            text,
            urgency,
            color,
        }
    }

    /// Idle, ready to run the loaded plan.
    pub fn ready() -> Self {
        Self::format(Urgency::None, IndicatorColor::Off, format_args!("Ready to start"))
    }

    /// Idle with nothing to run.
    pub fn no_stages() -> Self {
        Self::format(Urgency::None, IndicatorColor::Off, format_args!("{}", NO_STAGES_TEXT))
    }

    /// Below the start speed band.
    pub fn accelerate(start: Mph) -> Self {
        Self::format(
            Urgency::Medium,
            IndicatorColor::Green,
            format_args!("Accelerate to {}", start.0),
        )
    }

    /// Above the overage band.
    pub fn slow_down(start: Mph) -> Self {
        Self::format(
            Urgency::High,
            IndicatorColor::Amber,
            format_args!("SLOW DOWN to {}", start.0),
        )
    }

    /// Inside the band; `countdown` is the seconds left, if ticking.
    pub fn hold(start: Mph, countdown: Option<u8>) -> Self {
        match countdown {
            Some(n) if n > 0 => Self::format(
                Urgency::Low,
                IndicatorColor::Blue,
                format_args!("Hold speed at {} ({})", start.0, n),
            ),
            _ => Self::format(
                Urgency::Low,
                IndicatorColor::Blue,
                format_args!("Hold speed at {}", start.0),
            ),
        }
    }

    /// Brake now.
    pub fn brake(intensity: BrakingIntensity, target: Mph) -> Self {
        Self::format(
            Urgency::High,
            IndicatorColor::Red,
            format_args!("{}: BRAKE to {}", intensity.label(), target.0),
        )
    }

    /// Distance left in the gap (or cooldown when `cooldown` is set), with ETA while moving.
    pub fn drive(remaining: Miles, speed: Mph, cooldown: bool) -> Self {
        let label = if cooldown { "Cooldown" } else { "Drive" };
        match remaining.time_at(speed) {
            Some(eta) => Self::format(
                Urgency::Low,
                IndicatorColor::Green,
                format_args!("{} {:.2} mi - ETA {}", label, remaining.0, Eta(eta)),
            ),
            None => Self::format(
                Urgency::Low,
                IndicatorColor::Green,
                format_args!("{} {:.2} mi", label, remaining.0),
            ),
        }
    }

    /// All stages done.
    pub fn complete() -> Self {
        Self::format(
            Urgency::None,
            IndicatorColor::Off,
            format_args!("Procedure Complete!"),
        )
    }

    /// Instruction text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time to arrival as `M:SS`, or `S sec` under a minute.
#[derive(Debug, Clone, Copy)]
pub struct Eta(pub Seconds);

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = libm::roundf(self.0 .0.max(0.0)) as u32;
        if total >= 60 {
            write!(f, "{}:{:02}", total / 60, total % 60)
        } else {
            write!(f, "{} sec", total)
        }
    }
}
