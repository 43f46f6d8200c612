//! Stage types: bedding cycles and the trailing cooldown.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::units::{Miles, Mph};

/// How hard the driver should brake during a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum BrakingIntensity {
    /// Gentle stop.
    Light,
    /// Normal stop. Used when a saved plan does not say.
    #[default]
    Moderate,
    /// Firm stop.
    Firm,
    /// Just short of lock-up.
    Threshold,
    /// Into ABS engagement.
    Abs,
}

impl BrakingIntensity {
    /// Every intensity, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Moderate,
        Self::Firm,
        Self::Threshold,
        Self::Abs,
    ];

    /// Upper-case label shown in the braking instruction.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Moderate => "MODERATE",
            Self::Firm => "FIRM",
            Self::Threshold => "THRESHOLD",
            Self::Abs => "ABS",
        }
    }

    /// Human-readable name for stage lists.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::Firm => "Firm",
            Self::Threshold => "Threshold",
            Self::Abs => "ABS",
        }
    }

    /// Parse a stored name, case-insensitively. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.label().eq_ignore_ascii_case(name))
    }
}

impl<'de> Deserialize<'de> for BrakingIntensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Names from newer app versions fall back to the default rather than
        // rejecting the whole plan.
        let name = heapless::String::<16>::deserialize(deserializer).unwrap_or_default();
        Ok(Self::from_name(name.as_str()).unwrap_or_default())
    }
}

impl fmt::Display for BrakingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Distance-tracked portion shared by both stage kinds.
pub trait DistancePhase {
    /// Distance to drive once the phase begins.
    fn phase_distance(&self) -> Miles;
}

/// A stage of repeated accelerate → hold → brake → drive-gap cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeddingStage {
    /// Number of cycles (stops) in the stage, at least 1.
    pub number_of_stops: u16,
    /// Speed to reach and hold before braking.
    pub start_speed: Mph,
    /// Speed to brake down to.
    pub target_speed: Mph,
    /// Distance to drive after each stop.
    pub gap_distance: Miles,
    /// Braking effort for every stop in the stage.
    pub braking_intensity: BrakingIntensity,
}

impl DistancePhase for BeddingStage {
    fn phase_distance(&self) -> Miles {
        self.gap_distance
    }
}

/// Final easy drive with no heavy braking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CooldownStage {
    /// Distance to drive, > 0.
    pub distance: Miles,
}

impl DistancePhase for CooldownStage {
    fn phase_distance(&self) -> Miles {
        self.distance
    }
}

/// One segment of a procedure plan.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Brake-and-accelerate cycles.
    Bedding(BeddingStage),
    /// Trailing cooldown drive.
    Cooldown(CooldownStage),
}

impl Stage {
    /// Whether this is the cooldown stage.
    #[inline]
    pub fn is_cooldown(&self) -> bool {
        matches!(self, Stage::Cooldown(_))
    }

    /// Number of cycles the coach runs for this stage.
    #[inline]
    pub fn cycle_count(&self) -> u16 {
        match self {
            Stage::Bedding(b) => b.number_of_stops,
            Stage::Cooldown(_) => 1,
        }
    }

    /// Braking effort, `None` for cooldown.
    #[inline]
    pub fn braking_intensity(&self) -> Option<BrakingIntensity> {
        match self {
            Stage::Bedding(b) => Some(b.braking_intensity),
            Stage::Cooldown(_) => None,
        }
    }

    /// Bedding parameters, `None` for cooldown.
    #[inline]
    pub fn as_bedding(&self) -> Option<&BeddingStage> {
        match self {
            Stage::Bedding(b) => Some(b),
            Stage::Cooldown(_) => None,
        }
    }
}

impl DistancePhase for Stage {
    fn phase_distance(&self) -> Miles {
        match self {
            Stage::Bedding(b) => b.phase_distance(),
            Stage::Cooldown(c) => c.phase_distance(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Bedding(b) => write!(
                f,
                "{} stops {}→{} mph, {:.2} mi gap, {} braking",
                b.number_of_stops,
                b.start_speed.0,
                b.target_speed.0,
                b.gap_distance.0,
                b.braking_intensity.display_name()
            ),
            Stage::Cooldown(c) => write!(f, "Cooldown {:.2} mi", c.distance.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_names() {
        assert_eq!(BrakingIntensity::from_name("firm"), Some(BrakingIntensity::Firm));
        assert_eq!(BrakingIntensity::from_name("ABS"), Some(BrakingIntensity::Abs));
        assert_eq!(BrakingIntensity::from_name("HEAVY"), None);
        assert_eq!(BrakingIntensity::default(), BrakingIntensity::Moderate);
    }

    #[test]
    fn test_distance_phase_is_shared() {
        let bedding = Stage::Bedding(BeddingStage {
            number_of_stops: 3,
            start_speed: Mph(40.0),
            target_speed: Mph(20.0),
            gap_distance: Miles(0.5),
            braking_intensity: BrakingIntensity::Firm,
        });
        let cooldown = Stage::Cooldown(CooldownStage { distance: Miles(6.0) });

        assert_eq!(bedding.phase_distance(), Miles(0.5));
        assert_eq!(cooldown.phase_distance(), Miles(6.0));
        assert_eq!(bedding.cycle_count(), 3);
        assert_eq!(cooldown.cycle_count(), 1);
        assert!(cooldown.braking_intensity().is_none());
    }

    #[test]
    fn test_stage_summary() {
        let stage = Stage::Bedding(BeddingStage {
            number_of_stops: 20,
            start_speed: Mph(42.0),
            target_speed: Mph(18.0),
            gap_distance: Miles(0.3),
            braking_intensity: BrakingIntensity::Light,
        });
        assert_eq!(stage.to_string(), "20 stops 42→18 mph, 0.30 mi gap, Light braking");

        let cooldown = Stage::Cooldown(CooldownStage { distance: Miles(6.0) });
        assert_eq!(cooldown.to_string(), "Cooldown 6.00 mi");
    }
}
