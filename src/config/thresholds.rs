//! Speed band thresholds from configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};

use super::units::Mph;

/// Speed bands used to decide how far the driver is from a stage's start speed.
///
/// Loaded once when a [`Coach`](crate::coach::Coach) is built and constant for
/// the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Half-width of the "at speed" band around the start speed.
    #[serde(default = "default_speed_tolerance")]
    pub speed_tolerance: Mph,

    /// How far above the start speed the driver may be before being told to slow down.
    #[serde(default = "default_max_speed_overage")]
    pub max_speed_overage: Mph,

    /// How far below the start speed a steady-state check sends the driver back to accelerating.
    #[serde(default = "default_min_speed_underage")]
    pub min_speed_underage: Mph,
}

fn default_speed_tolerance() -> Mph {
    Mph(2.0)
}

fn default_max_speed_overage() -> Mph {
    Mph(5.0)
}

fn default_min_speed_underage() -> Mph {
    Mph(1.0)
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            speed_tolerance: default_speed_tolerance(),
            max_speed_overage: default_max_speed_overage(),
            min_speed_underage: default_min_speed_underage(),
        }
    }
}

impl Thresholds {
    /// Create thresholds from raw mph values.
    pub fn new(speed_tolerance: f32, max_speed_overage: f32, min_speed_underage: f32) -> Self {
        Self {
            speed_tolerance: Mph(speed_tolerance),
            max_speed_overage: Mph(max_speed_overage),
            min_speed_underage: Mph(min_speed_underage),
        }
    }

    /// `|d| <= speed_tolerance`.
    #[inline]
    pub fn within_tolerance(&self, d: f32) -> bool {
        libm::fabsf(d) <= self.speed_tolerance.0
    }

    /// `d > max_speed_overage`.
    #[inline]
    pub fn is_over(&self, d: f32) -> bool {
        d > self.max_speed_overage.0
    }

    /// Validate that every band is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("speed_tolerance", self.speed_tolerance.0),
            ("max_speed_overage", self.max_speed_overage.0),
            ("min_speed_underage", self.min_speed_underage.0),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(ConfigError::InvalidThreshold { name, value }));
            }
        }
        Ok(())
    }
}
