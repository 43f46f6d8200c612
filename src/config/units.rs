//! Unit types for physical quantities.
//!
//! Provides type-safe representations of road speed, distance and elapsed
//! time so that mph, miles and seconds cannot be mixed up at call sites.

use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Seconds per hour, the bridge between mph and per-second sample spacing.
pub const SECONDS_PER_HOUR: f32 = 3600.0;

/// Meters-per-second to miles-per-hour factor used by the speed source.
pub const MPS_TO_MPH: f32 = 2.23694;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f32 = 1609.344;

/// Road speed in miles per hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Mph(pub f32);

impl Mph {
    /// Standstill.
    pub const ZERO: Self = Self(0.0);

    /// Create a new Mph value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert a raw sensor speed in meters per second.
    #[inline]
    pub fn from_meters_per_sec(mps: f32) -> Self {
        Self(mps * MPS_TO_MPH)
    }
}

impl Sub for Mph {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Distance driven over an interval at constant speed.
impl Mul<Seconds> for Mph {
    type Output = Miles;

    fn mul(self, rhs: Seconds) -> Self::Output {
        Miles(self.0 * rhs.0 / SECONDS_PER_HOUR)
    }
}

/// Distance in statute miles.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Miles(pub f32);

impl Miles {
    /// No distance.
    pub const ZERO: Self = Self(0.0);

    /// Create a new Miles value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Create from meters.
    #[inline]
    pub fn from_meters(meters: f32) -> Self {
        Self(meters / METERS_PER_MILE)
    }

    /// Subtract, flooring at zero.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self((self.0 - rhs.0).max(0.0))
    }

    /// Time to cover this distance at `speed`, `None` at standstill.
    pub fn time_at(self, speed: Mph) -> Option<Seconds> {
        if speed.0 > 0.0 {
            Some(Seconds(self.0 / speed.0 * SECONDS_PER_HOUR))
        } else {
            None
        }
    }
}

impl Add for Miles {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Miles {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Elapsed wall-clock time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Create from a millisecond count.
    #[inline]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms as f32 / 1000.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Mph.
    fn mph(self) -> Mph;
    /// Convert to Miles.
    fn miles(self) -> Miles;
    /// Convert to Seconds.
    fn secs(self) -> Seconds;
}

impl UnitExt for f32 {
    #[inline]
    fn mph(self) -> Mph {
        Mph(self)
    }

    #[inline]
    fn miles(self) -> Miles {
        Miles(self)
    }

    #[inline]
    fn secs(self) -> Seconds {
        Seconds(self)
    }
}
