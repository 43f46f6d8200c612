//! Distance accounting for the gap and cooldown phases.
//!
//! Speed integration is the only source that completes a phase. Position
//! fixes are kept as a straight-line cross-check and never fire completion.

use crate::config::units::{Miles, Mph, Seconds};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeoPosition {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPosition {
    /// Create a new position.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle (haversine) distance to `other`.
    pub fn distance_to(&self, other: &GeoPosition) -> Miles {
        let to_rad = |deg: f64| deg.to_radians();
        let dlat = to_rad(other.latitude - self.latitude);
        let dlon = to_rad(other.longitude - self.longitude);
        let a = libm::pow(libm::sin(dlat / 2.0), 2.0)
            + libm::cos(to_rad(self.latitude))
                * libm::cos(to_rad(other.latitude))
                * libm::pow(libm::sin(dlon / 2.0), 2.0);
        let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));
        Miles::from_meters((EARTH_RADIUS_M * c) as f32)
    }
}

/// Remaining distance driven down by speed × elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedIntegrator {
    remaining: Miles,
}

impl SpeedIntegrator {
    /// Start a new phase with `distance` to go.
    #[inline]
    pub fn reset(&mut self, distance: Miles) {
        self.remaining = distance;
    }

    /// Distance left, never negative.
    #[inline]
    pub fn remaining(&self) -> Miles {
        self.remaining
    }

    /// Whether the phase distance is used up.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining.0 <= 0.0
    }

    /// Apply one sample. Returns `true` once the distance is used up.
    ///
    /// Standstill samples and empty intervals leave the distance unchanged;
    /// any gap length, however large, floors the result at zero.
    pub fn integrate(&mut self, speed: Mph, elapsed: Seconds) -> bool {
        if speed.0 > 0.0 && elapsed.0 > 0.0 {
            self.remaining = self.remaining.saturating_sub(speed * elapsed);
        }
        self.is_exhausted()
    }
}

/// Straight-line distance from the first fix seen in the current phase.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionOdometer {
    anchor: Option<GeoPosition>,
    from_anchor: Miles,
}

impl PositionOdometer {
    /// Forget the anchor; the next fix becomes the new one.
    #[inline]
    pub fn reset(&mut self) {
        self.anchor = None;
        self.from_anchor = Miles::ZERO;
    }

    /// Record a fix.
    pub fn record(&mut self, position: GeoPosition) {
        match self.anchor {
            Some(anchor) => self.from_anchor = anchor.distance_to(&position),
            None => self.anchor = Some(position),
        }
    }

    /// Distance from the anchor, `None` before the first fix.
    #[inline]
    pub fn from_anchor(&self) -> Option<Miles> {
        self.anchor.map(|_| self.from_anchor)
    }
}
