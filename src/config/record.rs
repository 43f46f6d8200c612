//! Stage records as stored in the plan file.

use serde::{Deserialize, Serialize};

use crate::plan::{BeddingStage, BrakingIntensity, CooldownStage, Stage};

use super::units::{Miles, Mph};

/// Stored stage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Brake-and-accelerate cycles. Plans saved before cooldown stages
    /// existed carry no kind and load as bedding.
    #[default]
    Bedding,
    /// Trailing cooldown drive.
    Cooldown,
}

/// One `[[stages]]` entry from the plan file.
///
/// All parameters are optional at this level; conversion to [`Stage`]
/// reports what is missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct StageRecord {
    /// Stage kind.
    #[serde(default)]
    pub kind: StageKind,

    /// Number of stops (bedding).
    #[serde(default, alias = "numberOfStops", skip_serializing_if = "Option::is_none")]
    pub number_of_stops: Option<u16>,

    /// Start speed in mph (bedding).
    #[serde(
        default,
        rename = "start_speed_mph",
        alias = "startSpeed",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_speed: Option<Mph>,

    /// Target speed in mph (bedding).
    #[serde(
        default,
        rename = "target_speed_mph",
        alias = "targetSpeed",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_speed: Option<Mph>,

    /// Gap distance in miles (bedding).
    #[serde(
        default,
        rename = "gap_distance_miles",
        alias = "gapDistance",
        skip_serializing_if = "Option::is_none"
    )]
    pub gap_distance: Option<Miles>,

    /// Braking intensity (bedding). Missing or unknown loads as moderate.
    #[serde(default, alias = "brakingIntensity", skip_serializing_if = "Option::is_none")]
    pub braking_intensity: Option<BrakingIntensity>,

    /// Cooldown distance in miles.
    #[serde(
        default,
        rename = "distance_miles",
        alias = "distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<Miles>,
}

impl From<&Stage> for StageRecord {
    fn from(stage: &Stage) -> Self {
        match stage {
            Stage::Bedding(b) => Self {
                kind: StageKind::Bedding,
                number_of_stops: Some(b.number_of_stops),
                start_speed: Some(b.start_speed),
                target_speed: Some(b.target_speed),
                gap_distance: Some(b.gap_distance),
                braking_intensity: Some(b.braking_intensity),
                distance: None,
            },
            Stage::Cooldown(c) => Self {
                kind: StageKind::Cooldown,
                distance: Some(c.distance),
                ..Self::default()
            },
        }
    }
}

impl StageRecord {
    /// Convert to a stage, naming the first missing field on failure.
    ///
    /// Value ranges are not checked here; see [`validate_plan`](super::validate_plan).
    pub fn to_stage(&self) -> core::result::Result<Stage, &'static str> {
        match self.kind {
            StageKind::Bedding => Ok(Stage::Bedding(BeddingStage {
                number_of_stops: self.number_of_stops.ok_or("number_of_stops")?,
                start_speed: self.start_speed.ok_or("start_speed_mph")?,
                target_speed: self.target_speed.ok_or("target_speed_mph")?,
                gap_distance: self.gap_distance.ok_or("gap_distance_miles")?,
                braking_intensity: self.braking_intensity.unwrap_or_default(),
            })),
            StageKind::Cooldown => Ok(Stage::Cooldown(CooldownStage {
                distance: self.distance.ok_or("distance_miles")?,
            })),
        }
    }
}
