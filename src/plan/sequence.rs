//! Immutable ordered stage plan.

use heapless::Vec;

use crate::config::units::{Miles, Mph};
use crate::config::{validate_plan, StageRecord};
use crate::error::{Error, PlanError, Result};

use super::stage::{BeddingStage, BrakingIntensity, CooldownStage, Stage};

/// Maximum number of stages in a plan.
pub const MAX_STAGES: usize = 32;

/// Read-only ordered stage sequence driven by the coach.
///
/// A plan is never edited in place; an edit produces a new plan which is
/// handed to [`Coach::reload_stages`](crate::coach::Coach::reload_stages).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    stages: Vec<Stage, MAX_STAGES>,
}

impl Plan {
    /// A plan with no stages.
    pub const fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Build a validated plan from stages.
    ///
    /// # Errors
    ///
    /// Returns an error if the stages break a plan invariant or exceed
    /// [`MAX_STAGES`].
    pub fn from_stages(stages: &[Stage]) -> Result<Self> {
        validate_plan(stages)?;
        let stages = Vec::from_slice(stages).map_err(|_| Error::Plan(PlanError::TooManyStages))?;
        Ok(Self { stages })
    }

    /// Build a validated plan from stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is incomplete or the plan is invalid.
    pub fn from_records(records: &[StageRecord]) -> Result<Self> {
        let mut stages: Vec<Stage, MAX_STAGES> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let stage = record
                .to_stage()
                .map_err(|field| Error::Plan(PlanError::MissingField { stage: index, field }))?;
            stages
                .push(stage)
                .map_err(|_| Error::Plan(PlanError::TooManyStages))?;
        }
        Self::from_stages(&stages)
    }

    /// The routine from the in-app guide: three bedding stages and a 6 mile cooldown.
    pub fn standard_routine() -> Self {
        let bedding = |stops, start, target, gap, intensity| {
            Stage::Bedding(BeddingStage {
                number_of_stops: stops,
                start_speed: Mph(start),
                target_speed: Mph(target),
                gap_distance: Miles(gap),
                braking_intensity: intensity,
            })
        };

        let mut stages = Vec::new();
        let _ = stages.push(bedding(20, 42.0, 18.0, 0.3, BrakingIntensity::Light));
        let _ = stages.push(bedding(10, 54.0, 30.0, 0.62, BrakingIntensity::Moderate));
        let _ = stages.push(bedding(10, 72.0, 30.0, 0.0, BrakingIntensity::Firm));
        let _ = stages.push(Stage::Cooldown(CooldownStage { distance: Miles(6.0) }));
        Self { stages }
    }

    /// Stage at `index`, if any.
    #[inline]
    pub fn stage_at(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the plan has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Whether the stage at `index` is the cooldown.
    #[inline]
    pub fn is_cooldown(&self, index: usize) -> bool {
        self.stage_at(index).map(Stage::is_cooldown).unwrap_or(false)
    }

    /// All stages in order.
    #[inline]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Get an iterator over stages.
    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Total cycles across all stages, counting the cooldown as one.
    pub fn total_cycles(&self) -> u32 {
        self.stages.iter().map(|s| u32::from(s.cycle_count())).sum()
    }

    /// Stored form of the plan.
    pub fn to_records(&self) -> Vec<StageRecord, MAX_STAGES> {
        self.stages.iter().map(StageRecord::from).collect()
    }
}
