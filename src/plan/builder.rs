//! Plan builder for programmatic plan creation.

use heapless::Vec;

use crate::config::units::{Miles, Mph};
use crate::error::{Error, PlanError, Result};

use super::sequence::{Plan, MAX_STAGES};
use super::stage::{BeddingStage, BrakingIntensity, CooldownStage, Stage};

/// Builder for creating stage plans.
///
/// Stages are appended in order; [`build`](Self::build) runs the same
/// validation as a loaded plan.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    stages: Vec<Stage, MAX_STAGES>,
    overflowed: bool,
}

impl PlanBuilder {
    /// Create a new plan builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bedding stage.
    pub fn bedding(
        self,
        number_of_stops: u16,
        start_speed: Mph,
        target_speed: Mph,
        gap_distance: Miles,
        braking_intensity: BrakingIntensity,
    ) -> Self {
        self.stage(Stage::Bedding(BeddingStage {
            number_of_stops,
            start_speed,
            target_speed,
            gap_distance,
            braking_intensity,
        }))
    }

    /// Append the cooldown stage.
    pub fn cooldown(self, distance: Miles) -> Self {
        self.stage(Stage::Cooldown(CooldownStage { distance }))
    }

    /// Append any stage.
    pub fn stage(mut self, stage: Stage) -> Self {
        if self.stages.push(stage).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Build the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if more than [`MAX_STAGES`] stages were added or a
    /// stage breaks a plan invariant.
    pub fn build(self) -> Result<Plan> {
        if self.overflowed {
            return Err(Error::Plan(PlanError::TooManyStages));
        }
        Plan::from_stages(&self.stages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::UnitExt;

    #[test]
    fn test_build_plan() {
        let plan = PlanBuilder::new()
            .bedding(2, 40.0_f32.mph(), 20.0_f32.mph(), 0.5_f32.miles(), BrakingIntensity::Firm)
            .cooldown(6.0_f32.miles())
            .build()
            .unwrap();

        assert_eq!(plan.len(), 2);
        assert!(plan.is_cooldown(1));
    }

    #[test]
    fn test_overflow_rejected() {
        let mut builder = PlanBuilder::new();
        for _ in 0..=MAX_STAGES {
            builder = builder.bedding(1, 40.0_f32.mph(), 20.0_f32.mph(), 0.1_f32.miles(), BrakingIntensity::Light);
        }
        assert!(matches!(builder.build(), Err(Error::Plan(PlanError::TooManyStages))));
    }

    #[test]
    fn test_invalid_stage_rejected() {
        let result = PlanBuilder::new()
            .bedding(0, 40.0_f32.mph(), 20.0_f32.mph(), 0.5_f32.miles(), BrakingIntensity::Firm)
            .build();
        assert!(matches!(
            result,
            Err(Error::Plan(PlanError::InvalidStops { stage: 0, value: 0 }))
        ));
    }
}
