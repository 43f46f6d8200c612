//! Plan validation.

use crate::error::{Error, PlanError, Result};
use crate::plan::{BeddingStage, Stage};

/// Validate an ordered stage list.
///
/// Checks:
/// - Bedding stages have at least one stop, a positive start speed, a target
///   speed in `[0, start)` and a non-negative gap
/// - Cooldown distance is positive
/// - A cooldown stage, if present, is the last stage (so there is at most one)
pub fn validate_plan(stages: &[Stage]) -> Result<()> {
    let last = stages.len().saturating_sub(1);

    for (index, stage) in stages.iter().enumerate() {
        match stage {
            Stage::Bedding(b) => validate_bedding(index, b)?,
            Stage::Cooldown(c) => {
                if !c.distance.0.is_finite() || c.distance.0 <= 0.0 {
                    return Err(Error::Plan(PlanError::InvalidCooldownDistance {
                        stage: index,
                        value: c.distance.0,
                    }));
                }
                if index != last {
                    return Err(Error::Plan(PlanError::CooldownNotLast { stage: index }));
                }
            }
        }
    }

    Ok(())
}

fn validate_bedding(index: usize, stage: &BeddingStage) -> Result<()> {
    if stage.number_of_stops == 0 {
        return Err(Error::Plan(PlanError::InvalidStops {
            stage: index,
            value: stage.number_of_stops,
        }));
    }

    let start = stage.start_speed.0;
    if !start.is_finite() || start <= 0.0 {
        return Err(Error::Plan(PlanError::InvalidStartSpeed {
            stage: index,
            value: start,
        }));
    }

    let target = stage.target_speed.0;
    if !target.is_finite() || target < 0.0 || target >= start {
        return Err(Error::Plan(PlanError::InvalidTargetSpeed {
            stage: index,
            start,
            target,
        }));
    }

    let gap = stage.gap_distance.0;
    if !gap.is_finite() || gap < 0.0 {
        return Err(Error::Plan(PlanError::InvalidGapDistance {
            stage: index,
            value: gap,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Miles, Mph};
    use crate::plan::{BrakingIntensity, CooldownStage};

    fn bedding(start: f32, target: f32) -> Stage {
        Stage::Bedding(BeddingStage {
            number_of_stops: 2,
            start_speed: Mph(start),
            target_speed: Mph(target),
            gap_distance: Miles(0.5),
            braking_intensity: BrakingIntensity::Moderate,
        })
    }

    fn cooldown(distance: f32) -> Stage {
        Stage::Cooldown(CooldownStage { distance: Miles(distance) })
    }

    #[test]
    fn test_target_must_be_below_start() {
        let result = validate_plan(&[bedding(40.0, 40.0)]);
        assert!(matches!(
            result,
            Err(Error::Plan(PlanError::InvalidTargetSpeed { stage: 0, .. }))
        ));
        assert!(validate_plan(&[bedding(40.0, 0.0)]).is_ok());
    }

    #[test]
    fn test_cooldown_must_be_last() {
        assert!(validate_plan(&[bedding(40.0, 20.0), cooldown(6.0)]).is_ok());

        let result = validate_plan(&[cooldown(6.0), bedding(40.0, 20.0)]);
        assert!(matches!(
            result,
            Err(Error::Plan(PlanError::CooldownNotLast { stage: 0 }))
        ));

        let result = validate_plan(&[cooldown(1.0), cooldown(6.0)]);
        assert!(matches!(
            result,
            Err(Error::Plan(PlanError::CooldownNotLast { stage: 0 }))
        ));
    }

    #[test]
    fn test_cooldown_distance_positive() {
        let result = validate_plan(&[cooldown(0.0)]);
        assert!(matches!(
            result,
            Err(Error::Plan(PlanError::InvalidCooldownDistance { stage: 0, .. }))
        ));
    }

    #[test]
    fn test_empty_plan_is_valid() {
        assert!(validate_plan(&[]).is_ok());
    }
}
