//! Procedure configuration - root configuration structure.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plan::{Plan, MAX_STAGES};

use super::record::StageRecord;
use super::thresholds::Thresholds;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProcedureConfig {
    /// Speed bands for the coach.
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Ordered stage records.
    #[serde(default)]
    pub stages: Vec<StageRecord, MAX_STAGES>,
}

impl ProcedureConfig {
    /// Build the config that stores `plan` with `thresholds`.
    pub fn from_plan(plan: &Plan, thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            stages: plan.to_records(),
        }
    }

    /// Convert the stage records to a validated plan.
    pub fn plan(&self) -> Result<Plan> {
        Plan::from_records(&self.stages)
    }

    /// Number of stored stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
