//! Progress counters for the stage/cycle display.

use crate::plan::BrakingIntensity;

/// Where the run is in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Current stage (0-based). Equals `stages_total` once complete.
    pub stage_index: usize,
    /// Stages in the plan.
    pub stages_total: usize,
    /// Current cycle within the stage (0-based).
    pub cycle_index: u16,
    /// Cycles in the current stage, 0 when outside any stage.
    pub cycles_in_stage: u16,
    /// Braking effort of the current stage, `None` for cooldown or outside any stage.
    pub braking_intensity: Option<BrakingIntensity>,
}

/// Display state of one stage/cycle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellState {
    /// Already driven.
    Completed,
    /// In progress.
    Current,
    /// Not reached yet.
    Future,
}

impl Progress {
    /// Whether every stage has been driven.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.stages_total > 0 && self.stage_index >= self.stages_total
    }

    /// State of the cell for `cycle` within `stage`.
    pub fn cell_state(&self, stage: usize, cycle: u16) -> CellState {
        if stage < self.stage_index {
            CellState::Completed
        } else if stage == self.stage_index && cycle < self.cycle_index {
            CellState::Completed
        } else if stage == self.stage_index && cycle == self.cycle_index {
            CellState::Current
        } else {
            CellState::Future
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_states() {
        let progress = Progress {
            stage_index: 1,
            stages_total: 3,
            cycle_index: 2,
            cycles_in_stage: 10,
            braking_intensity: Some(BrakingIntensity::Moderate),
        };

        assert_eq!(progress.cell_state(0, 9), CellState::Completed);
        assert_eq!(progress.cell_state(1, 1), CellState::Completed);
        assert_eq!(progress.cell_state(1, 2), CellState::Current);
        assert_eq!(progress.cell_state(1, 3), CellState::Future);
        assert_eq!(progress.cell_state(2, 0), CellState::Future);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_complete_marks_everything_done() {
        let progress = Progress {
            stage_index: 2,
            stages_total: 2,
            ..Progress::default()
        };
        assert!(progress.is_complete());
        assert_eq!(progress.cell_state(1, 5), CellState::Completed);
    }
}
