//! The coaching state machine.

use core::fmt::Write;

use crate::config::units::{Miles, Mph, Seconds};
use crate::config::Thresholds;
use crate::error::{CoachError, Error, Result};
use crate::plan::{BeddingStage, DistancePhase, Plan, Stage};
use crate::telemetry;

use super::countdown::CountdownTick;
use super::distance::GeoPosition;
use super::events::{CoachEvent, Events, ReloadOutcome};
use super::instruction::Instruction;
use super::phase::{classify_entry, classify_hold, classify_steady, Phase};
use super::progress::Progress;
use super::state::RunState;

/// Brake-bedding coach.
///
/// Consumes speed samples and countdown ticks against an ordered [`Plan`]
/// and decides what the driver should do next. All inputs must be fed from a
/// single execution context; the coach never blocks and never spawns work.
///
/// Gap and cooldown distances are tracked by integrating speed over the
/// elapsed time between samples. Position fixes are recorded for reference
/// only and never complete a phase.
///
/// # Example
///
/// ```rust,ignore
/// use brake_bedding::{Coach, Plan, Thresholds, Mph, Seconds};
///
/// let mut coach = Coach::new(Plan::standard_routine(), Thresholds::default());
/// coach.start()?;
///
/// for event in coach.on_speed_sample(Mph(42.0), Seconds(1.0)) {
///     if let CoachEvent::CountdownArmed(tick) = event {
///         scheduler.every_second(tick);
///     }
/// }
/// println!("{}", coach.current_instruction());
/// ```
#[derive(Debug, Clone)]
pub struct Coach {
    plan: Plan,
    pending_plan: Option<Plan>,
    thresholds: Thresholds,
    run: RunState,
}

impl Coach {
    /// Create an idle coach for `plan`.
    ///
    /// `thresholds` are taken as given; use [`try_new`](Self::try_new) for
    /// values that have not been through [`Thresholds::validate`].
    pub fn new(plan: Plan, thresholds: Thresholds) -> Self {
        Self {
            plan,
            pending_plan: None,
            thresholds,
            run: RunState::default(),
        }
    }

    /// Create an idle coach after validating `thresholds`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidThreshold` if a band is negative or not finite.
    pub fn try_new(plan: Plan, thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self::new(plan, thresholds))
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.run.phase
    }

    /// Whether a procedure is in progress.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.run.phase.is_active()
    }

    /// Current stage index (0-based).
    #[inline]
    pub fn stage_index(&self) -> usize {
        self.run.stage_index
    }

    /// Current cycle index within the stage (0-based).
    #[inline]
    pub fn cycle_index(&self) -> u16 {
        self.run.cycle_index
    }

    /// Last reported speed.
    #[inline]
    pub fn current_speed(&self) -> Mph {
        self.run.current_speed
    }

    /// Distance left in the gap or cooldown phase.
    #[inline]
    pub fn remaining_distance(&self) -> Miles {
        self.run.gap.remaining()
    }

    /// Straight-line distance from the first position fix of the current
    /// distance phase.
    #[inline]
    pub fn position_distance(&self) -> Option<Miles> {
        self.run.odometer.from_anchor()
    }

    /// Token of the live hold countdown, if one is running.
    #[inline]
    pub fn pending_countdown(&self) -> Option<CountdownTick> {
        self.run.countdown.pending()
    }

    /// Seconds left on the live hold countdown.
    #[inline]
    pub fn countdown_remaining(&self) -> Option<u8> {
        self.pending_countdown().map(|_| self.run.countdown.remaining())
    }

    /// The plan being run.
    #[inline]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// A reloaded plan waiting for the coach to go idle.
    #[inline]
    pub fn pending_plan(&self) -> Option<&Plan> {
        self.pending_plan.as_ref()
    }

    /// Speed bands in use.
    #[inline]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Snapshot of the run state.
    #[inline]
    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    /// Instruction for the current phase.
    pub fn current_instruction(&self) -> Instruction {
        let stage = self.plan.stage_at(self.run.stage_index);
        match (self.run.phase, stage) {
            (Phase::Idle, _) if self.plan.is_empty() => Instruction::no_stages(),
            (Phase::Idle, _) => Instruction::ready(),
            (Phase::ProcedureComplete, _) => Instruction::complete(),
            (Phase::DrivingGap, Some(stage)) => Instruction::drive(
                self.run.gap.remaining(),
                self.run.current_speed,
                stage.is_cooldown(),
            ),
            (Phase::Accelerating, Some(Stage::Bedding(b))) => Instruction::accelerate(b.start_speed),
            (Phase::Decelerating, Some(Stage::Bedding(b))) => Instruction::slow_down(b.start_speed),
            (Phase::HoldingSpeed, Some(Stage::Bedding(b))) => {
                Instruction::hold(b.start_speed, self.countdown_remaining())
            }
            (Phase::Braking, Some(Stage::Bedding(b))) => {
                Instruction::brake(b.braking_intensity, b.target_speed)
            }
            // Active phase without a matching stage breaks the run invariants.
            (phase, stage) => unreachable!("phase {} at stage {:?}", phase, stage),
        }
    }

    /// Progress counters for the stage/cycle display.
    pub fn progress(&self) -> Progress {
        let stage = self.plan.stage_at(self.run.stage_index);
        Progress {
            stage_index: self.run.stage_index,
            stages_total: self.plan.len(),
            cycle_index: self.run.cycle_index,
            cycles_in_stage: stage.map(Stage::cycle_count).unwrap_or(0),
            braking_intensity: stage.and_then(Stage::braking_intensity),
        }
    }

    /// Speed line for the display, in whole mph.
    pub fn speed_readout(&self) -> heapless::String<24> {
        let mut out = heapless::String::new();
        let _ = write!(out, "Speed: {} mph", self.run.current_speed.0 as u32);
        out
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Start (or restart) the procedure from the first stage.
    ///
    /// A plan queued by [`reload_stages`](Self::reload_stages) is installed
    /// first. The first cycle's phase is chosen from the last reported speed.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::EmptyPlan` if there are no stages; the coach stays
    /// idle. Events from installing a queued plan are lost with the error, so
    /// callers that report them call [`apply_queued_plan`](Self::apply_queued_plan)
    /// first.
    pub fn start(&mut self) -> Result<Events> {
        self.run.restart();
        let mut events = self.apply_queued_plan();

        if self.plan.is_empty() {
            return Err(Error::Coach(CoachError::EmptyPlan));
        }

        emit(&mut events, CoachEvent::Started);
        emit(&mut events, CoachEvent::StageStarted { stage: 0 });
        self.enter_cycle(&mut events);
        Ok(events)
    }

    /// Install a plan queued by [`reload_stages`](Self::reload_stages) now,
    /// abandoning any run in progress. Does nothing when no plan is queued.
    pub fn apply_queued_plan(&mut self) -> Events {
        let mut events = Events::new();
        let Some(plan) = self.pending_plan.take() else {
            return events;
        };

        let from = self.run.phase;
        self.run.restart();
        if from != Phase::Idle {
            emit(&mut events, CoachEvent::PhaseChanged { from, to: Phase::Idle });
        }
        self.plan = plan;
        emit(&mut events, CoachEvent::PlanReloaded);
        events
    }

    /// Abandon the run and return to idle.
    pub fn stop(&mut self) -> Events {
        let mut events = Events::new();
        let from = self.run.phase;
        self.run.restart();

        if from != Phase::Idle {
            emit(&mut events, CoachEvent::Stopped);
            emit(&mut events, CoachEvent::PhaseChanged { from, to: Phase::Idle });
        }
        for event in self.apply_queued_plan() {
            let _ = events.push(event);
        }
        events
    }

    /// Replace the plan.
    ///
    /// Applied immediately while idle. Otherwise the plan is queued and
    /// installed when the run stops or on the next `start()`; the current run
    /// finishes against the old plan. A later reload replaces a queued one.
    pub fn reload_stages(&mut self, plan: Plan) -> ReloadOutcome {
        if self.run.phase == Phase::Idle {
            self.plan = plan;
            self.pending_plan = None;
            ReloadOutcome::Applied
        } else {
            self.pending_plan = Some(plan);
            ReloadOutcome::Queued
        }
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Feed one speed sample taken `elapsed` after the previous one.
    ///
    /// The speed is always recorded so that `start()` can classify against
    /// it. Plan position and distance only change while a procedure runs.
    pub fn on_speed_sample(&mut self, speed: Mph, elapsed: Seconds) -> Events {
        let mut events = Events::new();

        if !speed.0.is_finite() {
            telemetry::sample_dropped(self.run.phase);
            return events;
        }
        let speed = Mph(speed.0.max(0.0));
        let elapsed = if elapsed.0.is_finite() && elapsed.0 > 0.0 {
            elapsed
        } else {
            Seconds(0.0)
        };
        self.run.current_speed = speed;

        match self.run.phase {
            Phase::Idle | Phase::ProcedureComplete => {}
            Phase::DrivingGap => {
                if self.run.gap.integrate(speed, elapsed) {
                    self.complete_cycle(&mut events);
                }
            }
            Phase::Accelerating | Phase::Decelerating => {
                let b = self.current_bedding();
                let d = (speed - b.start_speed).0;
                if let Some(next) = classify_steady(&self.thresholds, self.run.phase, d) {
                    self.set_phase(next, &mut events);
                }
            }
            Phase::HoldingSpeed => {
                let b = self.current_bedding();
                let d = (speed - b.start_speed).0;
                if let Some(next) = classify_hold(&self.thresholds, d) {
                    self.set_phase(next, &mut events);
                }
            }
            Phase::Braking => {
                let b = self.current_bedding();
                if speed <= b.target_speed {
                    self.begin_distance_phase(b.phase_distance(), &mut events);
                }
            }
        }

        events
    }

    /// Feed one speed sample stamped with a monotonic time in milliseconds.
    ///
    /// The first sample, and any sample not newer than the latest seen,
    /// counts as zero elapsed time.
    pub fn on_timed_sample(&mut self, speed: Mph, timestamp_ms: u64) -> Events {
        let elapsed = match self.run.last_sample_timestamp {
            Some(last) if timestamp_ms > last => Seconds::from_millis(timestamp_ms - last),
            _ => Seconds(0.0),
        };
        let latest = self
            .run
            .last_sample_timestamp
            .map_or(timestamp_ms, |last| last.max(timestamp_ms));
        self.run.last_sample_timestamp = Some(latest);

        self.on_speed_sample(speed, elapsed)
    }

    /// Record a position fix for the distance phase cross-check.
    pub fn on_position_sample(&mut self, position: GeoPosition) {
        if self.run.phase == Phase::DrivingGap {
            self.run.odometer.record(position);
        }
    }

    /// Apply one second of the hold countdown.
    ///
    /// Ticks for a countdown that was cancelled or re-armed, or that arrive
    /// outside `HOLDING_SPEED`, are ignored.
    pub fn on_countdown_tick(&mut self, tick: CountdownTick) -> Events {
        let mut events = Events::new();

        if self.run.phase != Phase::HoldingSpeed || !self.run.countdown.is_current(tick) {
            telemetry::stale_tick(tick.generation());
            return events;
        }

        let remaining = self.run.countdown.tick();
        emit(&mut events, CoachEvent::CountdownTicked { remaining });

        if remaining == 0 {
            let b = self.current_bedding();
            let d = (self.run.current_speed - b.start_speed).0;
            if self.thresholds.within_tolerance(d) {
                self.set_phase(Phase::Braking, &mut events);
            } else {
                // Above the band but under the overage: hold again.
                let tick = self.run.countdown.arm();
                emit(&mut events, CoachEvent::CountdownArmed(tick));
            }
        }

        events
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn current_stage(&self) -> Stage {
        // Out-of-range here is an invariant violation, not a user error.
        self.plan.stages()[self.run.stage_index]
    }

    fn current_bedding(&self) -> BeddingStage {
        match self.current_stage() {
            Stage::Bedding(b) => b,
            Stage::Cooldown(_) => unreachable!("speed phase {} in cooldown stage", self.run.phase),
        }
    }

    fn set_phase(&mut self, next: Phase, events: &mut Events) {
        let from = self.run.phase;
        if from == next {
            return;
        }
        if from == Phase::HoldingSpeed {
            self.run.countdown.cancel();
        }
        self.run.phase = next;
        emit(events, CoachEvent::PhaseChanged { from, to: next });

        if next == Phase::HoldingSpeed {
            let tick = self.run.countdown.arm();
            emit(events, CoachEvent::CountdownArmed(tick));
        }
    }

    fn enter_cycle(&mut self, events: &mut Events) {
        match self.current_stage() {
            Stage::Cooldown(c) => self.begin_distance_phase(c.phase_distance(), events),
            Stage::Bedding(b) => {
                self.run.gap.reset(b.phase_distance());
                let d = (self.run.current_speed - b.start_speed).0;
                let next = classify_entry(&self.thresholds, d);
                self.set_phase(next, events);
            }
        }
    }

    fn begin_distance_phase(&mut self, distance: Miles, events: &mut Events) {
        self.run.gap.reset(distance);
        self.run.odometer.reset();
        self.set_phase(Phase::DrivingGap, events);

        // A zero gap completes the cycle as soon as braking ends.
        if self.run.gap.is_exhausted() {
            self.complete_cycle(events);
        }
    }

    fn complete_cycle(&mut self, events: &mut Events) {
        let stage = self.current_stage();
        emit(
            events,
            CoachEvent::CycleComplete {
                stage: self.run.stage_index,
                cycle: self.run.cycle_index,
            },
        );

        self.run.cycle_index += 1;
        if self.run.cycle_index < stage.cycle_count() {
            self.enter_cycle(events);
        } else {
            self.complete_stage(events);
        }
    }

    fn complete_stage(&mut self, events: &mut Events) {
        emit(
            events,
            CoachEvent::StageComplete {
                stage: self.run.stage_index,
            },
        );

        self.run.stage_index += 1;
        self.run.cycle_index = 0;

        if self.run.stage_index < self.plan.len() {
            emit(
                events,
                CoachEvent::StageStarted {
                    stage: self.run.stage_index,
                },
            );
            self.enter_cycle(events);
        } else {
            self.run.gap.reset(Miles::ZERO);
            self.run.odometer.reset();
            self.set_phase(Phase::ProcedureComplete, events);
            emit(events, CoachEvent::ProcedureComplete);
        }
    }
}

fn emit(events: &mut Events, event: CoachEvent) {
    telemetry::coach_event(&event);
    // A full batch drops the tail; state is already updated.
    let _ = events.push(event);
}
