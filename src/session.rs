//! Coach plus renderer, kept in step.

use crate::coach::{Coach, CountdownTick, Events, GeoPosition, ReloadOutcome};
use crate::config::units::{Mph, Seconds};
use crate::error::{RenderError, Result};
use crate::plan::Plan;
use crate::render::Renderer;
use crate::telemetry;

/// Facade that feeds a [`Coach`] and renders its output after every call.
///
/// Renderer failures are logged and counted; they never reach the caller and
/// never change coaching state.
///
/// # Example
///
/// ```rust,ignore
/// let coach = Coach::new(load_plan_or_empty("plan.toml"), Thresholds::default());
/// let mut session = CoachSession::new(coach, IndicatorLamp::new(red, green, blue));
///
/// session.start()?;
/// loop {
///     let (speed, now_ms) = gps.next_fix();
///     for event in session.on_timed_sample(speed, now_ms) {
///         // schedule countdown ticks, etc.
///     }
/// }
/// ```
pub struct CoachSession<R: Renderer> {
    coach: Coach,
    renderer: R,
    render_faults: u32,
    last_fault: Option<RenderError>,
}

impl<R: Renderer> CoachSession<R> {
    /// Pair a coach with a renderer and draw the initial screen.
    pub fn new(coach: Coach, renderer: R) -> Self {
        let mut session = Self {
            coach,
            renderer,
            render_faults: 0,
            last_fault: None,
        };
        session.refresh();
        session
    }

    /// The wrapped coach.
    #[inline]
    pub fn coach(&self) -> &Coach {
        &self.coach
    }

    /// The renderer.
    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Render failures seen so far.
    #[inline]
    pub fn render_faults(&self) -> u32 {
        self.render_faults
    }

    /// Most recent render failure.
    #[inline]
    pub fn last_fault(&self) -> Option<RenderError> {
        self.last_fault
    }

    /// Split back into coach and renderer.
    pub fn into_parts(self) -> (Coach, R) {
        (self.coach, self.renderer)
    }

    /// See [`Coach::start`]. A queued plan is installed and reported to the
    /// renderer first, and the screen is refreshed whether or not the start
    /// succeeds.
    pub fn start(&mut self) -> Result<Events> {
        let reloaded = self.coach.apply_queued_plan();
        self.forward(&reloaded);

        let result = self.coach.start();
        match &result {
            Ok(events) => self.publish(events),
            Err(_) => self.refresh(),
        }
        result
    }

    /// See [`Coach::stop`].
    pub fn stop(&mut self) -> Events {
        let events = self.coach.stop();
        self.publish(&events);
        events
    }

    /// See [`Coach::on_speed_sample`].
    pub fn on_speed_sample(&mut self, speed: Mph, elapsed: Seconds) -> Events {
        let events = self.coach.on_speed_sample(speed, elapsed);
        self.publish(&events);
        events
    }

    /// See [`Coach::on_timed_sample`].
    pub fn on_timed_sample(&mut self, speed: Mph, timestamp_ms: u64) -> Events {
        let events = self.coach.on_timed_sample(speed, timestamp_ms);
        self.publish(&events);
        events
    }

    /// See [`Coach::on_position_sample`].
    pub fn on_position_sample(&mut self, position: GeoPosition) {
        self.coach.on_position_sample(position);
    }

    /// See [`Coach::on_countdown_tick`].
    pub fn on_countdown_tick(&mut self, tick: CountdownTick) -> Events {
        let events = self.coach.on_countdown_tick(tick);
        self.publish(&events);
        events
    }

    /// See [`Coach::reload_stages`].
    pub fn reload_stages(&mut self, plan: Plan) -> ReloadOutcome {
        let outcome = self.coach.reload_stages(plan);
        if outcome == ReloadOutcome::Applied {
            self.refresh();
        }
        outcome
    }

    fn publish(&mut self, events: &Events) {
        self.forward(events);
        self.refresh();
    }

    fn forward(&mut self, events: &Events) {
        for event in events {
            let result = self.renderer.on_event(event);
            self.record(result);
        }
    }

    fn refresh(&mut self) {
        let instruction = self.coach.current_instruction();
        let result = self.renderer.render_instruction(&instruction);
        self.record(result);

        let progress = self.coach.progress();
        let result = self.renderer.render_progress(&progress);
        self.record(result);
    }

    fn record(&mut self, result: core::result::Result<(), RenderError>) {
        if let Err(error) = result {
            telemetry::render_fault(error);
            self.render_faults = self.render_faults.saturating_add(1);
            self.last_fault = Some(error);
        }
    }
}
