//! Example: Simulated bedding drive.
//!
//! This example demonstrates how to:
//! - Parse a stage plan from TOML
//! - Drive a `CoachSession` with timed speed samples
//! - Schedule countdown ticks from `CountdownArmed` events
//! - Show the instruction on a console renderer and an RGB lamp
//!
//! Run with: `cargo run --example simulated_drive --features std`

use brake_bedding::{
    coach::{CoachEvent, CountdownTick, Instruction, Phase, Progress},
    config::parse_procedure,
    error::{RenderError, Result},
    Coach, CoachSession, IndicatorLamp, Mph, Renderer,
};

const PLAN: &str = r#"
[thresholds]
speed_tolerance = 2.0
max_speed_overage = 5.0
min_speed_underage = 1.0

[[stages]]
number_of_stops = 2
start_speed_mph = 40.0
target_speed_mph = 20.0
gap_distance_miles = 0.2
braking_intensity = "light"

[[stages]]
kind = "cooldown"
distance_miles = 0.5
"#;

/// Mock lamp pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Prints instruction changes and events, and mirrors the color on a lamp.
struct Console {
    lamp: IndicatorLamp<MockPin, MockPin, MockPin>,
    last: Option<Instruction>,
}

impl Renderer for Console {
    fn render_instruction(&mut self, instruction: &Instruction) -> core::result::Result<(), RenderError> {
        if self.last.as_ref() != Some(instruction) {
            println!("  > {:<40} [{:?}]", instruction.as_str(), instruction.color);
            self.last = Some(instruction.clone());
        }
        self.lamp.render_instruction(instruction)
    }

    fn render_progress(&mut self, _progress: &Progress) -> core::result::Result<(), RenderError> {
        Ok(())
    }

    fn on_event(&mut self, event: &CoachEvent) -> core::result::Result<(), RenderError> {
        println!("    event: {}", event);
        Ok(())
    }
}

/// Simple driver model: chases whatever the coach asks for.
fn next_speed(coach: &Coach, speed: f32) -> f32 {
    let stage = coach.plan().stage_at(coach.stage_index()).and_then(|s| s.as_bedding());
    match (coach.phase(), stage) {
        (Phase::Accelerating, Some(b)) => (speed + 4.0).min(b.start_speed.value()),
        (Phase::Decelerating, Some(b)) => (speed - 3.0).max(b.start_speed.value()),
        (Phase::HoldingSpeed, Some(b)) => b.start_speed.value(),
        (Phase::Braking, _) => (speed - 8.0).max(0.0),
        (Phase::DrivingGap, _) => 45.0,
        _ => speed,
    }
}

fn main() -> Result<()> {
    println!("=== Simulated Bedding Drive ===\n");

    let config = parse_procedure(PLAN)?;
    let plan = config.plan()?;
    println!("Plan ({} cycles):", plan.total_cycles());
    for (i, stage) in plan.iter().enumerate() {
        println!("  {}. {}", i + 1, stage);
    }
    println!();

    let console = Console {
        lamp: IndicatorLamp::new(MockPin, MockPin, MockPin),
        last: None,
    };
    let mut session = CoachSession::new(Coach::new(plan, config.thresholds), console);
    session.start()?;

    let mut speed = 0.0_f32;
    let mut countdown: Option<CountdownTick> = None;
    let mut now_ms: u64 = 0;

    // One sample per second, for at most an hour of driving.
    while session.coach().phase() != Phase::ProcedureComplete && now_ms < 3_600_000 {
        now_ms += 1_000;
        speed = next_speed(session.coach(), speed);

        let sampled = session.on_timed_sample(Mph(speed), now_ms);
        let ticked = match countdown {
            Some(tick) => session.on_countdown_tick(tick),
            None => Default::default(),
        };

        for event in sampled.iter().chain(ticked.iter()) {
            if let CoachEvent::CountdownArmed(tick) = event {
                countdown = Some(*tick);
            }
        }
        if session.coach().pending_countdown().is_none() {
            countdown = None;
        }
    }

    println!("\nFinished after {} s", now_ms / 1_000);
    println!("{}", session.coach().speed_readout());
    println!("Render faults: {}", session.render_faults());

    Ok(())
}
