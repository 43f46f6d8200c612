//! Output side of the coach.
//!
//! A [`Renderer`] receives the instruction, progress and events after every
//! coach operation. Rendering failures never change coaching state.

mod lamp;

pub use lamp::IndicatorLamp;

use crate::coach::{CoachEvent, Instruction, Progress};
use crate::error::RenderError;

/// Sink for coaching output (display, lamp, speaker, log).
pub trait Renderer {
    /// Show the current instruction.
    fn render_instruction(&mut self, instruction: &Instruction) -> Result<(), RenderError>;

    /// Show stage/cycle progress.
    fn render_progress(&mut self, _progress: &Progress) -> Result<(), RenderError> {
        Ok(())
    }

    /// React to a single event (chime on cycle complete, etc.).
    fn on_event(&mut self, _event: &CoachEvent) -> Result<(), RenderError> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render_instruction(&mut self, instruction: &Instruction) -> Result<(), RenderError> {
        (**self).render_instruction(instruction)
    }

    fn render_progress(&mut self, progress: &Progress) -> Result<(), RenderError> {
        (**self).render_progress(progress)
    }

    fn on_event(&mut self, event: &CoachEvent) -> Result<(), RenderError> {
        (**self).on_event(event)
    }
}
