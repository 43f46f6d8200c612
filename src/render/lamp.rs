//! RGB indicator lamp driven from three GPIO pins.

use embedded_hal::digital::OutputPin;

use crate::coach::{IndicatorColor, Instruction};
use crate::error::RenderError;

use super::Renderer;

/// Common-cathode RGB lamp showing the instruction color.
///
/// Amber lights red and green together.
pub struct IndicatorLamp<RED, GREEN, BLUE>
where
    RED: OutputPin,
    GREEN: OutputPin,
    BLUE: OutputPin,
{
    red: RED,
    green: GREEN,
    blue: BLUE,
    /// Last color written, `None` until the first write.
    shown: Option<IndicatorColor>,
}

impl<RED, GREEN, BLUE> IndicatorLamp<RED, GREEN, BLUE>
where
    RED: OutputPin,
    GREEN: OutputPin,
    BLUE: OutputPin,
{
    /// Wrap the three channel pins. Nothing is written until the first render.
    pub fn new(red: RED, green: GREEN, blue: BLUE) -> Self {
        Self {
            red,
            green,
            blue,
            shown: None,
        }
    }

    /// Color currently shown.
    #[inline]
    pub fn color(&self) -> Option<IndicatorColor> {
        self.shown
    }

    /// Drive the lamp to `color`. Unchanged colors are not rewritten.
    pub fn show(&mut self, color: IndicatorColor) -> Result<(), RenderError> {
        if self.shown == Some(color) {
            return Ok(());
        }

        let (r, g, b) = match color {
            IndicatorColor::Off => (false, false, false),
            IndicatorColor::Green => (false, true, false),
            IndicatorColor::Blue => (false, false, true),
            IndicatorColor::Amber => (true, true, false),
            IndicatorColor::Red => (true, false, false),
        };

        // Invalidate first so a failed write is retried on the next render.
        self.shown = None;
        set(&mut self.red, r)?;
        set(&mut self.green, g)?;
        set(&mut self.blue, b)?;
        self.shown = Some(color);
        Ok(())
    }

    /// Release the pins.
    pub fn release(self) -> (RED, GREEN, BLUE) {
        (self.red, self.green, self.blue)
    }
}

fn set<P: OutputPin>(pin: &mut P, on: bool) -> Result<(), RenderError> {
    if on {
        pin.set_high().map_err(|_| RenderError::PinError)
    } else {
        pin.set_low().map_err(|_| RenderError::PinError)
    }
}

impl<RED, GREEN, BLUE> Renderer for IndicatorLamp<RED, GREEN, BLUE>
where
    RED: OutputPin,
    GREEN: OutputPin,
    BLUE: OutputPin,
{
    fn render_instruction(&mut self, instruction: &Instruction) -> Result<(), RenderError> {
        self.show(instruction.color)
    }
}
