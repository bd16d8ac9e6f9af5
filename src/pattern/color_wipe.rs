//! Color wipe pattern
//!
//! Paints a single pixel per step. Earlier pixels keep the color from
//! previous steps, so the fill accumulates across the strip.

use super::{RenderStep, Step};
use crate::color::Rgb;

#[derive(Debug, Clone, Copy)]
pub struct ColorWipe {
    pub(crate) color: Rgb,
}

impl RenderStep for ColorWipe {
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        if let Some(led) = leds.get_mut(usize::from(step.index)) {
            *led = self.color;
        }
    }
}
