//! Pulsar pattern - a two-step whole-strip alternator.

use super::{RenderStep, Step};
use crate::color::Rgb;

#[derive(Debug, Clone, Copy)]
pub struct Pulsar {
    pub(crate) color1: Rgb,
    pub(crate) color2: Rgb,
}

impl RenderStep for Pulsar {
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        let color = if step.index == 0 {
            self.color1
        } else {
            self.color2
        };
        leds.fill(color);
    }
}
