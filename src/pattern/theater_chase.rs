//! Theater chase pattern
//!
//! Every third pixel lit in the primary color, shifted by one pixel per
//! step (marching ants).

use super::{RenderStep, Step};
use crate::color::Rgb;

#[derive(Debug, Clone, Copy)]
pub struct TheaterChase {
    pub(crate) color1: Rgb,
    pub(crate) color2: Rgb,
}

impl RenderStep for TheaterChase {
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        let index = usize::from(step.index);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if (i + index) % 3 == 0 {
                self.color1
            } else {
                self.color2
            };
        }
    }
}
