//! Rainbow cycling pattern
//!
//! Walks the full hue wheel across the strip and rotates it one wheel
//! position per step, so every pixel traverses the entire wheel over one
//! cycle.

use super::{RenderStep, Step};
use crate::color::{Rgb, wheel};

#[derive(Debug, Clone, Copy)]
pub struct RainbowCycle;

impl RenderStep for RainbowCycle {
    #[allow(clippy::cast_possible_truncation)]
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        let count = leds.len();
        if count == 0 {
            return;
        }

        let index = usize::from(step.index);
        for (i, led) in leds.iter_mut().enumerate() {
            *led = wheel(((i * 256 / count + index) & 255) as u8);
        }
    }
}
