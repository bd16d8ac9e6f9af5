//! Scanner pattern
//!
//! A bright dot sweeps the strip while every other pixel is re-written at
//! half its previous brightness, leaving an exponentially decaying trail.

use super::{RenderStep, Step};
use crate::color::{Rgb, dim};

#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    pub(crate) color: Rgb,
}

impl RenderStep for Scanner {
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        let index = usize::from(step.index);
        // Mirrored dot for the return sweep. The position is compared
        // against pixel indices, never used to index, so values past the
        // end of the strip simply light no pixel.
        let mirrored = usize::from(step.total_steps) - index;

        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i == index || i == mirrored {
                self.color
            } else {
                dim(*led)
            };
        }
    }
}
