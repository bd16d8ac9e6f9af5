//! Fade pattern
//!
//! Fills the whole strip with a per-channel linear blend between two
//! colors, one interpolation step per update.

use super::{RenderStep, Step};
use crate::color::{Rgb, lerp};

#[derive(Debug, Clone, Copy)]
pub struct Fade {
    pub(crate) from: Rgb,
    pub(crate) to: Rgb,
}

impl RenderStep for Fade {
    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        leds.fill(lerp(self.from, self.to, step.index, step.total_steps));
    }
}
