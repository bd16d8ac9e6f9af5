#![no_std]

pub mod color;
pub mod command;
pub mod controller;
pub mod pattern;

pub use color::{Rgb, dim, lerp, rgb_from_u32, rgb_to_u32, wheel};
pub use command::{Command, CommandQueue, CommandReceiver, CommandSender};
pub use controller::Controller;
pub use pattern::{Direction, Pattern, PatternId, StepEvent};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to push a rendered frame to the physical strip.
/// The controller is generic over this trait; everything timing-critical
/// (bit encoding, DMA, latching) stays behind it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
