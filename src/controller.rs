//! Animation scheduling and strip output.
//!
//! A single [`Controller::tick`] call is the only entry point the
//! embedding control loop needs; it polls elapsed time, renders the due
//! step, flushes it to the driver, and advances pattern state without
//! ever blocking the caller.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;
use crate::command::{Command, CommandReceiver};
use crate::pattern::{Pattern, PatternId, StepEvent};

/// Scheduler and strip driver facade for at most one active pattern.
///
/// Owns the frame buffer (`MAX_LEDS` capacity, `pixel_count` of it live)
/// and is its only writer; render steps see the previous frame's pixels,
/// which the scanner's trail decay relies on. Patterns are moved in on
/// [`start`](Self::start) and handed back from [`stop`](Self::stop), so
/// no dangling association can outlive either side.
pub struct Controller<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMAND_QUEUE_SIZE: usize> {
    output: O,
    commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
    frame: [Rgb; MAX_LEDS],
    pixel_count: usize,
    active: Option<Pattern>,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const COMMAND_QUEUE_SIZE: usize>
    Controller<'a, O, MAX_LEDS, COMMAND_QUEUE_SIZE>
{
    /// Create a controller bound to a driver and a command queue.
    ///
    /// `pixel_count` is clamped to the buffer capacity `MAX_LEDS`.
    pub fn new(
        output: O,
        pixel_count: usize,
        commands: CommandReceiver<'a, COMMAND_QUEUE_SIZE>,
    ) -> Self {
        Self {
            output,
            commands,
            frame: [Rgb::default(); MAX_LEDS],
            pixel_count: pixel_count.min(MAX_LEDS),
            active: None,
        }
    }

    /// Make `pattern` the active pattern and reset it.
    ///
    /// The strip is not cleared; the first render step overwrites every
    /// pixel it touches, and patterns that read back pixels (scanner,
    /// pulsar) start from whatever was last visible.
    pub fn start(&mut self, mut pattern: Pattern) {
        pattern.reset();
        #[cfg(feature = "esp32-log")]
        println!("pattern started: {}", pattern.id().as_str());
        self.active = Some(pattern);
    }

    /// Stop animating, blank the strip, and hand the pattern back.
    ///
    /// Idempotent; with nothing active it still blanks and flushes.
    pub fn stop(&mut self) -> Option<Pattern> {
        let stopped = self.active.take();
        #[cfg(feature = "esp32-log")]
        if let Some(pattern) = &stopped {
            println!("pattern stopped: {}", pattern.id().as_str());
        }
        self.frame[..self.pixel_count].fill(Rgb::default());
        self.output.write(&self.frame[..self.pixel_count]);
        stopped
    }

    /// True iff a pattern is currently animating.
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// True iff the active pattern is of the given kind.
    pub fn is_active_pattern(&self, id: PatternId) -> bool {
        self.active.map(|pattern| pattern.id()) == Some(id)
    }

    /// The active pattern, if any.
    pub const fn active(&self) -> Option<&Pattern> {
        self.active.as_ref()
    }

    /// Run one scheduling step.
    ///
    /// Drains pending commands, then, if the active pattern is due:
    /// renders the current step, flushes the frame to the driver, and
    /// advances pattern state - in that order, so the visible strip
    /// always reflects the step whose advance outcome is returned.
    ///
    /// Returns `None` when nothing was rendered (no active pattern, or
    /// not due yet); otherwise the advance outcome, with
    /// [`StepEvent::Wrapped`] signalling a completed cycle for the
    /// caller to chain on. At most one advance happens per call.
    pub fn tick(&mut self, now: Instant) -> Option<StepEvent> {
        self.process_commands();

        let pattern = self.active.as_mut()?;
        if !pattern.is_due(now) {
            return None;
        }

        pattern.render_step(&mut self.frame[..self.pixel_count]);
        self.output.write(&self.frame[..self.pixel_count]);
        Some(pattern.mark_updated(now))
    }

    /// Synchronously fill every pixel with one color and flush.
    pub fn set_all(&mut self, color: Rgb) {
        self.frame[..self.pixel_count].fill(color);
        self.output.write(&self.frame[..self.pixel_count]);
    }

    /// Reverse the active pattern in place; no-op when idle.
    pub fn reverse_active(&mut self) {
        if let Some(pattern) = self.active.as_mut() {
            pattern.reverse();
        }
    }

    /// The strip-visible part of the frame buffer.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.pixel_count]
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Drain all pending commands from the queue (non-blocking).
    fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            match command {
                Command::Start(pattern) => self.start(pattern),
                Command::Stop => {
                    self.stop();
                }
                Command::Reverse => self.reverse_active(),
            }
        }
    }
}
