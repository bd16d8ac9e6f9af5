//! Animation patterns with compile-time known variants
//!
//! All variants are stored in an enum to avoid heap allocations and
//! dynamic dispatch. Each variant implements the [`RenderStep`] trait;
//! step and timing bookkeeping is shared and lives in [`Pattern`].

mod color_wipe;
mod fade;
mod pulsar;
mod rainbow_cycle;
mod scanner;
mod theater_chase;

use embassy_time::{Duration, Instant};

pub use color_wipe::ColorWipe;
pub use fade::Fade;
pub use pulsar::Pulsar;
pub use rainbow_cycle::RainbowCycle;
pub use scanner::Scanner;
pub use theater_chase::TheaterChase;

use crate::color::Rgb;

const PATTERN_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const PATTERN_NAME_THEATER_CHASE: &str = "theater_chase";
const PATTERN_NAME_COLOR_WIPE: &str = "color_wipe";
const PATTERN_NAME_SCANNER: &str = "scanner";
const PATTERN_NAME_PULSAR: &str = "pulsar";
const PATTERN_NAME_FADE: &str = "fade";

const PATTERN_ID_RAINBOW_CYCLE: u8 = 0;
const PATTERN_ID_THEATER_CHASE: u8 = 1;
const PATTERN_ID_COLOR_WIPE: u8 = 2;
const PATTERN_ID_SCANNER: u8 = 3;
const PATTERN_ID_PULSAR: u8 = 4;
const PATTERN_ID_FADE: u8 = 5;

/// Step resolution of the hue wheel walked by [`RainbowCycle`].
const RAINBOW_CYCLE_STEPS: u16 = 255;

/// A [`Pulsar`] alternates between exactly two whole-strip fills.
const PULSAR_STEPS: u16 = 2;

/// Timestamp a pattern is rewound to on reset.
///
/// Any later `now` whose distance to the epoch exceeds the interval makes
/// the pattern immediately due, so a freshly started pattern renders its
/// first step on the next tick of a running clock.
const EPOCH: Instant = Instant::from_millis(0);

/// Direction in which a pattern walks its step space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Outcome of advancing a pattern by one step.
///
/// `Wrapped` is the completion signal: it fires only when the index
/// actually wraps around either end of the step space, never when the
/// index merely sits at zero going forward. Callers chain behaviors
/// (switch pattern, stop, reverse) by inspecting the value returned
/// from [`Controller::tick`](crate::Controller::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The index moved to the next step within the step space.
    Advanced,
    /// The index wrapped around and one full cycle completed.
    Wrapped,
}

/// Position within a pattern's step space, handed to render functions.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub index: u16,
    pub total_steps: u16,
}

pub(crate) trait RenderStep {
    /// Paint the frame for the given step position.
    ///
    /// Pure with respect to timing state; advancing the step is the
    /// scheduler's job.
    fn render_step(&self, step: Step, leds: &mut [Rgb]);
}

/// Known pattern ids for external observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    RainbowCycle = PATTERN_ID_RAINBOW_CYCLE,
    TheaterChase = PATTERN_ID_THEATER_CHASE,
    ColorWipe = PATTERN_ID_COLOR_WIPE,
    Scanner = PATTERN_ID_SCANNER,
    Pulsar = PATTERN_ID_PULSAR,
    Fade = PATTERN_ID_FADE,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            PATTERN_ID_THEATER_CHASE => Self::TheaterChase,
            PATTERN_ID_COLOR_WIPE => Self::ColorWipe,
            PATTERN_ID_SCANNER => Self::Scanner,
            PATTERN_ID_PULSAR => Self::Pulsar,
            PATTERN_ID_FADE => Self::Fade,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RainbowCycle => PATTERN_NAME_RAINBOW_CYCLE,
            Self::TheaterChase => PATTERN_NAME_THEATER_CHASE,
            Self::ColorWipe => PATTERN_NAME_COLOR_WIPE,
            Self::Scanner => PATTERN_NAME_SCANNER,
            Self::Pulsar => PATTERN_NAME_PULSAR,
            Self::Fade => PATTERN_NAME_FADE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            PATTERN_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            PATTERN_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            PATTERN_NAME_SCANNER => Some(Self::Scanner),
            PATTERN_NAME_PULSAR => Some(Self::Pulsar),
            PATTERN_NAME_FADE => Some(Self::Fade),
            _ => None,
        }
    }
}

/// Pattern variant payloads - enum containing all possible patterns
#[derive(Debug, Clone, Copy)]
pub enum PatternKind {
    /// Hue wheel rotated across the whole strip
    RainbowCycle(RainbowCycle),
    /// Marching-ants alternation of two colors
    TheaterChase(TheaterChase),
    /// Cumulative pixel-by-pixel fill
    ColorWipe(ColorWipe),
    /// Bright scan position with a decaying trail
    Scanner(Scanner),
    /// Two-step whole-strip alternator
    Pulsar(Pulsar),
    /// Whole-strip blend between two colors
    Fade(Fade),
}

impl PatternKind {
    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::RainbowCycle(_) => PatternId::RainbowCycle,
            Self::TheaterChase(_) => PatternId::TheaterChase,
            Self::ColorWipe(_) => PatternId::ColorWipe,
            Self::Scanner(_) => PatternId::Scanner,
            Self::Pulsar(_) => PatternId::Pulsar,
            Self::Fade(_) => PatternId::Fade,
        }
    }

    fn render_step(&self, step: Step, leds: &mut [Rgb]) {
        match self {
            Self::RainbowCycle(pattern) => pattern.render_step(step, leds),
            Self::TheaterChase(pattern) => pattern.render_step(step, leds),
            Self::ColorWipe(pattern) => pattern.render_step(step, leds),
            Self::Scanner(pattern) => pattern.render_step(step, leds),
            Self::Pulsar(pattern) => pattern.render_step(step, leds),
            Self::Fade(pattern) => pattern.render_step(step, leds),
        }
    }
}

/// A time-multiplexed animation: variant payload plus the shared step
/// and timing state machine.
///
/// A pattern never blocks and never reads a clock on its own; the caller
/// injects `now` into every timing-sensitive operation. Rendering and
/// advancing are split so a render step always observes the pre-advance
/// index.
///
/// `total_steps` is fixed at construction and must be nonzero; [`Fade`]
/// divides by it when interpolating.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    kind: PatternKind,
    interval: Duration,
    last_update: Instant,
    total_steps: u16,
    index: u16,
    direction: Direction,
}

impl Pattern {
    fn new(kind: PatternKind, interval: Duration, total_steps: u16, direction: Direction) -> Self {
        Self {
            kind,
            interval,
            last_update: EPOCH,
            total_steps,
            index: 0,
            direction,
        }
    }

    /// Hue wheel rotated across the whole strip, one wheel position per step.
    pub fn rainbow_cycle(interval: Duration, direction: Direction) -> Self {
        Self::new(
            PatternKind::RainbowCycle(RainbowCycle),
            interval,
            RAINBOW_CYCLE_STEPS,
            direction,
        )
    }

    /// Marching-ants alternation of two colors, one shift per step.
    pub fn theater_chase(
        interval: Duration,
        color1: Rgb,
        color2: Rgb,
        pixel_count: u16,
        direction: Direction,
    ) -> Self {
        Self::new(
            PatternKind::TheaterChase(TheaterChase { color1, color2 }),
            interval,
            pixel_count,
            direction,
        )
    }

    /// Cumulative fill, painting one pixel per step.
    pub fn color_wipe(
        interval: Duration,
        color: Rgb,
        pixel_count: u16,
        direction: Direction,
    ) -> Self {
        Self::new(
            PatternKind::ColorWipe(ColorWipe { color }),
            interval,
            pixel_count,
            direction,
        )
    }

    /// Bright dot sweeping the strip with a decaying trail.
    ///
    /// Without `split` the step space is twice the strip so the dot
    /// bounces back; with `split` two mirrored dots cross in one pass.
    pub fn scanner(interval: Duration, color: Rgb, pixel_count: u16, split: bool) -> Self {
        let total_steps = pixel_count * if split { 1 } else { 2 };
        Self::new(
            PatternKind::Scanner(Scanner { color }),
            interval,
            total_steps,
            Direction::Forward,
        )
    }

    /// Two-step alternator filling the whole strip.
    pub fn pulsar(interval: Duration, color1: Rgb, color2: Rgb) -> Self {
        Self::new(
            PatternKind::Pulsar(Pulsar { color1, color2 }),
            interval,
            PULSAR_STEPS,
            Direction::Forward,
        )
    }

    /// Whole-strip blend from one color to another over `steps` steps.
    ///
    /// `steps` must be nonzero.
    pub fn fade(
        interval: Duration,
        from: Rgb,
        to: Rgb,
        steps: u16,
        direction: Direction,
    ) -> Self {
        Self::new(
            PatternKind::Fade(Fade { from, to }),
            interval,
            steps,
            direction,
        )
    }

    /// Rewind to the first step and forget the last update time.
    ///
    /// No side effects on the strip.
    pub fn reset(&mut self) {
        self.index = 0;
        self.last_update = EPOCH;
    }

    /// Check whether enough time has elapsed to permit the next step.
    ///
    /// Pure; uses wrapping subtraction so a wrapping timestamp counter
    /// cannot stall the pattern or fire it twice.
    pub fn is_due(&self, now: Instant) -> bool {
        elapsed_millis(now.as_millis(), self.last_update.as_millis()) > self.interval.as_millis()
    }

    /// Record the update time and advance to the next step.
    ///
    /// Call exactly once per due cycle, after rendering.
    pub fn mark_updated(&mut self, now: Instant) -> StepEvent {
        self.last_update = now;
        self.advance()
    }

    /// Move the index one step in the current direction.
    ///
    /// The index is re-clamped into `[0, total_steps)` before this
    /// returns, so a render step never observes an out-of-range value.
    /// Walking off either end wraps to the opposite boundary and reports
    /// [`StepEvent::Wrapped`].
    pub fn advance(&mut self) -> StepEvent {
        match self.direction {
            Direction::Forward => {
                self.index += 1;
                if self.index >= self.total_steps {
                    self.index = 0;
                    StepEvent::Wrapped
                } else {
                    StepEvent::Advanced
                }
            }
            Direction::Reverse => {
                // Index 0 is the forward start, not a reverse step: the
                // step before it wraps straight to the far boundary.
                if self.index <= 1 {
                    self.index = self.total_steps - 1;
                    StepEvent::Wrapped
                } else {
                    self.index -= 1;
                    StepEvent::Advanced
                }
            }
        }
    }

    /// Flip direction and reposition to the new starting boundary so the
    /// animation continues contiguously instead of jumping.
    pub fn reverse(&mut self) {
        self.direction = self.direction.opposite();
        self.index = match self.direction {
            Direction::Forward => 0,
            Direction::Reverse => self.total_steps - 1,
        };
    }

    /// Paint the frame for the current step.
    pub fn render_step(&self, leds: &mut [Rgb]) {
        let step = Step {
            index: self.index,
            total_steps: self.total_steps,
        };
        self.kind.render_step(step, leds);
    }

    pub fn id(&self) -> PatternId {
        self.kind.id()
    }

    pub const fn index(&self) -> u16 {
        self.index
    }

    pub const fn total_steps(&self) -> u16 {
        self.total_steps
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Wraparound-safe elapsed time between two millisecond timestamps.
///
/// With wrapping subtraction a free-running counter that overflows past
/// its maximum still yields the correct distance to an earlier stamp.
pub const fn elapsed_millis(now: u64, since: u64) -> u64 {
    now.wrapping_sub(since)
}
