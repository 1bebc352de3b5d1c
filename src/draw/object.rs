use embassy_time::{Duration, Instant};

use crate::bounds::LedSpan;
use crate::color::Rgb;
use crate::strip::Strip;

/// How an object is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawAction {
    #[default]
    NoDraw,
    Solid,
    /// Off phase leaves whatever was drawn underneath
    BlinkTransparent,
    /// Off phase paints the object black
    BlinkBlack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkState {
    On,
    #[default]
    Off,
}

impl BlinkState {
    const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    NotMoving,
    /// From start towards end
    Forward,
    /// From end towards start
    Reverse,
}

/// Point in time after which an object is no longer drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    At(Instant),
    Never,
}

impl Expiry {
    pub fn is_expired(self, now: Instant) -> bool {
        match self {
            Self::At(deadline) => now >= deadline,
            Self::Never => false,
        }
    }
}

/// How long an object stays visible, counted from the moment it is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawDuration {
    For(Duration),
    Forever,
}

impl From<i32> for DrawDuration {
    /// Negative values mean forever
    fn from(ms: i32) -> Self {
        match u64::try_from(ms) {
            Ok(ms) => Self::For(Duration::from_millis(ms)),
            Err(_) => Self::Forever,
        }
    }
}

/// Visual element rendered into the strip every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawObject {
    pub(crate) action: DrawAction,
    pub(crate) blink_state: BlinkState,
    pub(crate) blink_rate: Duration,
    pub(crate) expiry: Expiry,
    pub(crate) length: usize,
    pub(crate) position: usize,
    pub(crate) color: Rgb,
    pub(crate) direction: Direction,
    pub(crate) increment_rate: Duration,
    pub(crate) grow: bool,
    pub(crate) reverse: bool,
    pub(crate) start_position: usize,
    pub(crate) end_position: usize,
    pub(crate) completed: bool,
}

impl Default for DrawObject {
    fn default() -> Self {
        Self::INERT
    }
}

impl DrawObject {
    /// Object that draws nothing and never moves
    pub const INERT: Self = Self {
        action: DrawAction::NoDraw,
        blink_state: BlinkState::Off,
        blink_rate: Duration::from_millis(0),
        expiry: Expiry::At(Instant::from_millis(0)),
        length: 0,
        position: 0,
        color: Rgb { r: 0, g: 0, b: 0 },
        direction: Direction::NotMoving,
        increment_rate: Duration::from_millis(0),
        grow: false,
        reverse: false,
        start_position: 0,
        end_position: 0,
        completed: false,
    };

    pub const fn action(&self) -> DrawAction {
        self.action
    }

    pub const fn blink_state(&self) -> BlinkState {
        self.blink_state
    }

    pub const fn blink_rate(&self) -> Duration {
        self.blink_rate
    }

    pub const fn expiry(&self) -> Expiry {
        self.expiry
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Current 1-based position of the first LED
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub const fn increment_rate(&self) -> Duration {
        self.increment_rate
    }

    pub const fn grow(&self) -> bool {
        self.grow
    }

    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    pub const fn start_position(&self) -> usize {
        self.start_position
    }

    pub const fn end_position(&self) -> usize {
        self.end_position
    }

    /// LEDs currently covered by the object
    pub const fn span(&self) -> LedSpan {
        LedSpan::new(self.position, self.length)
    }

    /// Draw the object for the frame at `now`
    pub(crate) fn render(&mut self, now: Instant, strip: &mut Strip<'_>) {
        if self.action == DrawAction::NoDraw || self.expiry.is_expired(now) {
            return;
        }

        let visible = match self.action {
            DrawAction::Solid => true,
            DrawAction::BlinkTransparent | DrawAction::BlinkBlack => {
                if is_due(now, self.blink_rate) {
                    self.blink_state = self.blink_state.toggled();
                }
                self.blink_state == BlinkState::On
            }
            DrawAction::NoDraw => false,
        };

        // Ranges outside of the strip are dropped as a whole
        if visible {
            let _ = strip.write_range(self.position, self.length, self.color);
        } else if self.action != DrawAction::BlinkTransparent {
            let _ = strip.write_range(self.position, self.length, Rgb::default());
        }
    }

    /// Move or grow the object for the next frame
    pub(crate) fn advance(&mut self, now: Instant, led_count: usize) {
        let in_strip = |position: usize| position <= led_count;
        if self.direction == Direction::NotMoving
            || !in_strip(self.start_position)
            || !in_strip(self.end_position)
            || !is_due(now, self.increment_rate)
        {
            return;
        }

        let hit_end = match (self.direction, self.grow) {
            (Direction::Forward, true) => {
                self.position = self.start_position;
                self.length = self.length.saturating_add(1);
                let reached = self.position.saturating_add(self.length) >= self.end_position;
                if reached {
                    self.length = self.end_position.saturating_sub(self.start_position);
                }
                reached
            }
            (Direction::Forward, false) => {
                self.position = self.position.saturating_add(1).min(self.end_position);
                self.position >= self.end_position
            }
            (Direction::Reverse, true) => {
                self.position = self.start_position;
                self.length = self.length.saturating_sub(1);
                self.position.saturating_add(self.length) <= self.start_position
            }
            (Direction::Reverse, false) => {
                self.position = self.position.saturating_sub(1).max(self.start_position);
                self.position <= self.start_position
            }
            (Direction::NotMoving, _) => false,
        };

        if hit_end {
            if self.reverse {
                self.direction = match self.direction {
                    Direction::Forward => Direction::Reverse,
                    Direction::Reverse => Direction::Forward,
                    Direction::NotMoving => Direction::NotMoving,
                };
            }
            // Latched until read
            self.completed = true;
        }
    }
}

/// Exact-multiple trigger: fires only when `now` is a whole multiple of `rate`
///
/// A zero rate never fires.
pub(crate) fn is_due(now: Instant, rate: Duration) -> bool {
    let rate = rate.as_ticks();
    rate != 0 && now.as_ticks() % rate == 0
}
