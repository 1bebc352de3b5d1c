//! Frame scheduling and timing utilities.
//!
//! Drives a [`DrawContext`] at a fixed cadence and hands each encoded frame to
//! a [`WaveformSink`]. No async or platform timers are involved; the caller
//! sleeps between frames.

use embassy_time::{Duration, Instant};

use crate::command::CommandReceiver;
use crate::draw::DrawContext;
use crate::WaveformSink;

/// Default target frame rate (100 FPS).
pub const DEFAULT_FPS: u64 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS);

/// Minimum low time between frames that latches the data into WS2812 LEDs.
pub const DEFAULT_RESET_GAP: Duration = Duration::from_micros(300);

/// Frame pump configuration
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Time the animation advances per frame
    ///
    /// Blink and motion rates fire on exact multiples of elapsed time, so they
    /// should be multiples of this value.
    pub frame_duration: Duration,
    /// Idle time the line needs after each frame
    pub reset_gap: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            reset_gap: DEFAULT_RESET_GAP,
        }
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame, never shorter than the reset gap.
    pub sleep_duration: Duration,
}

/// Portable frame scheduler
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(context, queue.receiver(), sink, SchedulerConfig::default());
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_us(result.sleep_duration.as_micros());
/// }
/// ```
pub struct FrameScheduler<'a, 's, S: WaveformSink, const COMMANDS: usize> {
    sink: S,
    context: DrawContext<'a, 's>,
    commands: CommandReceiver<'a, COMMANDS>,
    config: SchedulerConfig,
    next_frame: Instant,
}

impl<'a, 's, S: WaveformSink, const COMMANDS: usize> FrameScheduler<'a, 's, S, COMMANDS> {
    pub fn new(
        context: DrawContext<'a, 's>,
        commands: CommandReceiver<'a, COMMANDS>,
        sink: S,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            sink,
            context,
            commands,
            config,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Applies pending draw commands
    /// 3. Advances the animation by one frame duration
    /// 4. Encodes the strip and writes the waveform to the sink
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after long stalls instead of bursting to catch up
        let max_drift = self.config.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.context.apply_pending(&self.commands);
        self.context.tick(self.config.frame_duration);

        let strip = self.context.strip_mut();
        strip.encode();
        self.sink.write(strip.waveform());

        self.next_frame += self.config.frame_duration;

        let until_next = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));
        let sleep_duration = if until_next > self.config.reset_gap {
            until_next
        } else {
            self.config.reset_gap
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn context(&self) -> &DrawContext<'a, 's> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut DrawContext<'a, 's> {
        &mut self.context
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
