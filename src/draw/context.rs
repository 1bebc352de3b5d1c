use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::object::is_due;
use super::{BlinkState, Direction, DrawAction, DrawDuration, DrawObject, Expiry, ObjectRegistry};
use crate::color::{ColorCycle, Rgb};
use crate::command::{CommandReceiver, DrawCommand};
use crate::strip::Strip;

/// Bind a registry to a strip
///
/// Returns `None` if the registry holds no objects.
pub fn bind<'a, 's, const N: usize>(
    registry: &'a mut ObjectRegistry<N>,
    strip: &'a mut Strip<'s>,
) -> Option<DrawContext<'a, 's>> {
    DrawContext::new(registry.objects_mut(), strip)
}

/// Active binding of draw objects to a strip
///
/// Holds its own elapsed time counter, so independent contexts can drive
/// independent strips.
pub struct DrawContext<'a, 's> {
    strip: &'a mut Strip<'s>,
    objects: &'a mut [DrawObject],
    elapsed: Instant,
}

impl<'a, 's> DrawContext<'a, 's> {
    /// Bind a slice of objects to a strip
    ///
    /// Returns `None` if `objects` is empty.
    pub fn new(objects: &'a mut [DrawObject], strip: &'a mut Strip<'s>) -> Option<Self> {
        if objects.is_empty() {
            #[cfg(feature = "esp32-log")]
            println!("[DrawContext.new] rejected binding without objects");
            return None;
        }
        Some(Self {
            strip,
            objects,
            elapsed: Instant::from_millis(0),
        })
    }

    /// Time accumulated from all ticks so far
    pub const fn elapsed(&self) -> Instant {
        self.elapsed
    }

    pub fn strip(&self) -> &Strip<'s> {
        &*self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<'s> {
        &mut *self.strip
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object(&self, element: usize) -> Option<&DrawObject> {
        self.objects.get(element)
    }

    /// Advance time by `delta` and draw the next frame
    ///
    /// The strip is cleared, then every object is rendered at its current
    /// position before it is moved for the following frame.
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.checked_add(delta).unwrap_or(Instant::MAX);

        // A failed strip rejects every write below
        let _ = self.strip.clear_all();

        let now = self.elapsed;
        let led_count = self.strip.led_count();
        for object in self.objects.iter_mut() {
            object.render(now, self.strip);
            object.advance(now, led_count);
        }
    }

    /// Reset every object to draw nothing
    pub fn reset_all(&mut self) {
        self.objects.fill(DrawObject::INERT);
    }

    fn update(&mut self, element: usize, f: impl FnOnce(&mut DrawObject)) {
        if let Some(object) = self.objects.get_mut(element) {
            f(object);
        }
    }

    pub fn set_action(&mut self, element: usize, action: DrawAction) {
        self.update(element, |object| object.action = action);
    }

    pub fn set_direction(&mut self, element: usize, direction: Direction) {
        self.update(element, |object| object.direction = direction);
    }

    /// Set the initial blink state; blinking actions toggle it on their own
    pub fn set_blink_state(&mut self, element: usize, state: BlinkState) {
        self.update(element, |object| object.blink_state = state);
    }

    pub fn set_blink_rate(&mut self, element: usize, rate: Duration) {
        self.update(element, |object| object.blink_rate = rate);
    }

    /// Keep drawing the object for `duration` from now
    pub fn set_duration(&mut self, element: usize, duration: impl Into<DrawDuration>) {
        let expiry = match duration.into() {
            DrawDuration::For(duration) => {
                Expiry::At(self.elapsed.checked_add(duration).unwrap_or(Instant::MAX))
            }
            DrawDuration::Forever => Expiry::Never,
        };
        self.update(element, |object| object.expiry = expiry);
    }

    pub fn set_length(&mut self, element: usize, length: usize) {
        self.update(element, |object| object.length = length);
    }

    /// Set how often a moving object steps
    pub fn set_increment_rate(&mut self, element: usize, rate: Duration) {
        self.update(element, |object| object.increment_rate = rate);
    }

    pub fn set_position(&mut self, element: usize, position: usize) {
        self.update(element, |object| object.position = position);
    }

    pub fn set_color(&mut self, element: usize, color: Rgb) {
        self.update(element, |object| object.color = color);
    }

    pub fn set_start_position(&mut self, element: usize, position: usize) {
        self.update(element, |object| object.start_position = position);
    }

    pub fn set_end_position(&mut self, element: usize, position: usize) {
        self.update(element, |object| object.end_position = position);
    }

    /// Grow the length instead of moving the position when in motion
    pub fn set_grow(&mut self, element: usize, grow: bool) {
        self.update(element, |object| object.grow = grow);
    }

    /// Turn around when reaching the start or end position
    pub fn set_reverse(&mut self, element: usize, reverse: bool) {
        self.update(element, |object| object.reverse = reverse);
    }

    /// Check if the object finished a traversal since the last call
    ///
    /// Reading clears the flag.
    pub fn take_completed(&mut self, element: usize) -> bool {
        self.objects
            .get_mut(element)
            .is_some_and(|object| core::mem::take(&mut object.completed))
    }

    pub fn direction(&self, element: usize) -> Direction {
        self.objects
            .get(element)
            .map(|object| object.direction)
            .unwrap_or_default()
    }

    /// Check if two objects cover at least one common LED
    pub fn overlap(&self, first: usize, second: usize) -> bool {
        match (self.objects.get(first), self.objects.get(second)) {
            (Some(first), Some(second)) => first.span().overlaps(second.span()),
            _ => false,
        }
    }

    /// Step `cycle` once per `update_rate` of elapsed time and paint the object with it
    ///
    /// Pass the same cycle for several objects to keep them in sync, or one
    /// cycle per object to run them independently.
    pub fn apply_color_cycle(
        &mut self,
        element: usize,
        cycle: &mut ColorCycle,
        update_rate: Duration,
        step: u8,
    ) {
        if element >= self.objects.len() || !is_due(self.elapsed, update_rate) {
            return;
        }
        let color = cycle.advance(step);
        self.set_color(element, color);
    }

    /// Apply a single deferred command
    pub fn apply(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::ResetAll => self.reset_all(),
            DrawCommand::SetAction(element, action) => self.set_action(element, action),
            DrawCommand::SetDirection(element, direction) => self.set_direction(element, direction),
            DrawCommand::SetBlinkState(element, state) => self.set_blink_state(element, state),
            DrawCommand::SetBlinkRate(element, rate) => self.set_blink_rate(element, rate),
            DrawCommand::SetDuration(element, duration) => self.set_duration(element, duration),
            DrawCommand::SetLength(element, length) => self.set_length(element, length),
            DrawCommand::SetIncrementRate(element, rate) => self.set_increment_rate(element, rate),
            DrawCommand::SetPosition(element, position) => self.set_position(element, position),
            DrawCommand::SetColor(element, color) => self.set_color(element, color),
            DrawCommand::SetStartPosition(element, position) => {
                self.set_start_position(element, position);
            }
            DrawCommand::SetEndPosition(element, position) => {
                self.set_end_position(element, position);
            }
            DrawCommand::SetGrow(element, grow) => self.set_grow(element, grow),
            DrawCommand::SetReverse(element, reverse) => self.set_reverse(element, reverse),
        }
    }

    /// Apply every command waiting in the queue (non-blocking)
    ///
    /// Returns the number of applied commands.
    pub fn apply_pending<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(command) = commands.try_receive() {
            self.apply(command);
            applied += 1;
        }
        applied
    }
}
