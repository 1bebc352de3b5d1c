//! Strip descriptor
//!
//! Owns the host-allocated color and waveform buffers of a single strip and
//! tracks whether they were validated for a link speed.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::bounds::LedSpan;
use crate::color::{BYTES_PER_LED, Rgb, from_grb, to_grb};
use crate::encoder::{self, LinkSpeed};

/// Configuration state of a strip
///
/// Set once by [`Strip::configure`] and kept until the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    /// Buffers were not validated, writes and encoding are disabled
    Failed,
    /// Buffers fit the given link speed
    Ready(LinkSpeed),
}

/// Error returned when buffers are too small for the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ColorBufferTooSmall { required: usize, capacity: usize },
    WaveformBufferTooSmall { required: usize, capacity: usize },
}

/// Error returned when writing colors to the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// The strip is not configured
    NotConfigured,
    /// LED positions are 1-based
    StartOutOfRange,
    /// The range runs past the last LED
    RangeOutOfBounds,
}

/// Addressable LED strip
pub struct Strip<'a> {
    colors: &'a mut [u8],
    waveform: &'a mut [u8],
    led_count: usize,
    state: StripState,
}

impl<'a> Strip<'a> {
    /// Create a strip over host-allocated buffers
    ///
    /// The strip starts in [`StripState::Failed`] until it is configured.
    pub fn new(colors: &'a mut [u8], waveform: &'a mut [u8], led_count: usize) -> Self {
        Self {
            colors,
            waveform,
            led_count,
            state: StripState::Failed,
        }
    }

    /// Validate buffer capacities for a link speed
    ///
    /// On failure the strip stays disabled until configured again.
    pub fn configure(&mut self, speed: LinkSpeed) -> Result<(), ConfigError> {
        self.state = StripState::Failed;

        let required = self.led_count.saturating_mul(BYTES_PER_LED);
        if self.colors.len() < required {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Strip.configure] color buffer too small: {} < {}",
                self.colors.len(),
                required
            );
            return Err(ConfigError::ColorBufferTooSmall {
                required,
                capacity: self.colors.len(),
            });
        }

        let required = self.led_count.saturating_mul(speed.bytes_per_led());
        if self.waveform.len() < required {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Strip.configure] waveform buffer too small for {:?}: {} < {}",
                speed,
                self.waveform.len(),
                required
            );
            return Err(ConfigError::WaveformBufferTooSmall {
                required,
                capacity: self.waveform.len(),
            });
        }

        self.state = StripState::Ready(speed);
        Ok(())
    }

    pub const fn state(&self) -> StripState {
        self.state
    }

    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Link speed the strip was configured for
    pub const fn speed(&self) -> Option<LinkSpeed> {
        match self.state {
            StripState::Ready(speed) => Some(speed),
            StripState::Failed => None,
        }
    }

    /// Set `count` LEDs starting at the 1-based position `start`
    pub fn write_range(
        &mut self,
        start: usize,
        count: usize,
        color: Rgb,
    ) -> Result<(), WriteError> {
        if self.state == StripState::Failed {
            return Err(WriteError::NotConfigured);
        }
        if start < 1 {
            return Err(WriteError::StartOutOfRange);
        }
        let range = LedSpan::new(start, count)
            .byte_range(self.led_count)
            .ok_or(WriteError::RangeOutOfBounds)?;

        let grb = to_grb(color);
        for led in self.colors[range].chunks_exact_mut(BYTES_PER_LED) {
            led.copy_from_slice(&grb);
        }
        Ok(())
    }

    /// Set a single LED (1-based)
    pub fn write_one(&mut self, led: usize, color: Rgb) -> Result<(), WriteError> {
        self.write_range(led, 1, color)
    }

    /// Set every LED of the strip
    pub fn write_all(&mut self, color: Rgb) -> Result<(), WriteError> {
        self.write_range(1, self.led_count, color)
    }

    /// Turn every LED off
    pub fn clear_all(&mut self) -> Result<(), WriteError> {
        self.write_all(Rgb::default())
    }

    /// Read back the color of a single LED (1-based)
    pub fn color_at(&self, led: usize) -> Option<Rgb> {
        let range = LedSpan::new(led, 1).byte_range(self.led_count)?;
        let bytes = self.colors.get(range)?;
        Some(from_grb([bytes[0], bytes[1], bytes[2]]))
    }

    /// Raw color bytes of the active LEDs, in Green, Red, Blue order
    pub fn colors(&self) -> &[u8] {
        let len = self.led_count.saturating_mul(BYTES_PER_LED).min(self.colors.len());
        &self.colors[..len]
    }

    /// Encoded waveform bytes of the active LEDs
    ///
    /// Empty while the strip is not configured.
    pub fn waveform(&self) -> &[u8] {
        match self.state {
            StripState::Ready(speed) => &self.waveform[..self.led_count * speed.bytes_per_led()],
            StripState::Failed => &[],
        }
    }

    /// Encode the color buffer at the configured link speed
    pub fn encode(&mut self) {
        if let StripState::Ready(speed) = self.state {
            encoder::encode(self, speed);
        }
    }

    /// Split into the active color bytes and the whole waveform buffer
    pub(crate) fn buffers_mut(&mut self) -> (&[u8], &mut [u8]) {
        let len = self.led_count.saturating_mul(BYTES_PER_LED).min(self.colors.len());
        (&self.colors[..len], &mut *self.waveform)
    }
}

impl SmartLedsWrite for Strip<'_> {
    type Error = WriteError;
    type Color = Rgb;

    /// Write colors from the first LED onward, then encode
    ///
    /// Colors past the last LED are rejected, but the LEDs written before
    /// are still encoded so the waveform matches the color buffer.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let result = iterator
            .into_iter()
            .enumerate()
            .try_for_each(|(index, color)| self.write_one(index + 1, color.into()));
        self.encode();
        result
    }
}
