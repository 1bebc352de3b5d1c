//! Bit-stream encoder
//!
//! WS2812 LEDs read every data bit as a high pulse followed by a low one, with
//! the duty cycle telling a one from a zero. Clocking a serial link faster than
//! the LED bit rate lets a group of link bits reproduce that pulse:
//!
//! | speed   | bit 1    | bit 0    | bytes per LED |
//! |---------|----------|----------|---------------|
//! | 2.5 MHz | `110`    | `100`    | 9             |
//! | 5 MHz   | `111100` | `110000` | 18            |
//!
//! The reset (latch) gap between frames is not part of the waveform. The
//! transport has to keep the line low for it after each frame.

use embassy_time::Duration;

use crate::color::BYTES_PER_LED;
use crate::strip::{Strip, StripState};

/// Link bits emitted for one data bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPattern {
    /// Pattern for a one, right aligned
    pub one: u8,
    /// Pattern for a zero, right aligned
    pub zero: u8,
    /// Number of link bits per data bit
    pub width: u8,
}

/// Clock of the serial link carrying the waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSpeed {
    /// 2.5 MHz, three link bits per data bit
    Mhz2_5,
    /// 5 MHz, six link bits per data bit
    Mhz5,
}

impl LinkSpeed {
    pub const fn pattern(self) -> BitPattern {
        match self {
            Self::Mhz2_5 => BitPattern {
                one: 0b110,
                zero: 0b100,
                width: 3,
            },
            Self::Mhz5 => BitPattern {
                one: 0b11_1100,
                zero: 0b11_0000,
                width: 6,
            },
        }
    }

    /// Waveform bytes needed for a single LED
    pub const fn bytes_per_led(self) -> usize {
        BYTES_PER_LED * self.pattern().width as usize
    }

    pub const fn clock_hz(self) -> u64 {
        match self {
            Self::Mhz2_5 => 2_500_000,
            Self::Mhz5 => 5_000_000,
        }
    }

    /// Number of idle bytes that keep the line low for at least `gap`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn reset_padding_len(self, gap: Duration) -> usize {
        let bits = (gap.as_micros() * self.clock_hz()).div_ceil(1_000_000);
        bits.div_ceil(8) as usize
    }
}

/// Packs link bits MSB first into a byte buffer
struct BitWriter<'a> {
    out: &'a mut [u8],
    index: usize,
    current: u8,
    filled: u8,
}

impl<'a> BitWriter<'a> {
    const fn new(out: &'a mut [u8]) -> Self {
        Self {
            out,
            index: 0,
            current: 0,
            filled: 0,
        }
    }

    /// Push the lowest `width` bits of `bits`, most significant first
    fn push(&mut self, bits: u8, width: u8) {
        for shift in (0..width).rev() {
            self.current = (self.current << 1) | ((bits >> shift) & 1);
            self.filled += 1;
            if self.filled == 8 {
                self.store(self.current);
                self.current = 0;
                self.filled = 0;
            }
        }
    }

    /// Bytes past the end of `out` are dropped
    fn store(&mut self, byte: u8) {
        if let Some(slot) = self.out.get_mut(self.index) {
            *slot = byte;
            self.index += 1;
        }
    }

    /// Flush a partial byte left aligned and return the number of bytes written
    fn finish(mut self) -> usize {
        if self.filled != 0 {
            self.store(self.current << (8 - self.filled));
        }
        self.index
    }
}

/// Number of waveform bytes produced for `data_len` color bytes
pub const fn encoded_len(data_len: usize, speed: LinkSpeed) -> usize {
    (data_len * 8 * speed.pattern().width as usize).div_ceil(8)
}

/// Expand `data` into `out` and return the number of bytes written
///
/// Output is truncated if `out` is shorter than [`encoded_len`].
pub fn encode_bytes(data: &[u8], speed: LinkSpeed, out: &mut [u8]) -> usize {
    let pattern = speed.pattern();
    let mut writer = BitWriter::new(out);
    for byte in data {
        for bit in (0..8).rev() {
            let bits = if (byte >> bit) & 1 == 1 {
                pattern.one
            } else {
                pattern.zero
            };
            writer.push(bits, pattern.width);
        }
    }
    writer.finish()
}

/// Encode the strip's colors into its waveform buffer
///
/// Does nothing unless the strip was configured for `speed`.
pub fn encode(strip: &mut Strip<'_>, speed: LinkSpeed) {
    if strip.state() != StripState::Ready(speed) {
        return;
    }
    let (colors, waveform) = strip.buffers_mut();
    encode_bytes(colors, speed, waveform);
}
