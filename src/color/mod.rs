mod cycle;
pub mod palette;

pub use cycle::ColorCycle;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Bytes stored per LED in the color buffer
pub const BYTES_PER_LED: usize = 3;

/// Pack a color into the strip's native Green, Red, Blue byte order
#[inline]
pub const fn to_grb(color: Rgb) -> [u8; BYTES_PER_LED] {
    [color.g, color.r, color.b]
}

/// Read a color back from Green, Red, Blue bytes
#[inline]
pub const fn from_grb(grb: [u8; BYTES_PER_LED]) -> Rgb {
    Rgb {
        r: grb[1],
        g: grb[0],
        b: grb[2],
    }
}
