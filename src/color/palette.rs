//! Fixed color table for driving strips at a limited power level.
//!
//! The lower the channel level, the dimmer the LEDs and the lower the current
//! drawn from the supply.

use super::Rgb;

/// Half power channel level
pub const POWER_HALF: u8 = 0x7F;
/// Low power channel level
pub const POWER_LOW: u8 = 0x3F;

pub const fn red(level: u8) -> Rgb {
    Rgb { r: level, g: 0, b: 0 }
}

pub const fn green(level: u8) -> Rgb {
    Rgb { r: 0, g: level, b: 0 }
}

pub const fn blue(level: u8) -> Rgb {
    Rgb { r: 0, g: 0, b: level }
}

pub const fn white(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: level,
    }
}

pub const fn yellow(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: 0,
    }
}

pub const fn violet(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: 0,
        b: level,
    }
}

pub const fn teal(level: u8) -> Rgb {
    Rgb {
        r: 0,
        g: level,
        b: level,
    }
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = red(POWER_LOW);
pub const GREEN: Rgb = green(POWER_LOW);
pub const BLUE: Rgb = blue(POWER_LOW);
pub const WHITE: Rgb = white(POWER_LOW);
pub const YELLOW: Rgb = yellow(POWER_LOW);
pub const VIOLET: Rgb = violet(POWER_LOW);
pub const TEAL: Rgb = teal(POWER_LOW);
