//! Six phase hue cycle
//!
//! Walks the color wheel by ramping one channel at a time between zero and a
//! maximum level: green up, red down, blue up, green down, red up, blue down.

use super::Rgb;

/// Cursor of a hue cycle
///
/// Each cursor is independent, so every object can run its own cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCycle {
    color: Rgb,
    max_level: u8,
}

impl ColorCycle {
    /// Create a cycle starting at pure red with the given maximum channel level
    pub const fn new(max_level: u8) -> Self {
        Self {
            color: Rgb {
                r: max_level,
                g: 0,
                b: 0,
            },
            max_level,
        }
    }

    /// Current color of the cursor
    pub const fn current(&self) -> Rgb {
        self.color
    }

    pub const fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Advance the cursor by `step` in the current phase and return the new color
    pub fn advance(&mut self, step: u8) -> Rgb {
        let max = self.max_level;
        let Rgb { r, g, b } = &mut self.color;

        if *r == max && *g < max && *b == 0 {
            *g = g.saturating_add(step);
        } else if *g == max && *r > 0 {
            *r = r.saturating_sub(step);
        } else if *g == max && *b < max {
            *b = b.saturating_add(step);
        } else if *b == max && *g > 0 {
            *g = g.saturating_sub(step);
        } else if *b == max && *r < max {
            *r = r.saturating_add(step);
        } else if *r == max && *b > 0 {
            *b = b.saturating_sub(step);
        }

        *r = (*r).min(max);
        *g = (*g).min(max);
        *b = (*b).min(max);

        self.color
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(super::palette::POWER_LOW)
    }
}
