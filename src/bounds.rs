use core::ops::Range;

use crate::color::BYTES_PER_LED;

/// Run of LEDs addressed by a 1-based start position and a length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedSpan {
    pub start: usize,
    pub len: usize,
}

impl LedSpan {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Last LED covered by the span (inclusive)
    ///
    /// Returns `None` for an empty span.
    pub const fn last(self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.start.checked_add(self.len - 1)
    }

    /// Check if two spans share at least one LED
    pub fn overlaps(self, other: Self) -> bool {
        match (self.last(), other.last()) {
            (Some(last), Some(other_last)) => self.start <= other_last && other.start <= last,
            _ => false,
        }
    }

    /// Byte range of the span inside a GRB color buffer
    ///
    /// Returns `None` if the span starts at LED 0 or runs past `led_count`.
    pub(crate) fn byte_range(self, led_count: usize) -> Option<Range<usize>> {
        if self.start < 1 {
            return None;
        }
        let first = self.start - 1;
        let end = first.checked_add(self.len)?;
        if end > led_count {
            return None;
        }
        Some(first.checked_mul(BYTES_PER_LED)?..end.checked_mul(BYTES_PER_LED)?)
    }
}

#[cfg(test)]
mod tests {
    use super::LedSpan;

    #[test]
    fn test_last() {
        assert_eq!(LedSpan::new(3, 2).last(), Some(4));
        assert_eq!(LedSpan::new(3, 0).last(), None);
    }

    #[test]
    fn test_overlaps_contained() {
        let outer = LedSpan::new(1, 10);
        let inner = LedSpan::new(4, 2);
        assert!(outer.overlaps(inner));
        assert!(inner.overlaps(outer));
    }

    #[test]
    fn test_overlaps_touching_and_apart() {
        assert!(LedSpan::new(1, 3).overlaps(LedSpan::new(3, 3)));
        assert!(!LedSpan::new(1, 3).overlaps(LedSpan::new(4, 3)));
        assert!(!LedSpan::new(1, 0).overlaps(LedSpan::new(1, 3)));
    }

    #[test]
    fn test_byte_range() {
        assert_eq!(LedSpan::new(1, 10).byte_range(10), Some(0..30));
        assert_eq!(LedSpan::new(3, 2).byte_range(10), Some(6..12));
        assert_eq!(LedSpan::new(0, 1).byte_range(10), None);
        assert_eq!(LedSpan::new(10, 2).byte_range(10), None);
    }
}
