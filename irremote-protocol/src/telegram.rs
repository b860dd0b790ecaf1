//! Carrier interval sequences
//!
//! A telegram is the ordered list of carrier-on (mark) and carrier-off
//! (space) intervals for one transmission. It lives on the stack for the
//! duration of a single send and is never stored.

use heapless::Vec;

/// Maximum intervals in one telegram
///
/// The longest frame is NEC/Samsung: start mark + space, 32 bits of
/// mark + space each, and the trailing mark (67 intervals).
pub const MAX_INTERVALS: usize = 72;

/// One carrier interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interval {
    /// Carrier on for the given number of microseconds
    Mark(u32),
    /// Carrier off for the given number of microseconds
    Space(u32),
}

impl Interval {
    /// Duration of the interval in microseconds
    pub fn duration_us(self) -> u32 {
        match self {
            Interval::Mark(us) | Interval::Space(us) => us,
        }
    }

    /// True if the carrier is on during this interval
    pub fn is_mark(self) -> bool {
        matches!(self, Interval::Mark(_))
    }
}

/// Ordered sequence of carrier intervals for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Telegram {
    intervals: Vec<Interval, MAX_INTERVALS>,
}

impl Telegram {
    /// Create an empty telegram
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Append a carrier-on interval
    pub fn mark(&mut self, us: u32) -> &mut Self {
        self.push(Interval::Mark(us));
        self
    }

    /// Append a carrier-off interval
    pub fn space(&mut self, us: u32) -> &mut Self {
        self.push(Interval::Space(us));
        self
    }

    /// Append a mark followed by a space
    pub fn pulse(&mut self, mark_us: u32, space_us: u32) -> &mut Self {
        self.mark(mark_us).space(space_us)
    }

    fn push(&mut self, interval: Interval) {
        // Every encoder stays within MAX_INTERVALS
        let pushed = self.intervals.push(interval);
        debug_assert!(pushed.is_ok(), "telegram capacity exceeded");
    }

    /// All intervals in emission order
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True if nothing has been appended
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of carrier-on intervals (pulses)
    pub fn marks(&self) -> usize {
        self.intervals.iter().filter(|i| i.is_mark()).count()
    }

    /// Total on-air time in microseconds
    pub fn duration_us(&self) -> u32 {
        self.intervals.iter().map(|i| i.duration_us()).sum()
    }

    /// Iterate over the intervals
    pub fn iter(&self) -> core::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl<'a> IntoIterator for &'a Telegram {
    type Item = &'a Interval;
    type IntoIter = core::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
