//! Recording test bench
//!
//! A [`Bench`] stands in for the carrier and delay hardware. Every delay is
//! recorded as a mark or space (depending on the carrier state at that
//! moment) and advances a virtual clock instead of blocking, so a whole
//! held-key transmission runs instantly and can be compared interval by
//! interval against the expected telegram.
//!
//! ```ignore
//! let bench = Bench::new();
//! let mut tx = Transmitter::new(bench.carrier(), bench.delay());
//! tx.nec_send_code(&mut HeldFor::polls(2), 0x04, 0x08);
//! assert_eq!(bench.frequencies(), [38_000]);
//! ```

use core::cell::RefCell;

use heapless::Vec;
use irremote_protocol::Interval;

use crate::traits::{Carrier, Delay, KeySense};

/// Maximum recorded events
pub const TRACE_CAPACITY: usize = 1024;

/// One recorded hardware event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Carrier frequency set
    Frequency(u32),
    /// Delay with the carrier in the given state
    Interval(Interval),
}

#[derive(Debug, Default)]
struct Trace {
    events: Vec<TraceEvent, TRACE_CAPACITY>,
    carrier_on: bool,
    frequency: Option<u32>,
    /// Carrier was switched on before any frequency was set
    on_without_frequency: bool,
    now_us: u64,
    overflowed: bool,
}

impl Trace {
    fn record(&mut self, event: TraceEvent) {
        if self.events.push(event).is_err() {
            self.overflowed = true;
        }
    }
}

/// Shared recording of carrier and delay activity
#[derive(Debug, Default)]
pub struct Bench {
    trace: RefCell<Trace>,
}

impl Bench {
    /// Create an empty bench
    pub fn new() -> Self {
        Self::default()
    }

    /// Carrier double writing to this bench
    pub fn carrier(&self) -> SimCarrier<'_> {
        SimCarrier { bench: self }
    }

    /// Delay double writing to this bench
    pub fn delay(&self) -> SimDelay<'_> {
        SimDelay { bench: self }
    }

    /// All recorded events in order
    pub fn events(&self) -> Vec<TraceEvent, TRACE_CAPACITY> {
        self.trace.borrow().events.clone()
    }

    /// Recorded intervals, without frequency changes
    pub fn intervals(&self) -> Vec<Interval, TRACE_CAPACITY> {
        self.trace
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Interval(i) => Some(*i),
                TraceEvent::Frequency(_) => None,
            })
            .collect()
    }

    /// Every frequency that was set, in order
    pub fn frequencies(&self) -> Vec<u32, 16> {
        self.trace
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Frequency(hz) => Some(*hz),
                TraceEvent::Interval(_) => None,
            })
            .take(16)
            .collect()
    }

    /// Virtual time elapsed in microseconds
    pub fn now_us(&self) -> u64 {
        self.trace.borrow().now_us
    }

    /// True if the carrier is currently on
    pub fn carrier_on(&self) -> bool {
        self.trace.borrow().carrier_on
    }

    /// True if the carrier was ever switched on with no frequency set
    pub fn on_without_frequency(&self) -> bool {
        self.trace.borrow().on_without_frequency
    }

    /// True if events were dropped because the trace was full
    pub fn overflowed(&self) -> bool {
        self.trace.borrow().overflowed
    }

    /// Forget everything recorded so far, including the frequency
    pub fn clear(&self) {
        *self.trace.borrow_mut() = Trace::default();
    }
}

/// Carrier double
pub struct SimCarrier<'a> {
    bench: &'a Bench,
}

impl Carrier for SimCarrier<'_> {
    fn set_frequency(&mut self, hz: u32) {
        let mut trace = self.bench.trace.borrow_mut();
        trace.carrier_on = false;
        trace.frequency = Some(hz);
        trace.record(TraceEvent::Frequency(hz));
    }

    fn on(&mut self) {
        let mut trace = self.bench.trace.borrow_mut();
        if trace.frequency.is_none() {
            trace.on_without_frequency = true;
        }
        trace.carrier_on = true;
    }

    fn off(&mut self) {
        self.bench.trace.borrow_mut().carrier_on = false;
    }
}

/// Delay double advancing the virtual clock
pub struct SimDelay<'a> {
    bench: &'a Bench,
}

impl SimDelay<'_> {
    fn elapse(&mut self, us: u32) {
        let mut trace = self.bench.trace.borrow_mut();
        let interval = if trace.carrier_on {
            Interval::Mark(us)
        } else {
            Interval::Space(us)
        };
        trace.now_us += us as u64;
        trace.record(TraceEvent::Interval(interval));
    }
}

impl Delay for SimDelay<'_> {
    fn delay_us(&mut self, us: u32) {
        self.elapse(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapse(ms * 1000);
    }
}

/// Key held for a fixed number of polls, then released
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldFor {
    remaining: u32,
    polls: u32,
}

impl HeldFor {
    /// Report held for the first `n` polls
    pub fn polls(n: u32) -> Self {
        Self {
            remaining: n,
            polls: 0,
        }
    }

    /// Released at the first poll
    pub fn released() -> Self {
        Self::polls(0)
    }

    /// Number of times the key was polled
    pub fn poll_count(&self) -> u32 {
        self.polls
    }
}

impl KeySense for HeldFor {
    fn is_held(&mut self) -> bool {
        self.polls += 1;
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}
