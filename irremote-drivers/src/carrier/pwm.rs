//! PWM carrier
//!
//! A free-running PWM slice produces the carrier. The timer period sets the
//! frequency; the carrier is switched on and off by moving the compare value
//! between 25% of the period and zero, so the timer never stops and the
//! first burst after `on()` starts on a clean period.
//!
//! ```ignore
//! let mut carrier = PwmCarrier::new(slice, 125_000_000);
//! carrier.set_frequency(38_000); // top = 3288, compare = 823
//! carrier.on();
//! ```

use irremote_core::traits::Carrier;

/// Largest period a 16-bit counter can count
const MAX_PERIOD: u32 = 1 << 16;

/// Low-level PWM slice access
///
/// Implemented by the board crate on top of the chip's PWM peripheral.
pub trait PwmSlice {
    /// Set the counter wrap value and the compare value
    fn configure(&mut self, top: u16, compare: u16);

    /// Change only the compare value
    fn set_compare(&mut self, compare: u16);
}

/// Counter settings for one carrier frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarrierTiming {
    /// Counter wraps after `top + 1` clock cycles
    pub top: u16,
    /// Output is active while the counter is below this value
    pub compare: u16,
}

/// Counter settings for `hz` at 25% duty with the counter clocked at `clock_hz`
///
/// Periods longer than the 16-bit counter saturate at the slowest
/// achievable frequency.
pub fn carrier_timing(clock_hz: u32, hz: u32) -> CarrierTiming {
    let period = if hz == 0 {
        MAX_PERIOD
    } else {
        (clock_hz / hz).clamp(1, MAX_PERIOD)
    };
    CarrierTiming {
        top: (period - 1) as u16,
        compare: (period / 4 + 1).min(period) as u16,
    }
}

/// Carrier on a PWM slice
pub struct PwmCarrier<S> {
    slice: S,
    /// Counter clock in Hz
    clock_hz: u32,
    /// Timing for the current frequency
    timing: CarrierTiming,
    /// Whether the carrier is currently emitted
    on: bool,
}

impl<S: PwmSlice> PwmCarrier<S> {
    /// Create a new carrier, initially off
    ///
    /// `clock_hz` is the PWM counter clock (system clock over the slice
    /// divider).
    pub fn new(mut slice: S, clock_hz: u32) -> Self {
        let timing = CarrierTiming { top: u16::MAX, compare: 0 };
        slice.configure(timing.top, 0);
        Self {
            slice,
            clock_hz,
            timing,
            on: false,
        }
    }

    /// Timing for the current frequency
    pub fn timing(&self) -> CarrierTiming {
        self.timing
    }

    /// Check if the carrier is on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give back the PWM slice
    pub fn release(self) -> S {
        self.slice
    }
}

impl<S: PwmSlice> Carrier for PwmCarrier<S> {
    fn set_frequency(&mut self, hz: u32) {
        self.timing = carrier_timing(self.clock_hz, hz);
        self.slice.configure(self.timing.top, 0);
        self.on = false;
    }

    fn on(&mut self) {
        if !self.on {
            self.slice.set_compare(self.timing.compare);
            self.on = true;
        }
    }

    fn off(&mut self) {
        if self.on {
            self.slice.set_compare(0);
            self.on = false;
        }
    }
}
