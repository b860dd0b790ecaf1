//! Carrier implementations
//!
//! - PWM: hardware timer generating the carrier, gated by its compare value

pub mod pwm;

pub use pwm::{carrier_timing, CarrierTiming, PwmCarrier, PwmSlice};
