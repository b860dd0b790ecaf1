//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the capability traits
//! defined in irremote-core, built on `embedded-hal`:
//!
//! - Carrier: PWM slice at 25% duty, switched by its compare value
//! - Delay: adapter for any blocking `DelayNs`
//! - Keypad: active-low key inputs with async wake-up

#![no_std]
#![deny(unsafe_code)]

pub mod carrier;
pub mod delay;
pub mod keypad;

pub use carrier::{PwmCarrier, PwmSlice};
pub use delay::HalDelay;
pub use keypad::Keypad;
