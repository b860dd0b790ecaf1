//! Board-agnostic core logic for the IR remote control
//!
//! This crate contains everything between a key press and the carrier
//! pin that does not depend on specific hardware:
//!
//! - Capability traits (carrier, delay, key state)
//! - The transmitter, which plays telegrams and runs each protocol's
//!   repeat cadence until the key is released
//! - Keymap configuration and key-press dispatch
//!
//! Frame encoding itself lives in `irremote-protocol` and is re-exported
//! here.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod traits;
pub mod transmit;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use irremote_protocol as protocol;
pub use irremote_protocol::{IrCode, Protocol, Rc5Toggle};
