//! Hardware capability traits
//!
//! These traits define the interface between the transmit logic and
//! hardware-specific implementations.

pub mod carrier;
pub mod delay;
pub mod key;

pub use carrier::Carrier;
pub use delay::Delay;
pub use key::KeySense;
