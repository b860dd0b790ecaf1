//! Philips RC-5 protocol
//!
//! Bi-phase (Manchester) modulation with a fixed 1.778ms bit slot:
//!
//! ```text
//!   +-------+                     +-------+    ON
//!           |                     |
//!     889us | 889us         889us | 889us
//!           |                     |
//!           +-------+     +-------+            OFF
//!
//!   |<-- Bit "0" -->|     |<-- Bit "1" -->|
//! ```
//!
//! A telegram is 14 bits, MSB first:
//!
//! | bit   | meaning                                   |
//! |-------|-------------------------------------------|
//! | 13    | start bit, always 1                       |
//! | 12    | inverted command bit 6 (extended RC-5)    |
//! | 11    | toggle                                    |
//! | 10..6 | address                                   |
//! | 5..0  | command bits 5..0                         |
//!
//! The same message, toggle included, is repeated every 114ms while the key
//! is held. The toggle flips once the key is released so the receiver can
//! tell a new press from a held one.

use crate::telegram::Telegram;

/// Carrier frequency in Hz
pub const CARRIER_HZ: u32 = 36_000;

/// First half of a bit slot
pub const FIRST_HALF_US: u32 = 880;
/// Second half of a bit slot
pub const SECOND_HALF_US: u32 = 871;
/// Gap after every frame (114ms period minus 14 bit slots)
pub const REPEAT_GAP_MS: u32 = 89;

/// Bits per message
pub const MESSAGE_BITS: u32 = 14;

/// Start bit
pub const START_BIT: u16 = 1 << 13;
/// Second start bit, carries inverted command bit 6
pub const FIELD_BIT: u16 = 1 << 12;
/// Toggle bit
pub const TOGGLE_BIT: u16 = 1 << 11;

/// Address bits used by the protocol
pub const ADDRESS_MASK: u8 = 0x1F;
/// Command bits placed in the low field
pub const COMMAND_LOW_MASK: u8 = 0x3F;
/// Command bit carried (inverted) by the field bit
pub const COMMAND_EXT_BIT: u8 = 0x40;

/// Toggle state carried between independent key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rc5Toggle(bool);

impl Rc5Toggle {
    /// Toggle with the given bit value
    pub const fn new(set: bool) -> Self {
        Self(set)
    }

    /// Current bit value
    pub const fn is_set(self) -> bool {
        self.0
    }

    /// The value to use for the next independent press
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self(!self.0)
    }
}

/// Assemble the 14-bit message
///
/// Address is masked to 5 bits and command to 7 bits.
pub fn message(address: u8, command: u8, toggle: Rc5Toggle) -> u16 {
    let mut msg = START_BIT;
    msg |= ((address & ADDRESS_MASK) as u16) << 6;
    msg |= (command & COMMAND_LOW_MASK) as u16;
    if command & COMMAND_EXT_BIT == 0 {
        msg |= FIELD_BIT;
    }
    if toggle.is_set() {
        msg |= TOGGLE_BIT;
    }
    msg
}

/// Build the bi-phase frame for a 14-bit message
pub fn frame(message: u16) -> Telegram {
    let mut telegram = Telegram::new();
    let mut mask = START_BIT;
    while mask != 0 {
        if message & mask != 0 {
            telegram.space(FIRST_HALF_US).mark(SECOND_HALF_US);
        } else {
            telegram.mark(FIRST_HALF_US).space(SECOND_HALF_US);
        }
        mask >>= 1;
    }
    telegram
}
