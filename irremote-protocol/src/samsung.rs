//! Samsung protocol
//!
//! Same bit timing as NEC, but the start burst is 4.5ms and the address
//! byte is sent twice without inversion. There is no short repeat code:
//! the complete frame is sent again every 44ms gap while the key is held.

use crate::nec::{self, BIT_MARK_US};
use crate::telegram::Telegram;

/// Carrier frequency in Hz
pub const CARRIER_HZ: u32 = 38_000;

/// Start burst
pub const START_MARK_US: u32 = 4500;
/// Pause after the start burst
pub const START_SPACE_US: u32 = 4500;
/// Gap after every frame
pub const REPEAT_GAP_MS: u32 = 44;

/// The four data bytes in transmission order
pub fn data_bytes(address: u8, command: u8) -> [u8; 4] {
    [address, address, command, !command]
}

/// Build the full frame for the given address and command
pub fn frame(address: u8, command: u8) -> Telegram {
    let mut telegram = Telegram::new();
    telegram.pulse(START_MARK_US, START_SPACE_US);
    for byte in data_bytes(address, command) {
        nec::push_byte(&mut telegram, byte);
    }
    telegram.mark(BIT_MARK_US);
    telegram
}
