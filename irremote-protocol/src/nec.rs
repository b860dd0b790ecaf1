//! NEC and Extended-NEC protocol
//!
//! Pulse-distance modulation: every bit starts with a fixed 562us burst and
//! the length of the following pause carries the value.
//!
//! ```text
//!       +---------+     +-+ +-+   +-+   +-+ +-    ON
//!       |         |     | | | |   | |   | | |          bit0:  562us
//!       |   9ms   |4.5ms| |0| | 1 | | 1 | |0| ...
//!       |         |     | | | |   | |   | | |          bit1: 1687us
//! ------+         +-----+ +-+ +---+ +---+ +-+     OFF
//! ```
//!
//! Four bytes follow the start burst, LSB first: address, !address,
//! command, !command. Extended NEC replaces the first two bytes with the
//! low and high byte of a 16-bit address. A final 562us burst ends the
//! frame.
//!
//! While the key is held the frame is not repeated. Instead a short repeat
//! code (9ms burst, 2.25ms pause, 562us burst) is sent every 108ms.

use crate::telegram::Telegram;

/// Carrier frequency in Hz
pub const CARRIER_HZ: u32 = 38_000;

/// Start burst
pub const START_MARK_US: u32 = 9000;
/// Pause after the start burst
pub const START_SPACE_US: u32 = 4500;
/// Burst at the start of every bit and at the end of the frame
pub const BIT_MARK_US: u32 = 562;
/// Pause encoding a 0 bit
pub const ZERO_SPACE_US: u32 = 562;
/// Pause encoding a 1 bit
pub const ONE_SPACE_US: u32 = 1687;

/// Repeat code burst
pub const REPEAT_MARK_US: u32 = 9000;
/// Repeat code pause
pub const REPEAT_SPACE_US: u32 = 2250;
/// Pause after the repeat code's end marker
pub const REPEAT_MARKER_SPACE_US: u32 = 543;
/// Gap between the held-key poll and the repeat code
pub const REPEAT_LEAD_GAP_MS: u32 = 40;
/// Gap after the repeat code before the next poll
pub const REPEAT_TAIL_GAP_MS: u32 = 56;

/// Address field layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NecAddress {
    /// 8-bit address followed by its complement
    Standard(u8),
    /// 16-bit address, low byte then high byte, no complement
    Extended(u16),
}

impl NecAddress {
    /// The two address bytes in transmission order
    pub fn bytes(self) -> [u8; 2] {
        match self {
            NecAddress::Standard(addr) => [addr, !addr],
            NecAddress::Extended(addr) => [addr as u8, (addr >> 8) as u8],
        }
    }
}

impl From<u16> for NecAddress {
    /// Addresses above 255 need the extended layout
    fn from(address: u16) -> Self {
        if address > 0xFF {
            NecAddress::Extended(address)
        } else {
            NecAddress::Standard(address as u8)
        }
    }
}

/// Append one byte, LSB first
///
/// Shared with the Samsung protocol, which uses the same bit timing.
pub fn push_byte(telegram: &mut Telegram, mut value: u8) {
    for _ in 0..8 {
        let space = if value & 1 != 0 {
            ONE_SPACE_US
        } else {
            ZERO_SPACE_US
        };
        telegram.pulse(BIT_MARK_US, space);
        value >>= 1;
    }
}

/// The four data bytes in transmission order
pub fn data_bytes(address: NecAddress, command: u8) -> [u8; 4] {
    let [a0, a1] = address.bytes();
    [a0, a1, command, !command]
}

/// Build the full frame for the given address and command
pub fn frame(address: NecAddress, command: u8) -> Telegram {
    let mut telegram = Telegram::new();
    telegram.pulse(START_MARK_US, START_SPACE_US);
    for byte in data_bytes(address, command) {
        push_byte(&mut telegram, byte);
    }
    telegram.mark(BIT_MARK_US);
    telegram
}

/// Build the short repeat code sent while the key stays held
pub fn repeat_code() -> Telegram {
    let mut telegram = Telegram::new();
    telegram
        .pulse(REPEAT_MARK_US, REPEAT_SPACE_US)
        .pulse(BIT_MARK_US, REPEAT_MARKER_SPACE_US);
    telegram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::Interval;
    use proptest::prelude::*;

    /// Recover the four data bytes from a captured frame
    fn decode_bytes(telegram: &Telegram) -> Option<[u8; 4]> {
        let iv = telegram.intervals();
        if iv.len() != 67 {
            return None;
        }
        if iv[0] != Interval::Mark(START_MARK_US) || iv[1] != Interval::Space(START_SPACE_US) {
            return None;
        }

        let mut bytes = [0u8; 4];
        for bit in 0..32 {
            let mark = iv[2 + bit * 2];
            let space = iv[3 + bit * 2];
            if mark != Interval::Mark(BIT_MARK_US) {
                return None;
            }
            let one = match space {
                Interval::Space(ONE_SPACE_US) => true,
                Interval::Space(ZERO_SPACE_US) => false,
                _ => return None,
            };
            if one {
                bytes[bit / 8] |= 1 << (bit % 8);
            }
        }
        Some(bytes)
    }

    /// Decode a captured frame back to (address, command)
    fn decode(telegram: &Telegram) -> Option<(u16, u8)> {
        let [a0, a1, cmd, inv_cmd] = decode_bytes(telegram)?;
        if cmd != !inv_cmd {
            return None;
        }
        let address = if a1 == !a0 {
            a0 as u16
        } else {
            u16::from_le_bytes([a0, a1])
        };
        Some((address, cmd))
    }

    #[test]
    fn test_standard_frame_shape() {
        let t = frame(NecAddress::from(0x04), 0x08);

        // start mark + space, 32 bits of mark + space, end mark
        assert_eq!(t.len(), 67);
        assert_eq!(t.marks(), 34);
        assert_eq!(t.intervals()[0], Interval::Mark(9000));
        assert_eq!(t.intervals()[1], Interval::Space(4500));
        assert_eq!(t.intervals()[66], Interval::Mark(562));
    }

    #[test]
    fn test_standard_address_complement() {
        let bytes = decode_bytes(&frame(NecAddress::from(0x04), 0x08)).unwrap();
        assert_eq!(bytes, [0x04, 0xFB, 0x08, 0xF7]);
        assert_eq!(bytes[1], !bytes[0]);
        assert_eq!(bytes[3], !bytes[2]);
    }

    #[test]
    fn test_extended_address_uninverted() {
        let bytes = decode_bytes(&frame(NecAddress::from(0x1234), 0x56)).unwrap();
        assert_eq!(bytes, [0x34, 0x12, 0x56, 0xA9]);
    }

    #[test]
    fn test_address_selection() {
        assert_eq!(NecAddress::from(0xFF), NecAddress::Standard(0xFF));
        assert_eq!(NecAddress::from(0x100), NecAddress::Extended(0x100));
    }

    #[test]
    fn test_lsb_first() {
        // 0x01: first data bit after the start is the long pause
        let t = frame(NecAddress::Standard(0x01), 0x00);
        assert_eq!(t.intervals()[3], Interval::Space(ONE_SPACE_US));
        assert_eq!(t.intervals()[5], Interval::Space(ZERO_SPACE_US));
    }

    #[test]
    fn test_repeat_code() {
        let t = repeat_code();
        assert_eq!(
            t.intervals(),
            &[
                Interval::Mark(9000),
                Interval::Space(2250),
                Interval::Mark(562),
                Interval::Space(543),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_decode_recovers_input(address in any::<u16>(), command in any::<u8>()) {
            // An extended address whose high byte is the complement of its
            // low byte looks exactly like a standard one on air
            prop_assume!(address <= 0xFF || (address >> 8) as u8 != !(address as u8));
            let t = frame(NecAddress::from(address), command);
            prop_assert_eq!(decode(&t), Some((address, command)));
        }

        #[test]
        fn prop_frame_is_deterministic(address in any::<u16>(), command in any::<u8>()) {
            prop_assert_eq!(
                frame(NecAddress::from(address), command),
                frame(NecAddress::from(address), command)
            );
        }
    }
}
