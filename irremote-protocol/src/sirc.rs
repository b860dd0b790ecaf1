//! Sony SIRC protocol
//!
//! Pulse-length modulation: the burst length carries the bit, the pause
//! after it is constant.
//!
//! ```text
//!       +--------------------+     +-----+     +----------+     +-- ON
//!       |                    |     |     |     |          |     |
//!       |       2400us       |600us|600us|600us|  1200us  |600us|   ...
//!       |                    |     |     |     |          |     |
//! ------+                    +-----+     +-----+          +-----+   OFF
//!
//!       |<------ Start Frame ----->|<- Bit=0 ->|<--- Bit=1 ---->|
//! ```
//!
//! Seven command bits come first, then the address bits, all LSB first.
//! The variant decides how many address bits follow:
//!
//! - 12-bit: 5 address bits
//! - 15-bit: 8 address bits
//! - 20-bit: 8 address bits, then 5 extended bits (address >> 8)
//!
//! The frame is re-sent after a 27ms gap for as long as the key is held.

use crate::telegram::Telegram;

/// Carrier frequency in Hz
pub const CARRIER_HZ: u32 = 40_000;

/// Start burst
pub const START_MARK_US: u32 = 2400;
/// Pause after every burst
pub const SPACE_US: u32 = 579;
/// Burst encoding a 0 bit
pub const ZERO_MARK_US: u32 = 587;
/// Burst encoding a 1 bit
pub const ONE_MARK_US: u32 = 1192;
/// Gap after every frame
pub const REPEAT_GAP_MS: u32 = 27;

/// Command bits in every variant
pub const COMMAND_BITS: u8 = 7;

/// Frame length variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SircVariant {
    /// 7 command bits, 5 address bits
    Bits12,
    /// 7 command bits, 8 address bits
    Bits15,
    /// 7 command bits, 8 address bits, 5 extended bits
    Bits20,
    /// Unrecognised length: only the command bits are sent
    CommandOnly,
}

impl SircVariant {
    /// Total data bits in a frame of this variant
    pub fn data_bits(self) -> u8 {
        match self {
            SircVariant::Bits12 => 12,
            SircVariant::Bits15 => 15,
            SircVariant::Bits20 => 20,
            SircVariant::CommandOnly => COMMAND_BITS,
        }
    }
}

impl From<u8> for SircVariant {
    fn from(bits: u8) -> Self {
        match bits {
            12 => SircVariant::Bits12,
            15 => SircVariant::Bits15,
            20 => SircVariant::Bits20,
            _ => SircVariant::CommandOnly,
        }
    }
}

/// Append the low `count` bits of `value`, LSB first
fn push_bits(telegram: &mut Telegram, mut value: u16, count: u8) {
    for _ in 0..count {
        let mark = if value & 1 != 0 {
            ONE_MARK_US
        } else {
            ZERO_MARK_US
        };
        telegram.pulse(mark, SPACE_US);
        value >>= 1;
    }
}

/// Build the full frame for the given address, command and variant
pub fn frame(address: u16, command: u8, variant: SircVariant) -> Telegram {
    let mut telegram = Telegram::new();
    telegram.pulse(START_MARK_US, SPACE_US);
    push_bits(&mut telegram, command as u16, COMMAND_BITS);
    match variant {
        SircVariant::Bits12 => push_bits(&mut telegram, address, 5),
        SircVariant::Bits15 => push_bits(&mut telegram, address, 8),
        SircVariant::Bits20 => {
            push_bits(&mut telegram, address & 0xFF, 8);
            push_bits(&mut telegram, address >> 8, 5);
        }
        SircVariant::CommandOnly => {}
    }
    telegram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::Interval;

    /// Data bits of a frame in transmission order
    fn bits(telegram: &Telegram) -> heapless::Vec<bool, 32> {
        telegram.intervals()[2..]
            .chunks(2)
            .map(|pair| pair[0] == Interval::Mark(ONE_MARK_US))
            .collect()
    }

    fn value(bits: &[bool]) -> u32 {
        bits.iter()
            .enumerate()
            .fold(0, |acc, (i, &b)| acc | ((b as u32) << i))
    }

    #[test]
    fn test_variant_from_bits() {
        assert_eq!(SircVariant::from(12), SircVariant::Bits12);
        assert_eq!(SircVariant::from(15), SircVariant::Bits15);
        assert_eq!(SircVariant::from(20), SircVariant::Bits20);
        assert_eq!(SircVariant::from(13), SircVariant::CommandOnly);
        assert_eq!(SircVariant::from(0), SircVariant::CommandOnly);
    }

    #[test]
    fn test_frame_lengths() {
        for (variant, data) in [
            (SircVariant::Bits12, 12),
            (SircVariant::Bits15, 15),
            (SircVariant::Bits20, 20),
            (SircVariant::CommandOnly, 7),
        ] {
            let t = frame(0xFFFF, 0xFF, variant);
            assert_eq!(t.len(), 2 + data * 2);
            assert_eq!(t.marks(), 1 + data);
            assert_eq!(variant.data_bits() as usize, data);
        }
    }

    #[test]
    fn test_start_and_constant_space() {
        let t = frame(0x01, 0x15, SircVariant::Bits12);
        assert_eq!(t.intervals()[0], Interval::Mark(2400));
        for interval in t.intervals().iter().skip(1).step_by(2) {
            assert_eq!(*interval, Interval::Space(SPACE_US));
        }
    }

    #[test]
    fn test_12_bit_fields() {
        // Sony TV power: address 0x01, command 0x15
        let b = bits(&frame(0x01, 0x15, SircVariant::Bits12));
        assert_eq!(b.len(), 12);
        assert_eq!(value(&b[..7]), 0x15);
        assert_eq!(value(&b[7..]), 0x01);
    }

    #[test]
    fn test_20_bit_address_split() {
        let b = bits(&frame(0x1A5C, 0x2B, SircVariant::Bits20));
        assert_eq!(b.len(), 20);
        assert_eq!(value(&b[..7]), 0x2B);
        assert_eq!(value(&b[7..15]), 0x5C);
        assert_eq!(value(&b[15..]), 0x1A);
    }

    #[test]
    fn test_command_truncated_to_seven_bits() {
        let b = bits(&frame(0, 0xFF, SircVariant::CommandOnly));
        assert_eq!(b.len(), 7);
        assert_eq!(value(&b), 0x7F);
    }
}
