//! Telegram playback and repeat cadence
//!
//! The [`Transmitter`] owns the carrier and the delay. Each `*_send_code`
//! call runs one protocol's state machine to completion:
//!
//! ```text
//! BUILD_FRAME → EMIT_START → EMIT_BITS → EMIT_TRAILER
//!     → [CHECK_HELD → GAP → EMIT_REPEAT_OR_FULL_FRAME]* → DONE
//! ```
//!
//! The only exit is the key source reporting release. NEC answers a held
//! key with its short repeat code; Samsung, RC-5 and SIRC send the whole
//! frame again. Each protocol uses exactly one of the two cadences.

use irremote_protocol::{
    nec, rc5, samsung, sirc, Interval, IrCode, NecAddress, Protocol, Rc5Toggle, SircVariant,
    Telegram,
};

use crate::traits::{Carrier, Delay, KeySense};

/// Plays telegrams on a carrier with blocking delays
pub struct Transmitter<C, D> {
    carrier: C,
    delay: D,
}

impl<C: Carrier, D: Delay> Transmitter<C, D> {
    /// Create a transmitter from a carrier and a delay source
    pub fn new(carrier: C, delay: D) -> Self {
        Self { carrier, delay }
    }

    /// Give back the carrier and delay
    pub fn release(self) -> (C, D) {
        (self.carrier, self.delay)
    }

    /// Send an NEC code, then the repeat code while the key is held
    ///
    /// Addresses above 255 are sent as Extended NEC.
    pub fn nec_send_code<K: KeySense>(&mut self, key: &mut K, address: u16, command: u8) {
        self.send_nec(key, NecAddress::from(address), command);
    }

    /// Send a Samsung code, re-sending the full frame while the key is held
    pub fn samsung_send_code<K: KeySense>(&mut self, key: &mut K, address: u8, command: u8) {
        self.carrier.set_frequency(samsung::CARRIER_HZ);
        let frame = samsung::frame(address, command);
        self.retransmit_while_held(key, &frame, samsung::REPEAT_GAP_MS);
    }

    /// Send an RC-5 code while the key is held
    ///
    /// Every repeat carries `toggle` unchanged. Returns the toggle to use
    /// for the next independent press.
    #[must_use]
    pub fn rc5_send_code<K: KeySense>(
        &mut self,
        key: &mut K,
        address: u8,
        command: u8,
        toggle: Rc5Toggle,
    ) -> Rc5Toggle {
        self.carrier.set_frequency(rc5::CARRIER_HZ);
        let frame = rc5::frame(rc5::message(address, command, toggle));
        self.retransmit_while_held(key, &frame, rc5::REPEAT_GAP_MS);
        toggle.flipped()
    }

    /// Send a Sony SIRC code of `bits` length (12, 15 or 20)
    ///
    /// Any other length sends the command bits only.
    pub fn sirc_send_code<K: KeySense>(&mut self, key: &mut K, address: u16, command: u8, bits: u8) {
        self.send_sirc(key, address, command, SircVariant::from(bits));
    }

    /// Send any code by protocol selector
    ///
    /// `toggle` is only used by RC-5; for every other protocol it is
    /// returned unchanged.
    #[must_use]
    pub fn send<K: KeySense>(&mut self, key: &mut K, code: IrCode, toggle: Rc5Toggle) -> Rc5Toggle {
        match code.protocol {
            Protocol::Nec => {
                self.send_nec(key, NecAddress::Standard(code.address as u8), code.command);
            }
            Protocol::ExtendedNec => {
                self.send_nec(key, NecAddress::Extended(code.address), code.command);
            }
            Protocol::Samsung => {
                self.samsung_send_code(key, code.address as u8, code.command);
            }
            Protocol::Rc5 => {
                return self.rc5_send_code(key, code.address as u8, code.command, toggle);
            }
            Protocol::Sirc12 | Protocol::Sirc15 | Protocol::Sirc20 => {
                let variant = code.protocol.sirc_variant().unwrap_or(SircVariant::CommandOnly);
                self.send_sirc(key, code.address, code.command, variant);
            }
        }
        toggle
    }

    /// Block with the carrier off
    pub fn pause_ms(&mut self, ms: u32) {
        self.carrier.off();
        self.delay.delay_ms(ms);
    }

    fn send_nec<K: KeySense>(&mut self, key: &mut K, address: NecAddress, command: u8) {
        self.carrier.set_frequency(nec::CARRIER_HZ);
        self.emit(&nec::frame(address, command));

        let repeat = nec::repeat_code();
        while key.is_held() {
            self.delay.delay_ms(nec::REPEAT_LEAD_GAP_MS);
            self.emit(&repeat);
            self.delay.delay_ms(nec::REPEAT_TAIL_GAP_MS);
        }
    }

    fn send_sirc<K: KeySense>(&mut self, key: &mut K, address: u16, command: u8, variant: SircVariant) {
        self.carrier.set_frequency(sirc::CARRIER_HZ);
        let frame = sirc::frame(address, command, variant);
        self.retransmit_while_held(key, &frame, sirc::REPEAT_GAP_MS);
    }

    /// Send `frame` followed by `gap_ms`, again and again until released
    ///
    /// The frame always goes out at least once.
    fn retransmit_while_held<K: KeySense>(&mut self, key: &mut K, frame: &Telegram, gap_ms: u32) {
        loop {
            self.emit(frame);
            self.delay.delay_ms(gap_ms);
            if !key.is_held() {
                break;
            }
        }
    }

    /// Play a telegram and leave the carrier off
    fn emit(&mut self, telegram: &Telegram) {
        for interval in telegram {
            match *interval {
                Interval::Mark(us) => {
                    self.carrier.on();
                    self.delay.delay_us(us);
                }
                Interval::Space(us) => {
                    self.carrier.off();
                    self.delay.delay_us(us);
                }
            }
        }
        self.carrier.off();
    }
}
