//! IR Remote Control Firmware
//!
//! Main firmware binary for an RP2040-based handheld IR remote. A PWM slice
//! generates the carrier at 25% duty; the signal is modulated by switching
//! the compare value between 25% and zero.
//!
//! The remote idles until a key goes down, sends that key's bound codes
//! (repeating while the key is held) and goes back to waiting.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use irremote_core::config::Keymap;
use irremote_core::dispatch::{Dispatch, Remote};
use irremote_core::transmit::Transmitter;
use irremote_drivers::{HalDelay, Keypad, PwmCarrier};

mod board;

use board::{IrLed, DEBOUNCE_MS, KEY_COUNT};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("IR remote starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Load keymap from flash (or use built-in defaults)
    let keymap = match board::load_keymap(p.FLASH) {
        Ok(keymap) => {
            info!("Loaded keymap from flash: {} keys", keymap.len());
            keymap
        }
        Err(e) => {
            info!("No valid keymap in flash ({:?}), using defaults", e);
            Keymap::default()
        }
    };
    let mut remote = Remote::new(keymap);

    // Keys pull to ground when pressed
    let keys: [Input<'static>; KEY_COUNT] = [
        Input::new(p.PIN_10, Pull::Up),
        Input::new(p.PIN_11, Pull::Up),
        Input::new(p.PIN_12, Pull::Up),
        Input::new(p.PIN_13, Pull::Up),
        Input::new(p.PIN_14, Pull::Up),
    ];
    let mut keypad = Keypad::new(keys);

    // Carrier on GPIO2 (PWM slice 1, channel A), counter at system clock
    let pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, PwmConfig::default());
    let carrier = PwmCarrier::new(IrLed::new(pwm), clk_sys_freq());
    let mut tx = Transmitter::new(carrier, HalDelay::new(Delay));
    info!("IR carrier initialized, clk_sys={} Hz", clk_sys_freq());

    loop {
        keypad.wait_for_press().await;
        Timer::after_millis(DEBOUNCE_MS).await;

        let Some(key) = keypad.pressed() else {
            trace!("Bounce without a held key");
            continue;
        };

        debug!("Key {} pressed", key);
        match remote.press(&mut tx, &mut keypad, key) {
            Dispatch::Ran(actions) => {
                debug!(
                    "Key {} released after {} action(s), next RC-5 toggle={}",
                    key,
                    actions,
                    remote.toggle().is_set()
                );
            }
            Dispatch::Unbound => warn!("Key {} has no binding", key),
        }
    }
}
