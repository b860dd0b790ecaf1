//! Board wiring
//!
//! Raspberry Pi Pico layout:
//!
//! | Function | GPIO | Notes                                |
//! |----------|------|--------------------------------------|
//! | IR LED   | 2    | PWM slice 1 channel A, via transistor |
//! | KEY1     | 10   | active low, internal pull-up         |
//! | KEY2     | 11   | active low, internal pull-up         |
//! | KEY3     | 12   | active low, internal pull-up         |
//! | KEY4     | 13   | active low, internal pull-up         |
//! | KEY5     | 14   | active low, internal pull-up         |

use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peri;
use irremote_core::config::{ConfigError, Keymap};
use irremote_drivers::PwmSlice;

/// Number of keys on the board
pub const KEY_COUNT: usize = 5;

/// Settle time after the wake-up edge before reading keys
pub const DEBOUNCE_MS: u64 = 1;

/// Flash size on the Pico
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Keymap lives in the last 4KB sector
pub const KEYMAP_OFFSET: u32 = (FLASH_SIZE - 4096) as u32;

/// Bytes read when looking for a stored keymap
const KEYMAP_READ_LEN: usize = 256;

/// IR LED on PWM channel A
pub struct IrLed {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl IrLed {
    /// Take over a PWM slice driving the LED on channel A
    pub fn new(pwm: Pwm<'static>) -> Self {
        Self {
            pwm,
            config: PwmConfig::default(),
        }
    }
}

impl PwmSlice for IrLed {
    fn configure(&mut self, top: u16, compare: u16) {
        self.config.top = top;
        self.config.compare_a = compare;
        self.pwm.set_config(&self.config);
    }

    fn set_compare(&mut self, compare: u16) {
        self.config.compare_a = compare;
        self.pwm.set_config(&self.config);
    }
}

/// Errors from loading the stored keymap
#[derive(Debug, Clone, Copy, defmt::Format)]
pub enum KeymapLoadError {
    /// Flash read failed
    Flash,
    /// Stored bytes are not a keymap
    Config(ConfigError),
}

/// Read the keymap stored in flash
pub fn load_keymap(flash: Peri<'static, FLASH>) -> Result<Keymap, KeymapLoadError> {
    let mut flash = Flash::<_, Blocking, FLASH_SIZE>::new_blocking(flash);
    let mut page = [0u8; KEYMAP_READ_LEN];
    flash
        .blocking_read(KEYMAP_OFFSET, &mut page)
        .map_err(|_| KeymapLoadError::Flash)?;
    Keymap::decode(&page).map_err(KeymapLoadError::Config)
}
