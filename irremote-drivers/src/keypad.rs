//! Active-low keypad
//!
//! Keys pull their input to ground when pressed (internal pull-ups
//! enabled). The keypad answers two questions:
//!
//! - which key is pressed (lowest position wins if several are), and
//! - is any key still held, which is what the transmitter polls to decide
//!   whether to keep repeating.
//!
//! With async pins it can also wait for the falling edge that wakes the
//! remote from idle.

use embassy_futures::select::select_array;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;
use irremote_core::traits::KeySense;

/// Keys on active-low inputs
pub struct Keypad<P, const N: usize> {
    pins: [P; N],
}

impl<P: InputPin, const N: usize> Keypad<P, N> {
    /// Create a keypad from key inputs in position order
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Position of the first pressed key
    ///
    /// An input that fails to read counts as released.
    pub fn pressed(&mut self) -> Option<usize> {
        self.pins
            .iter_mut()
            .position(|pin| pin.is_low().unwrap_or(false))
    }

    /// Give back the key inputs
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin + Wait, const N: usize> Keypad<P, N> {
    /// Wait until any key goes down
    ///
    /// Returns the position whose edge fired first, or `None` if that
    /// input reported an error.
    pub async fn wait_for_press(&mut self) -> Option<usize> {
        let edges = self.pins.each_mut().map(|pin| pin.wait_for_falling_edge());
        let (result, index) = select_array(edges).await;
        result.ok().map(|_| index)
    }
}

impl<P: InputPin, const N: usize> KeySense for Keypad<P, N> {
    fn is_held(&mut self) -> bool {
        self.pressed().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Mock key input for testing
    #[derive(Clone, Copy)]
    struct MockKey {
        low: bool,
        broken: bool,
    }

    impl MockKey {
        fn up() -> Self {
            Self {
                low: false,
                broken: false,
            }
        }

        fn down() -> Self {
            Self {
                low: true,
                broken: false,
            }
        }

        fn broken() -> Self {
            Self {
                low: true,
                broken: true,
            }
        }
    }

    impl ErrorType for MockKey {
        type Error = ErrorKind;
    }

    impl InputPin for MockKey {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    impl Wait for MockKey {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            core::future::pending().await
        }

        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            self.wait_for_falling_edge().await
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            core::future::pending().await
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            if self.broken {
                return Err(ErrorKind::Other);
            }
            if self.low {
                Ok(())
            } else {
                core::future::pending().await
            }
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            self.wait_for_falling_edge().await
        }
    }

    /// Pin that can never fail
    struct FixedKey(bool);

    impl ErrorType for FixedKey {
        type Error = Infallible;
    }

    impl InputPin for FixedKey {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_no_key_pressed() {
        let mut keypad = Keypad::new([MockKey::up(); 5]);
        assert_eq!(keypad.pressed(), None);
        assert!(!keypad.is_held());
    }

    #[test]
    fn test_lowest_position_wins() {
        let mut keypad = Keypad::new([
            MockKey::up(),
            MockKey::up(),
            MockKey::down(),
            MockKey::up(),
            MockKey::down(),
        ]);
        assert_eq!(keypad.pressed(), Some(2));
        assert!(keypad.is_held());
    }

    #[test]
    fn test_read_error_counts_as_released() {
        let mut keypad = Keypad::new([MockKey::broken(), MockKey::up()]);
        assert_eq!(keypad.pressed(), None);
        assert!(!keypad.is_held());

        let mut keypad = Keypad::new([MockKey::broken(), MockKey::down()]);
        assert_eq!(keypad.pressed(), Some(1));
    }

    #[test]
    fn test_release_returns_pins() {
        let keypad = Keypad::new([FixedKey(true), FixedKey(false)]);
        let [a, b] = keypad.release();
        assert!(a.0);
        assert!(!b.0);
    }

    #[test]
    fn test_wait_for_press() {
        let mut keypad = Keypad::new([MockKey::up(), MockKey::up(), MockKey::down()]);
        let index = embassy_futures::block_on(keypad.wait_for_press());
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_wait_for_press_error() {
        let mut keypad = Keypad::new([MockKey::up(), MockKey::broken()]);
        let index = embassy_futures::block_on(keypad.wait_for_press());
        assert_eq!(index, None);
    }

    #[test]
    fn test_drives_transmitter_repeats() {
        use irremote_core::sim::Bench;
        use irremote_core::transmit::Transmitter;

        let bench = Bench::new();
        let mut tx = Transmitter::new(bench.carrier(), bench.delay());
        let mut keypad = Keypad::new([FixedKey(false)]);

        // Released keypad: exactly one Samsung frame and its gap
        tx.samsung_send_code(&mut keypad, 0x07, 0x02);
        assert_eq!(bench.intervals().len(), 67 + 1);
    }
}
