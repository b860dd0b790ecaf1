//! Delay adapter
//!
//! Lets any blocking `embedded_hal::delay::DelayNs` (a busy-wait on the
//! system timer, `embassy_time::Delay`, a SysTick delay) serve as the
//! transmitter's delay.

use embedded_hal::delay::DelayNs;
use irremote_core::traits::Delay;

/// Blocking delay backed by an `embedded-hal` delay provider
pub struct HalDelay<D> {
    inner: D,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wrap a delay provider
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Give back the delay provider
    pub fn release(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Delay provider that adds up requested time
    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
        calls: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
            self.calls += 1;
        }
    }

    #[test]
    fn test_microseconds() {
        let mut delay = HalDelay::new(MockDelay::default());
        delay.delay_us(562);
        delay.delay_us(1687);
        assert_eq!(delay.inner.total_ns, 2_249_000);
    }

    #[test]
    fn test_milliseconds() {
        let mut delay = HalDelay::new(MockDelay::default());
        delay.delay_ms(89);
        let inner = delay.release();
        assert_eq!(inner.total_ns, 89_000_000);
    }
}
