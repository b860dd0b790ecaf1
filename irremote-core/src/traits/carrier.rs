//! IR carrier output

/// Square-wave carrier on the IR emitter
///
/// The duty cycle is fixed at 25% by the implementation. The frequency is
/// set once at the start of a transmission, before the first `on()`.
pub trait Carrier {
    /// Set the carrier frequency in Hz
    ///
    /// Leaves the carrier off.
    fn set_frequency(&mut self, hz: u32);

    /// Start emitting the carrier
    fn on(&mut self);

    /// Stop emitting the carrier
    fn off(&mut self);
}

impl<T: Carrier + ?Sized> Carrier for &mut T {
    fn set_frequency(&mut self, hz: u32) {
        T::set_frequency(self, hz)
    }

    fn on(&mut self) {
        T::on(self)
    }

    fn off(&mut self) {
        T::off(self)
    }
}
