//! Key state

/// Source of the "key still held" signal
///
/// Polled once per frame or repeat cycle. A source that never reports
/// release keeps the transmitter repeating forever.
pub trait KeySense {
    /// True while the key that started the transmission is held
    fn is_held(&mut self) -> bool;
}

impl<T: KeySense + ?Sized> KeySense for &mut T {
    fn is_held(&mut self) -> bool {
        T::is_held(self)
    }
}
