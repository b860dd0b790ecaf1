//! Key press dispatch
//!
//! Maps a pressed key position to its keymap binding and runs the actions
//! on a [`Transmitter`]. The remote owns the state that must survive
//! between presses: the keymap and the RC-5 toggle.

use irremote_protocol::Rc5Toggle;

use crate::config::{KeyAction, Keymap};
use crate::traits::{Carrier, Delay, KeySense};
use crate::transmit::Transmitter;

/// Outcome of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The binding ran; number of actions executed
    Ran(usize),
    /// No binding for this key position
    Unbound,
}

/// Keymap plus cross-press transmit state
#[derive(Debug, Clone)]
pub struct Remote {
    keymap: Keymap,
    toggle: Rc5Toggle,
}

impl Remote {
    /// Create a remote with the given keymap and a cleared toggle
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            toggle: Rc5Toggle::default(),
        }
    }

    /// The active keymap
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Toggle value for the next RC-5 press
    pub fn toggle(&self) -> Rc5Toggle {
        self.toggle
    }

    /// Run the binding for `key`
    ///
    /// Blocks until every action has finished, which for IR codes means
    /// until the key is released.
    pub fn press<C, D, K>(&mut self, tx: &mut Transmitter<C, D>, held: &mut K, key: usize) -> Dispatch
    where
        C: Carrier,
        D: Delay,
        K: KeySense,
    {
        let Some(binding) = self.keymap.get(key) else {
            return Dispatch::Unbound;
        };

        for action in &binding.actions {
            match *action {
                KeyAction::Send(code) => {
                    self.toggle = tx.send(held, code, self.toggle);
                }
                KeyAction::Pause { ms } => tx.pause_ms(ms as u32),
            }
        }
        Dispatch::Ran(binding.actions.len())
    }
}

impl Default for Remote {
    fn default() -> Self {
        Self::new(Keymap::default())
    }
}
