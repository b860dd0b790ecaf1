//! Key bindings
//!
//! A keymap assigns each keypad position a short list of actions, run in
//! order when the key is pressed. Most keys send a single IR code; a key
//! can also chain several codes (for example TV and amplifier power) or
//! insert a pause between them.

use heapless::Vec;
use irremote_protocol::{IrCode, Protocol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum keys in a keymap
pub const MAX_KEYS: usize = 8;

/// Maximum actions bound to one key
pub const MAX_ACTIONS_PER_KEY: usize = 4;

/// First byte of a stored keymap
pub const KEYMAP_MAGIC: u8 = 0xA5;

/// Errors that can occur building or loading a keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More keys than `MAX_KEYS`
    TooManyKeys,
    /// More actions on one key than `MAX_ACTIONS_PER_KEY`
    TooManyActions,
    /// Stored data does not start with `KEYMAP_MAGIC`
    BadMagic,
    /// Keymap does not fit in the output buffer
    Serialize,
    /// Stored data is not a valid keymap
    Deserialize,
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyAction {
    /// Send an IR code, repeating while the key is held
    Send(IrCode),
    /// Wait with the carrier off
    Pause {
        /// Pause length in milliseconds
        ms: u16,
    },
}

impl KeyAction {
    /// Shorthand for a send action
    pub const fn send(protocol: Protocol, address: u16, command: u8) -> Self {
        KeyAction::Send(IrCode::new(protocol, address, command))
    }
}

/// Actions bound to one key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyBinding {
    /// Actions in execution order
    pub actions: Vec<KeyAction, MAX_ACTIONS_PER_KEY>,
}

impl KeyBinding {
    /// A key with a single action
    pub fn single(action: KeyAction) -> Self {
        let mut actions = Vec::new();
        // Capacity is at least one
        let _ = actions.push(action);
        Self { actions }
    }

    /// A key running several actions in order
    pub fn chain(actions: &[KeyAction]) -> Result<Self, ConfigError> {
        let mut binding = Self::default();
        binding
            .actions
            .extend_from_slice(actions)
            .map_err(|_| ConfigError::TooManyActions)?;
        Ok(binding)
    }

    /// True if the key does nothing
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Bindings for every key, indexed by keypad position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keymap {
    keys: Vec<KeyBinding, MAX_KEYS>,
}

impl Keymap {
    /// An empty keymap
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Bind the next key position
    pub fn push(&mut self, binding: KeyBinding) -> Result<(), ConfigError> {
        self.keys.push(binding).map_err(|_| ConfigError::TooManyKeys)
    }

    /// Binding for a key position
    pub fn get(&self, key: usize) -> Option<&KeyBinding> {
        self.keys.get(key)
    }

    /// Number of bound key positions
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if no key is bound
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Write the keymap into `buffer`
    ///
    /// Returns the number of bytes written.
    #[cfg(feature = "serde")]
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, ConfigError> {
        let (magic, body) = buffer.split_first_mut().ok_or(ConfigError::Serialize)?;
        *magic = KEYMAP_MAGIC;
        let used = postcard::to_slice(self, body).map_err(|_| ConfigError::Serialize)?;
        Ok(1 + used.len())
    }

    /// Read a keymap written by [`Keymap::encode`]
    ///
    /// Trailing bytes after the keymap are ignored, so a whole storage
    /// page can be passed in.
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        match bytes.split_first() {
            Some((&KEYMAP_MAGIC, body)) => postcard::take_from_bytes(body)
                .map(|(keymap, _rest)| keymap)
                .map_err(|_| ConfigError::Deserialize),
            _ => Err(ConfigError::BadMagic),
        }
    }
}

impl Default for Keymap {
    /// Power keys for common TV brands
    ///
    /// | key | action                                   |
    /// |-----|------------------------------------------|
    /// | 0   | LG: NEC address 0x04, command 0x08       |
    /// | 1   | Philips: RC-5 address 0x00, command 0x0B |
    /// | 2   | Sony: SIRC-12 address 0x01, command 0x15 |
    /// | 3   | Samsung: address 0x07, command 0x02      |
    /// | 4   | 10ms pause                               |
    fn default() -> Self {
        let keys = [
            KeyAction::send(Protocol::Nec, 0x04, 0x08),
            KeyAction::send(Protocol::Rc5, 0x00, 0x0B),
            KeyAction::send(Protocol::Sirc12, 0x01, 0x15),
            KeyAction::send(Protocol::Samsung, 0x07, 0x02),
            KeyAction::Pause { ms: 10 },
        ];

        let mut keymap = Self::new();
        for action in keys {
            // Five keys always fit
            let _ = keymap.push(KeyBinding::single(action));
        }
        keymap
    }
}
