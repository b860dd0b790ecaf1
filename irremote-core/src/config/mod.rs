//! Configuration types
//!
//! Board-agnostic key bindings, stored as postcard binary data.

pub mod keymap;

pub use keymap::*;
