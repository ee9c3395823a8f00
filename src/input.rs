//! Key latch shared between the host event system and the simulation
//!
//! The host writes key-down/key-up notifications whenever they arrive; the
//! simulation samples the whole latch once at the start of each tick, so a
//! tick never sees a half-updated set of keys.

use std::collections::HashMap;

use crate::sim::TickInput;

/// Host key identifier (browser `KeyboardEvent.key` naming)
pub type KeyId = String;

/// Keys the simulation reads
pub mod keys {
    pub const LEFT: &str = "ArrowLeft";
    pub const RIGHT: &str = "ArrowRight";
    pub const JUMP: &str = "ArrowUp";
}

/// Latest pressed state per key
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pressed: HashMap<KeyId, bool>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: impl Into<KeyId>) {
        self.pressed.insert(key.into(), true);
    }

    pub fn key_up(&mut self, key: impl Into<KeyId>) {
        self.pressed.insert(key.into(), false);
    }

    pub fn set(&mut self, key: impl Into<KeyId>, pressed: bool) {
        self.pressed.insert(key.into(), pressed);
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Raw key map, as last written by the host
    pub fn keys(&self) -> &HashMap<KeyId, bool> {
        &self.pressed
    }

    /// Read the latch in full for one tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            left: self.is_pressed(keys::LEFT),
            right: self.is_pressed(keys::RIGHT),
            jump: self.is_pressed(keys::JUMP),
        }
    }
}
