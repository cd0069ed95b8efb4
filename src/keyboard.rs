use log::warn;

use crate::constants::KEY_COUNT;

/// # Keyboard
/// Chip-8 input is generated with a hexadecimal keypad of 16 keys (0..F).
///
/// Tracks:
/// - which keys are currently held down
/// - at most one register waiting for the next key press
///
/// The waiting register replaces a stored callback: the next key-down hands
/// it back exactly once so the owner can write the key into it.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    pressed: [bool; KEY_COUNT],
    register_needing_key: Option<usize>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key press.
    ///
    /// Returns the register that was waiting for a key, if any, and clears it.
    /// This happens whether or not the key was already held.
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn on_key_down(&mut self, key: u8) -> Option<usize> {
        if key as usize >= KEY_COUNT {
            warn!("ignoring key down for unknown key {:#04X}", key);
            return None;
        }
        let register = self.register_needing_key.take();
        self.pressed[key as usize] = true;
        register
    }

    /// Registers a key release; releasing a key that isn't held does nothing.
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn on_key_up(&mut self, key: u8) {
        if let Some(pressed) = self.pressed.get_mut(key as usize) {
            *pressed = false;
        }
    }

    /// Keys outside 0..F are never pressed
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    /// Asks for the next key press to be delivered to `register`.
    /// Replaces any request that hasn't been fulfilled yet.
    pub fn set_on_key_press(&mut self, register: usize) {
        self.register_needing_key = Some(register);
    }

    /// Drops an unfulfilled request; held keys are untouched
    pub fn cancel_key_request(&mut self) {
        self.register_needing_key = None;
    }

    pub fn register_needing_key(&self) -> Option<usize> {
        self.register_needing_key
    }
}
