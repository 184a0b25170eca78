//! Input management system
//!
//! Tracks keyboard state between frames. Games poll it once per tick:
//! `is_key_held` for continuous actions, `is_key_pressed` for one-shot
//! actions, and `typed_chars` for text entry.

use std::collections::HashSet;

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
    typed: Vec<char>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call after the game has consumed the frame.
    pub fn update(&mut self) {
        self.pressed.clear();
        self.typed.clear();
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Handle a typed character. Control characters are dropped.
    pub fn handle_char(&mut self, c: char) {
        if c.is_control() {
            log::trace!("Ignoring control character {:?}", c);
            return;
        }
        self.typed.push(c);
    }

    /// Whether `key` is currently down
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether `key` went down during this frame
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether any of `keys` is currently down
    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_key_held(*key))
    }

    /// Whether any of `keys` went down during this frame
    pub fn any_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_key_pressed(*key))
    }

    /// Printable characters typed during this frame, in order
    pub fn typed_chars(&self) -> &[char] {
        &self.typed
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Digit 1
    Num1,
    /// Digit 2
    Num2,
    /// Digit 3
    Num3,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
