//! Keyboard Input Module
//!
//! Held-key tracking for movement input.
//! Decoupled from winit to use generic key codes.

/// Generic key codes, independent of windowing system.
///
/// Only the keys the demo binds are named; everything else maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    F1,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current (level-triggered) state of the movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
    /// Space - jump
    pub jump: bool,
    /// Shift - sprint
    pub sprint: bool,
    /// Ctrl - crouch (slide while sprinting)
    pub crouch: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::Space => self.jump = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.sprint = pressed,
            KeyCode::ControlLeft | KeyCode::ControlRight => self.crouch = pressed,
            _ => return false,
        }
        true
    }

    /// Check if any directional key is currently pressed.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
