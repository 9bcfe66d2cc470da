//! Input Module
//!
//! Turns raw key and cursor events into one [`InputSnapshot`] per frame.
//! This module is decoupled from any specific windowing system (like winit);
//! the binary maps its key codes onto [`KeyCode`].
//!
//! # Example
//!
//! ```rust,ignore
//! use terrain_walk_engine::input::{InputSampler, KeyCode};
//!
//! let mut sampler = InputSampler::new();
//!
//! // Event loop
//! sampler.handle_key(KeyCode::Space, true);
//! sampler.cursor_moved(640.0, 360.0);
//!
//! // Once per frame
//! let snapshot = sampler.consume();
//! assert!(snapshot.jump_pressed);
//! ```

pub mod keyboard;
pub mod mouse_state;
pub mod snapshot;

pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::FpsMouseState;
pub use snapshot::InputSnapshot;

/// Accumulates window events between frames and produces snapshots.
///
/// All state that must survive between samples (held keys, previous-frame
/// key states for edge detection, the cursor latch) lives here.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    keys: MovementKeys,
    wireframe_key_down: bool,
    jump_was_down: bool,
    wireframe_was_down: bool,
    mouse: FpsMouseState,
}

impl InputSampler {
    /// Create a sampler with nothing pressed and no cursor latched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release. Returns `true` if the key is bound.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::F1 {
            self.wireframe_key_down = pressed;
            return true;
        }
        self.keys.handle_key(key, pressed)
    }

    /// Record an absolute cursor position in window pixels.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.mouse.cursor_moved(x, y);
    }

    /// Record raw device motion (+y down). Only counted while captured.
    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse.accumulate_delta(dx as f32, dy as f32);
    }

    /// Mark the cursor captured/released; either change re-latches the cursor.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.mouse.set_captured(captured);
    }

    /// Drop the cursor latch; the next consumed delta is zero.
    pub fn reset_cursor(&mut self) {
        self.mouse.reset_latch();
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.keys.reset();
        self.wireframe_key_down = false;
        self.mouse.reset_latch();
    }

    /// Currently held movement keys.
    pub fn keys(&self) -> &MovementKeys {
        &self.keys
    }

    /// Build this frame's snapshot and advance the edge/cursor latches.
    pub fn consume(&mut self) -> InputSnapshot {
        let (mouse_delta_x, mouse_delta_y) = self.mouse.consume_delta();

        let snapshot = InputSnapshot {
            move_forward: self.keys.forward,
            move_backward: self.keys.backward,
            move_left: self.keys.left,
            move_right: self.keys.right,
            jump_held: self.keys.jump,
            jump_pressed: self.keys.jump && !self.jump_was_down,
            sprint_held: self.keys.sprint,
            crouch_held: self.keys.crouch,
            toggle_wireframe_pressed: self.wireframe_key_down && !self.wireframe_was_down,
            mouse_delta_x,
            mouse_delta_y,
        };

        self.jump_was_down = self.keys.jump;
        self.wireframe_was_down = self.wireframe_key_down;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_sampler() {
        let mut sampler = InputSampler::new();
        assert_eq!(sampler.consume(), InputSnapshot::idle());
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::Space, true);

        let first = sampler.consume();
        assert!(first.jump_pressed);
        assert!(first.jump_held);

        let second = sampler.consume();
        assert!(!second.jump_pressed);
        assert!(second.jump_held);

        sampler.handle_key(KeyCode::Space, false);
        assert!(!sampler.consume().jump_held);

        sampler.handle_key(KeyCode::Space, true);
        assert!(sampler.consume().jump_pressed);
    }

    #[test]
    fn test_wireframe_toggle_is_edge_triggered() {
        let mut sampler = InputSampler::new();
        assert!(sampler.handle_key(KeyCode::F1, true));
        assert!(sampler.consume().toggle_wireframe_pressed);
        assert!(!sampler.consume().toggle_wireframe_pressed);
    }

    #[test]
    fn test_tap_between_frames_is_missed() {
        // Level sampling: a press released before the frame is not seen.
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::Space, true);
        sampler.handle_key(KeyCode::Space, false);
        assert!(!sampler.consume().jump_pressed);
    }

    #[test]
    fn test_held_keys_are_level_triggered() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::W, true);
        sampler.handle_key(KeyCode::ShiftLeft, true);
        sampler.handle_key(KeyCode::ControlRight, true);
        for _ in 0..3 {
            let s = sampler.consume();
            assert!(s.move_forward && s.sprint_held && s.crouch_held);
        }
    }

    #[test]
    fn test_mouse_delta_flows_into_snapshot() {
        let mut sampler = InputSampler::new();
        sampler.cursor_moved(100.0, 100.0);
        assert_eq!(sampler.consume().mouse_delta_x, 0.0);

        sampler.cursor_moved(90.0, 80.0);
        let s = sampler.consume();
        assert_eq!(s.mouse_delta_x, -10.0);
        assert_eq!(s.mouse_delta_y, 20.0);
    }

    #[test]
    fn test_raw_motion_turns_past_window_edge() {
        let mut sampler = InputSampler::new();
        sampler.set_cursor_captured(true);
        // Far more motion than a 1280 px wide window could confine.
        for _ in 0..100 {
            sampler.mouse_motion(50.0, 0.0);
            assert_eq!(sampler.consume().mouse_delta_x, 50.0);
        }

        sampler.mouse_motion(0.0, 12.0);
        assert_eq!(sampler.consume().mouse_delta_y, -12.0);
    }

    #[test]
    fn test_release_all() {
        let mut sampler = InputSampler::new();
        sampler.handle_key(KeyCode::D, true);
        sampler.handle_key(KeyCode::F1, true);
        sampler.release_all();
        let s = sampler.consume();
        assert!(!s.move_right);
        assert!(!s.toggle_wireframe_pressed);
    }

    #[test]
    fn test_reset_cursor_swallows_jump() {
        let mut sampler = InputSampler::new();
        sampler.cursor_moved(0.0, 0.0);
        sampler.consume();

        sampler.reset_cursor();
        sampler.cursor_moved(500.0, 500.0);
        let s = sampler.consume();
        assert_eq!((s.mouse_delta_x, s.mouse_delta_y), (0.0, 0.0));

        sampler.cursor_moved(505.0, 500.0);
        assert_eq!(sampler.consume().mouse_delta_x, 5.0);
    }
}
