//! FPS-style Mouse State Tracker
//!
//! Turns mouse input into per-frame look deltas. Two sources feed it:
//! raw device motion while the cursor is captured, and absolute cursor
//! positions. The first cursor sample after startup (or after capture
//! changes) only latches the position and reports zero motion, so the view
//! never jumps.

/// Mouse-look tracker.
///
/// - **Raw motion**: device deltas accumulate until consumed, and are only
///   taken while captured. A locked cursor never reaches the window edge.
/// - **Latch**: `previous` is the cursor position at the last `consume_delta()`
/// - **Sign convention**: +x = moved right, +y = moved up
///
/// # Example
///
/// ```rust,ignore
/// let mut mouse = FpsMouseState::new();
///
/// // In event loop: record the cursor position
/// mouse.cursor_moved(640.0, 360.0);
/// assert_eq!(mouse.consume_delta(), (0.0, 0.0)); // first sample latches
///
/// mouse.cursor_moved(650.0, 350.0);
/// assert_eq!(mouse.consume_delta(), (10.0, 10.0)); // right and up
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Most recently reported cursor position.
    cursor: Option<(f64, f64)>,
    /// Cursor position when the last delta was consumed.
    previous: Option<(f64, f64)>,
    /// Raw motion accumulated since the last consume, already +y up.
    raw_delta: (f32, f32),
    /// Whether the cursor is currently captured (hidden and confined).
    cursor_captured: bool,
}

impl FpsMouseState {
    /// Create a new tracker with no latched position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an absolute cursor position (window pixels, +y down).
    #[inline]
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    /// Accumulate raw device motion (device units, +y down).
    ///
    /// Ignored while the cursor is not captured.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured {
            return;
        }
        self.raw_delta.0 += dx;
        self.raw_delta.1 -= dy;
    }

    /// Motion since the previous call, then advance the latch.
    ///
    /// Cursor motion counts only once two positions have been observed.
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let (cx, cy) = match (self.cursor, self.previous) {
            (Some((x, y)), Some((px, py))) => ((x - px) as f32, (py - y) as f32),
            _ => (0.0, 0.0),
        };
        if self.cursor.is_some() {
            self.previous = self.cursor;
        }
        let (rx, ry) = std::mem::take(&mut self.raw_delta);
        (cx + rx, cy + ry)
    }

    /// Set whether the cursor is captured.
    ///
    /// Changing capture drops the latch and any pending raw motion so the
    /// next sample re-latches instead of producing a jump.
    pub fn set_captured(&mut self, captured: bool) {
        if captured != self.cursor_captured {
            self.previous = None;
            self.raw_delta = (0.0, 0.0);
        }
        self.cursor_captured = captured;
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Forget the latched position and pending motion; the next sample
    /// reports zero motion.
    pub fn reset_latch(&mut self) {
        self.previous = None;
        self.raw_delta = (0.0, 0.0);
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let mut state = FpsMouseState::new();
        assert!(!state.is_captured());
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_first_sample_latches() {
        let mut state = FpsMouseState::new();
        state.cursor_moved(500.0, 300.0);
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_delta_sign_convention() {
        let mut state = FpsMouseState::new();
        state.cursor_moved(500.0, 300.0);
        state.consume_delta();

        // Right and up on screen
        state.cursor_moved(512.0, 290.0);
        assert_eq!(state.consume_delta(), (12.0, 10.0));

        // No motion since last consume
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_multiple_moves_between_consumes() {
        let mut state = FpsMouseState::new();
        state.cursor_moved(0.0, 0.0);
        state.consume_delta();
        state.cursor_moved(3.0, 1.0);
        state.cursor_moved(7.0, 4.0);
        assert_eq!(state.consume_delta(), (7.0, -4.0));
    }

    #[test]
    fn test_capture_change_relatches() {
        let mut state = FpsMouseState::new();
        state.cursor_moved(100.0, 100.0);
        state.consume_delta();

        state.set_captured(true);
        assert!(state.is_captured());
        state.cursor_moved(400.0, 400.0);
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_raw_motion_accumulates_with_y_up() {
        let mut state = FpsMouseState::new();
        state.set_captured(true);
        state.accumulate_delta(10.0, -5.0);
        state.accumulate_delta(3.0, 2.0);
        assert_eq!(state.consume_delta(), (13.0, 3.0));
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_raw_motion_is_unbounded() {
        // A locked cursor keeps reporting motion long past any window edge.
        let mut state = FpsMouseState::new();
        state.set_captured(true);
        for _ in 0..500 {
            state.accumulate_delta(40.0, 0.0);
            assert_eq!(state.consume_delta(), (40.0, 0.0));
        }
    }

    #[test]
    fn test_raw_motion_ignored_when_released() {
        let mut state = FpsMouseState::new();
        state.accumulate_delta(25.0, 25.0);
        assert_eq!(state.consume_delta(), (0.0, 0.0));

        state.set_captured(true);
        state.accumulate_delta(8.0, 0.0);
        state.set_captured(false);
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut state = FpsMouseState::new();
        state.cursor_moved(10.0, 5.0);
        state.set_captured(true);

        state.reset();
        assert!(!state.is_captured());
        assert_eq!(state.consume_delta(), (0.0, 0.0));
    }
}
