//! Per-frame input snapshot consumed by the simulation.

/// Everything the player body needs from input for one tick.
///
/// `*_pressed` fields are edge-triggered (true only on the frame the key goes
/// down); `*_held` fields and the directions are level-triggered. Mouse
/// deltas use +x = turn right, +y = look up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
    pub jump_pressed: bool,
    pub sprint_held: bool,
    pub crouch_held: bool,
    pub toggle_wireframe_pressed: bool,
    pub mouse_delta_x: f32,
    pub mouse_delta_y: f32,
}

impl InputSnapshot {
    /// Snapshot with no keys and no mouse motion.
    pub fn idle() -> Self {
        Self::default()
    }
}
