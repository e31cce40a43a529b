/*!
Held-key state for the movement core.

Key events are applied as plain flag writes whenever the host receives them
(last write wins per key). Once per frame the controller takes an
[`InputSnapshot`], which is the only view the integrator ever sees.
*/

use nalgebra::Vector2;

/// Logical keys the core understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
}

impl LogicalKey {
    /// Map a physical key code (`KeyboardEvent.code` / winit `KeyCode` names)
    /// to a logical key. WASD and the arrow keys move, Space jumps.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Self::Forward),
            "KeyS" | "ArrowDown" => Some(Self::Backward),
            "KeyA" | "ArrowLeft" => Some(Self::Left),
            "KeyD" | "ArrowRight" => Some(Self::Right),
            "Space" => Some(Self::Jump),
            _ => None,
        }
    }
}

/// A single press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEdge {
    pub key: LogicalKey,
    pub pressed: bool,
}

impl KeyEdge {
    pub fn press(key: LogicalKey) -> Self {
        Self { key, pressed: true }
    }

    pub fn release(key: LogicalKey) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Per-direction key state plus the jump bookkeeping.
///
/// `can_jump` is not driven by keys: the controller clears it when a jump
/// fires and sets it from the resolver's grounded flag every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// A jump press not yet consumed by a frame.
    pub jump_requested: bool,
    pub can_jump: bool,
}

impl InputState {
    pub fn apply(&mut self, edge: KeyEdge) {
        let KeyEdge { key, pressed } = edge;
        match key {
            LogicalKey::Forward => self.move_forward = pressed,
            LogicalKey::Backward => self.move_backward = pressed,
            LogicalKey::Left => self.move_left = pressed,
            LogicalKey::Right => self.move_right = pressed,
            // Jumps fire on press; releasing Space does nothing.
            LogicalKey::Jump => {
                if pressed {
                    self.jump_requested = true;
                }
            }
        }
    }

    /// Apply a raw key code; unknown codes are ignored. Returns whether the
    /// code was recognized.
    pub fn apply_code(&mut self, code: &str, pressed: bool) -> bool {
        let Some(key) = LogicalKey::from_code(code) else {
            return false;
        };
        self.apply(KeyEdge { key, pressed });
        true
    }

    /// Take this frame's view of the keys, consuming any pending jump press.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let jump = std::mem::take(&mut self.jump_requested);
        InputSnapshot {
            forward: self.move_forward,
            backward: self.move_backward,
            left: self.move_left,
            right: self.move_right,
            jump,
        }
    }
}

/// Frame-stable copy of the movement keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// A jump was pressed since the previous frame.
    pub jump: bool,
}

impl InputSnapshot {
    /// Intended planar direction: `x` is right minus left, `y` is forward
    /// minus backward, normalized so diagonals are not faster. Zero when no
    /// axis is pushed.
    pub fn direction(&self) -> Vector2<f32> {
        let raw = Vector2::new(
            axis(self.right, self.left),
            axis(self.forward, self.backward),
        );
        raw.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
    }
}

#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wasd_arrows_and_space() {
        assert_eq!(LogicalKey::from_code("KeyW"), Some(LogicalKey::Forward));
        assert_eq!(LogicalKey::from_code("ArrowDown"), Some(LogicalKey::Backward));
        assert_eq!(LogicalKey::from_code("KeyA"), Some(LogicalKey::Left));
        assert_eq!(LogicalKey::from_code("ArrowRight"), Some(LogicalKey::Right));
        assert_eq!(LogicalKey::from_code("Space"), Some(LogicalKey::Jump));
        assert_eq!(LogicalKey::from_code("KeyQ"), None);
    }

    #[test]
    fn last_write_wins_per_key() {
        let mut input = InputState::default();
        input.apply(KeyEdge::release(LogicalKey::Forward));
        input.apply(KeyEdge::press(LogicalKey::Forward));
        assert!(input.move_forward);

        input.apply(KeyEdge::press(LogicalKey::Left));
        input.apply(KeyEdge::release(LogicalKey::Left));
        assert!(!input.move_left);
        assert!(input.move_forward);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.apply_code("Escape", true));
        assert_eq!(input, InputState::default());
        assert!(input.apply_code("KeyD", true));
        assert!(input.move_right);
    }

    #[test]
    fn jump_request_is_consumed_once() {
        let mut input = InputState::default();
        input.apply(KeyEdge::press(LogicalKey::Jump));
        input.apply(KeyEdge::release(LogicalKey::Jump));

        assert!(input.snapshot().jump);
        assert!(!input.snapshot().jump);
    }

    #[test]
    fn snapshot_keeps_held_keys() {
        let mut input = InputState::default();
        input.apply(KeyEdge::press(LogicalKey::Forward));
        let a = input.snapshot();
        let b = input.snapshot();
        assert!(a.forward && b.forward);
    }

    #[test]
    fn diagonal_is_unit_length() {
        let snap = InputSnapshot {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = snap.direction();
        assert!((dir.norm() - 1.0).abs() < 1.0e-6);
        assert!((dir.x - dir.y).abs() < 1.0e-6);
    }

    #[test]
    fn opposing_keys_cancel() {
        let snap = InputSnapshot {
            forward: true,
            backward: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(snap.direction(), Vector2::new(-1.0, 0.0));

        let all = InputSnapshot {
            forward: true,
            backward: true,
            left: true,
            right: true,
            jump: false,
        };
        assert_eq!(all.direction(), Vector2::zeros());
    }
}
