use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Ascend,
    Descend,
}

#[derive(Default, Resource)]
pub struct ActionState {
    pressed: HashMap<PlayerAction, bool>,
}

impl ActionState {
    pub fn set(&mut self, action: PlayerAction, is_pressed: bool) {
        self.pressed.insert(action, is_pressed);
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        *self.pressed.get(&action).unwrap_or(&false)
    }

    /// Local-space move intent: x = right, y = up, z = forward.
    pub fn move_axes(&self) -> Vec3 {
        let axis = |pos: PlayerAction, neg: PlayerAction| self.pressed(pos) as i32 as f32 - self.pressed(neg) as i32 as f32;
        Vec3::new(
            axis(PlayerAction::MoveRight, PlayerAction::MoveLeft),
            axis(PlayerAction::Ascend, PlayerAction::Descend),
            axis(PlayerAction::MoveForward, PlayerAction::MoveBackward),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let mut s = ActionState::default();
        assert_eq!(s.move_axes(), Vec3::ZERO);
        s.set(PlayerAction::MoveForward, true);
        s.set(PlayerAction::MoveLeft, true);
        s.set(PlayerAction::Ascend, true);
        assert_eq!(s.move_axes(), Vec3::new(-1.0, 1.0, 1.0));
        s.set(PlayerAction::MoveBackward, true);
        assert_eq!(s.move_axes().z, 0.0);
    }
}
