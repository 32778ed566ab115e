use glam::Vec2;

use crate::input::bindings::Direction;

/// Level-triggered movement flags, one per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Forward => self.forward = held,
            Direction::Backward => self.backward = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Movement intent as `(right - left, forward - back)`, unit length or zero.
    /// Opposing keys cancel; diagonals are no faster than a single axis.
    pub fn intent(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(
            axis(self.right, self.left),
            axis(self.forward, self.backward),
        )
        .normalize_or_zero()
    }
}
