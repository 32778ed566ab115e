use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::components::bounds::Aabb;

/// World axis a moving obstacle travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub fn get_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

/// Constant-velocity ping-pong motion between two bounds on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementProfile {
    pub axis: Axis,
    /// Either -1.0 or +1.0.
    pub direction: f32,
    /// Distance covered per tick (not per second).
    pub speed: f32,
    pub min: f32,
    pub max: f32,
}

impl MovementProfile {
    /// Move `center` one tick along the axis. Returns true if the direction flipped.
    pub fn advance(&mut self, center: &mut Vec3) -> bool {
        let coord = self.axis.get_mut(center);
        *coord += self.direction * self.speed;
        if *coord <= self.min || *coord >= self.max {
            self.direction = -self.direction;
            return true;
        }
        false
    }
}

/// Whether an obstacle stays put or follows a movement profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Static,
    Moving(MovementProfile),
}

/// A solid box the player can stand on or be blocked by.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    pub bounds: Aabb,
    pub motion: Motion,
}

impl Obstacle {
    pub fn fixed(id: EntityId, center: Vec3, half: Vec3) -> Self {
        Self {
            id,
            bounds: Aabb::new(center, half),
            motion: Motion::Static,
        }
    }

    pub fn moving(id: EntityId, center: Vec3, half: Vec3, profile: MovementProfile) -> Self {
        Self {
            id,
            bounds: Aabb::new(center, half),
            motion: Motion::Moving(profile),
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Moving(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_profile() -> MovementProfile {
        MovementProfile {
            axis: Axis::X,
            direction: 1.0,
            speed: 0.03,
            min: -5.0,
            max: 5.0,
        }
    }

    #[test]
    fn advance_moves_along_axis_only() {
        let mut profile = platform_profile();
        let mut center = Vec3::new(0.0, 0.25, -7.0);
        assert!(!profile.advance(&mut center));
        assert!((center.x - 0.03).abs() < 1e-6);
        assert_eq!(center.y, 0.25);
        assert_eq!(center.z, -7.0);
    }

    #[test]
    fn advance_flips_at_max() {
        let mut profile = platform_profile();
        let mut center = Vec3::new(4.99, 0.0, 0.0);
        assert!(profile.advance(&mut center));
        assert_eq!(profile.direction, -1.0);
    }

    #[test]
    fn advance_flips_at_min() {
        let mut profile = MovementProfile {
            direction: -1.0,
            ..platform_profile()
        };
        let mut center = Vec3::new(-4.98, 0.0, 0.0);
        assert!(profile.advance(&mut center));
        assert_eq!(profile.direction, 1.0);
    }

    #[test]
    fn axis_z_profile() {
        let mut profile = MovementProfile {
            axis: Axis::Z,
            ..platform_profile()
        };
        let mut center = Vec3::ZERO;
        profile.advance(&mut center);
        assert_eq!(center.x, 0.0);
        assert!((center.z - 0.03).abs() < 1e-6);
    }
}
