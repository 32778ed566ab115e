use glam::Vec3;

use crate::components::bounds::Aabb;

/// The controllable character.
///
/// `pos` is the feet point (bottom-center), so a player standing on the floor has `pos.y == 0`
/// and occupies `[pos.y, pos.y + height()]` vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec3,
    /// Units per second. Only `y` is integrated; horizontal motion comes from held input.
    pub velocity: Vec3,
    pub half_extents: Vec3,
    /// Resting on the floor or an obstacle top; the only state in which a jump is accepted.
    pub grounded: bool,
    /// Airborne because of a jump. Never true together with `grounded`.
    pub jumping: bool,
}

impl Player {
    pub fn new(half_extents: Vec3) -> Self {
        Self {
            pos: Vec3::ZERO,
            velocity: Vec3::ZERO,
            half_extents,
            grounded: true,
            jumping: false,
        }
    }

    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    /// Collision box centered on the body rather than the feet.
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.pos + Vec3::new(0.0, self.half_extents.y, 0.0),
            self.half_extents,
        )
    }

    /// Back to the origin, at rest, standing on the floor.
    pub fn reset(&mut self) {
        self.pos = Vec3::ZERO;
        self.velocity = Vec3::ZERO;
        self.grounded = true;
        self.jumping = false;
    }

    /// Launch upward if grounded. Airborne requests are dropped, not queued.
    pub fn try_jump(&mut self, force: f32) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.y = force;
        self.grounded = false;
        self.jumping = true;
        true
    }

    /// Come to rest with the feet at `surface_y`.
    pub fn land(&mut self, surface_y: f32) {
        self.pos.y = surface_y;
        self.velocity.y = 0.0;
        self.grounded = true;
        self.jumping = false;
    }
}
