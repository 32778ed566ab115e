use glam::Vec3;

/// Height of the floor plane.
pub const FLOOR_Y: f32 = 0.0;

/// Immutable horizontal bounds of the play area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Room {
    /// Square room centered on the origin.
    pub fn symmetric(half_size: f32) -> Self {
        Self {
            x_min: -half_size,
            x_max: half_size,
            z_min: -half_size,
            z_max: half_size,
        }
    }

    /// Whether a point's (x, z) lies within the bounds (edges included).
    pub fn contains(&self, pos: Vec3) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.z >= self.z_min && pos.z <= self.z_max
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.x_min + self.x_max) * 0.5,
            FLOOR_Y,
            (self.z_min + self.z_max) * 0.5,
        )
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(
            (self.x_max - self.x_min) * 0.5,
            0.0,
            (self.z_max - self.z_min) * 0.5,
        )
    }
}
