use glam::{Mat4, Vec3};

/// Third-person follow camera: sits at a fixed offset from the player and looks at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Eye position relative to the followed point.
    pub offset: Vec3,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl FollowCamera {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            eye: offset,
            target: Vec3::ZERO,
        }
    }

    /// Snap to `target`. No smoothing: the camera is rigidly attached.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
        self.eye = target + self.offset;
    }

    /// Right-handed view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 3.0, 5.0))
    }
}
