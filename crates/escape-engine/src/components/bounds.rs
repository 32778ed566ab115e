use glam::Vec3;

/// Axis-aligned box described by its center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub half: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half: Vec3) -> Self {
        Self { center, half }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict overlap of the horizontal (x, z) rectangles. Touching edges do not count.
    pub fn footprint_overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.x > b_min.x && a_min.x < b_max.x && a_max.z > b_min.z && a_min.z < b_max.z
    }

    /// Strict overlap on all three axes.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.footprint_overlaps(other)
            && self.max().y > other.min().y
            && self.min().y < other.max().y
    }
}
