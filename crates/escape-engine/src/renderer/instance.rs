use bytemuck::{Pod, Zeroable};

use crate::components::entity::EntityRef;

/// Per-entity record written to the snapshot for the JS renderer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EntityInstance {
    /// `EntityKind` code.
    pub kind: f32,
    /// Entity ID.
    pub id: f32,
    /// Anchor position (box center; feet point for the player).
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Half-extents.
    pub hx: f32,
    pub hy: f32,
    pub hz: f32,
}

impl EntityInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_entity(entity: &EntityRef<'_>) -> Self {
        let pos = entity.position();
        let half = entity.half_extents();
        Self {
            kind: entity.kind().code(),
            id: entity.id().0 as f32,
            x: pos.x,
            y: pos.y,
            z: pos.z,
            hx: half.x,
            hy: half.y,
            hz: half.z,
        }
    }
}

/// Flat snapshot: header followed by entity records, all f32.
pub struct SnapshotBuffer {
    data: Vec<f32>,
}

impl SnapshotBuffer {
    pub fn with_capacity(total_floats: usize) -> Self {
        Self {
            data: vec![0.0; total_floats],
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw pointer to snapshot data for JS reads out of WASM memory.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }
}
