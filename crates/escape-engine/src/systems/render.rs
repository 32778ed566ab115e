//! Snapshot writer: packs entity transforms, phase, timer and camera into the flat buffer.

use crate::api::game::GameStatus;
use crate::bridge::protocol::*;
use crate::core::scene::Scene;
use crate::renderer::camera::FollowCamera;
use crate::renderer::instance::{EntityInstance, SnapshotBuffer};

/// Per-frame values written into the header next to the scene data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameHeader {
    pub frame: u64,
    pub status: GameStatus,
    pub event_count: usize,
}

/// Rebuild the snapshot from the scene. Returns the number of entity records written;
/// entities beyond `layout.max_entities` are dropped.
pub fn write_snapshot(
    buffer: &mut SnapshotBuffer,
    layout: &ProtocolLayout,
    scene: &Scene,
    camera: &FollowCamera,
    header: &FrameHeader,
) -> usize {
    let data = buffer.as_mut_slice();
    debug_assert!(data.len() >= layout.buffer_total_floats);

    let mut count = 0;
    for entity in scene.iter().take(layout.max_entities) {
        let offset = layout.entity_offset(count);
        let instance = EntityInstance::from_entity(&entity);
        data[offset..offset + ENTITY_FLOATS].copy_from_slice(bytemuck::cast_slice(&[instance]));
        count += 1;
    }

    let elapsed = header.status.elapsed_seconds;
    data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    data[HEADER_FRAME_COUNTER] = header.frame as f32;
    data[HEADER_PHASE] = header.status.phase.code();
    data[HEADER_ELAPSED_SECONDS] = elapsed as f32;
    data[HEADER_ELAPSED_WHOLE] = elapsed.floor() as f32;
    data[HEADER_ENTITY_COUNT] = count as f32;
    data[HEADER_MAX_ENTITIES] = layout.max_entities as f32;
    data[HEADER_CAMERA_EYE_X] = camera.eye.x;
    data[HEADER_CAMERA_EYE_Y] = camera.eye.y;
    data[HEADER_CAMERA_EYE_Z] = camera.eye.z;
    data[HEADER_CAMERA_TARGET_X] = camera.target.x;
    data[HEADER_CAMERA_TARGET_Y] = camera.target.y;
    data[HEADER_CAMERA_TARGET_Z] = camera.target.z;
    data[HEADER_EVENT_COUNT] = header.event_count as f32;

    count
}
