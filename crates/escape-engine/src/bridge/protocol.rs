//! Snapshot buffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Entities: max_entities × 8 floats]
//! ```
//!
//! The header carries its own capacity so TypeScript can compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::renderer::instance::EntityInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PHASE: usize = 2;
pub const HEADER_ELAPSED_SECONDS: usize = 3;
pub const HEADER_ELAPSED_WHOLE: usize = 4;
pub const HEADER_ENTITY_COUNT: usize = 5;
pub const HEADER_MAX_ENTITIES: usize = 6;
pub const HEADER_CAMERA_EYE_X: usize = 7;
pub const HEADER_CAMERA_EYE_Y: usize = 8;
pub const HEADER_CAMERA_EYE_Z: usize = 9;
pub const HEADER_CAMERA_TARGET_X: usize = 10;
pub const HEADER_CAMERA_TARGET_Y: usize = 11;
pub const HEADER_CAMERA_TARGET_Z: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per entity record (fixed wire format).
pub const ENTITY_FLOATS: usize = EntityInstance::FLOATS;

/// Runtime-computed snapshot layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum entity records.
    pub max_entities: usize,
    /// Size of entity data section in floats.
    pub entity_data_floats: usize,
    /// Offset (in floats) where entity data begins.
    pub entity_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_entities: usize) -> Self {
        let entity_data_floats = max_entities * ENTITY_FLOATS;
        let entity_data_offset = HEADER_FLOATS;
        let buffer_total_floats = entity_data_offset + entity_data_floats;

        Self {
            max_entities,
            entity_data_floats,
            entity_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_entities)
    }

    /// Float offset of the `index`-th entity record.
    pub fn entity_offset(&self, index: usize) -> usize {
        self.entity_data_offset + index * ENTITY_FLOATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_entities, 64);
        assert_eq!(layout.entity_data_offset, HEADER_FLOATS);
        assert_eq!(layout.entity_data_floats, 64 * 8);
        assert_eq!(layout.buffer_total_floats, 16 + 64 * 8);
        assert_eq!(layout.buffer_total_bytes, (16 + 64 * 8) * 4);
    }

    #[test]
    fn entity_offsets_are_contiguous() {
        let layout = ProtocolLayout::new(4);
        assert_eq!(layout.entity_offset(0), 16);
        assert_eq!(layout.entity_offset(1), 24);
        assert_eq!(layout.entity_offset(3) + ENTITY_FLOATS, layout.buffer_total_floats);
    }

    #[test]
    fn header_fields_fit() {
        assert!(HEADER_EVENT_COUNT < HEADER_FLOATS);
    }
}
