use crate::api::types::EntityId;
use crate::components::bounds::Aabb;

/// Trigger volume: overlapping it wins the game, it never blocks movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Exit {
    pub id: EntityId,
    pub bounds: Aabb,
}

impl Exit {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            id: EntityId::EXIT,
            bounds,
        }
    }

    pub fn triggered_by(&self, body: &Aabb) -> bool {
        self.bounds.overlaps(body)
    }
}
