use crate::api::types::EntityId;
use crate::assets::layout::LevelLayout;
use crate::components::bounds::Aabb;
use crate::components::entity::EntityRef;
use crate::components::exit::Exit;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::room::Room;

/// Authoritative entity store: the room, the player, the obstacles and the exit.
///
/// Systems borrow it for the duration of one tick; nothing else keeps copies of entities.
#[derive(Debug, Clone)]
pub struct Scene {
    pub room: Room,
    pub player: Player,
    /// Fixed for a session. Store order is the collision resolution order.
    pub obstacles: Vec<Obstacle>,
    pub exit: Exit,
}

impl Scene {
    /// Build a scene from a (validated) layout. The player starts at the origin.
    pub fn from_layout(layout: &LevelLayout) -> Self {
        let obstacles = layout
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, desc)| {
                let id = EntityId::obstacle(i);
                match desc.motion {
                    Some(profile) => {
                        Obstacle::moving(id, desc.position, desc.half_extents, profile)
                    }
                    None => Obstacle::fixed(id, desc.position, desc.half_extents),
                }
            })
            .collect();

        Self {
            room: Room {
                x_min: layout.room.x_min,
                x_max: layout.room.x_max,
                z_min: layout.room.z_min,
                z_max: layout.room.z_max,
            },
            player: Player::new(layout.player_half_extents),
            obstacles,
            exit: Exit::new(Aabb::new(layout.exit.position, layout.exit.half_extents)),
        }
    }

    /// Get a view of an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<EntityRef<'_>> {
        match id {
            EntityId::ROOM => Some(EntityRef::Room(&self.room)),
            EntityId::PLAYER => Some(EntityRef::Player(&self.player)),
            EntityId::EXIT => Some(EntityRef::Exit(&self.exit)),
            _ => self
                .obstacles
                .iter()
                .find(|o| o.id == id)
                .map(EntityRef::Obstacle),
        }
    }

    /// Get a mutable reference to an obstacle by ID.
    pub fn obstacle_mut(&mut self, id: EntityId) -> Option<&mut Obstacle> {
        self.obstacles.iter_mut().find(|o| o.id == id)
    }

    /// Iterate over all entities: room, player, exit, then obstacles in store order.
    pub fn iter(&self) -> impl Iterator<Item = EntityRef<'_>> {
        [
            EntityRef::Room(&self.room),
            EntityRef::Player(&self.player),
            EntityRef::Exit(&self.exit),
        ]
        .into_iter()
        .chain(self.obstacles.iter().map(EntityRef::Obstacle))
    }

    /// Number of entities, room included.
    pub fn len(&self) -> usize {
        3 + self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_layout(&LevelLayout::reference())
    }
}
