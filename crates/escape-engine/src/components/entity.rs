use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::exit::Exit;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::room::Room;

/// Closed set of entity kinds, as written to the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EntityKind {
    Player = 0,
    StaticObstacle = 1,
    MovingObstacle = 2,
    Exit = 3,
    Room = 4,
}

impl EntityKind {
    pub fn code(self) -> f32 {
        self as u8 as f32
    }
}

/// Borrowed view of one entity in the scene.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Room(&'a Room),
    Player(&'a Player),
    Obstacle(&'a Obstacle),
    Exit(&'a Exit),
}

impl EntityRef<'_> {
    pub fn id(&self) -> EntityId {
        match self {
            EntityRef::Room(_) => EntityId::ROOM,
            EntityRef::Player(_) => EntityId::PLAYER,
            EntityRef::Obstacle(o) => o.id,
            EntityRef::Exit(e) => e.id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Room(_) => EntityKind::Room,
            EntityRef::Player(_) => EntityKind::Player,
            EntityRef::Obstacle(o) if o.is_moving() => EntityKind::MovingObstacle,
            EntityRef::Obstacle(_) => EntityKind::StaticObstacle,
            EntityRef::Exit(_) => EntityKind::Exit,
        }
    }

    /// Anchor position handed to renderers. The player reports its feet point.
    pub fn position(&self) -> Vec3 {
        match self {
            EntityRef::Room(r) => r.center(),
            EntityRef::Player(p) => p.pos,
            EntityRef::Obstacle(o) => o.bounds.center,
            EntityRef::Exit(e) => e.bounds.center,
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        match self {
            EntityRef::Room(r) => r.half_extents(),
            EntityRef::Player(p) => p.half_extents,
            EntityRef::Obstacle(o) => o.bounds.half,
            EntityRef::Exit(e) => e.bounds.half,
        }
    }
}
