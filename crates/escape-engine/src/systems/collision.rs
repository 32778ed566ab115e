//! Collision resolver: player against obstacles, room bounds, floor and exit.
//!
//! Runs once per tick after integration and obstacle animation. Obstacle handling goes
//! through a [`ResolutionPolicy`]; the room, floor and exit checks always run.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::room::FLOOR_Y;
use crate::core::scene::Scene;

/// Contact with a single obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleContact {
    /// Feet inside the landing window; the player now stands on the top face.
    Landed(EntityId),
    /// Side or overhead contact. Vertical state is left alone.
    Blocked(EntityId),
}

impl ObstacleContact {
    pub fn id(&self) -> EntityId {
        match self {
            ObstacleContact::Landed(id) | ObstacleContact::Blocked(id) => *id,
        }
    }
}

/// Strategy for resolving the player against the obstacle list.
pub trait ResolutionPolicy {
    fn resolve_obstacles(
        &self,
        player: &mut Player,
        obstacles: &[Obstacle],
        landing_tolerance: f32,
    ) -> Option<ObstacleContact>;
}

/// Visit obstacles in store order and stop at the first contact.
///
/// A player overlapping two obstacles in the same tick is resolved against the first
/// one only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatchResolution;

impl ResolutionPolicy for FirstMatchResolution {
    fn resolve_obstacles(
        &self,
        player: &mut Player,
        obstacles: &[Obstacle],
        landing_tolerance: f32,
    ) -> Option<ObstacleContact> {
        for obstacle in obstacles {
            if lands_on(player, obstacle, landing_tolerance) {
                player.land(obstacle.bounds.top());
                return Some(ObstacleContact::Landed(obstacle.id));
            }
            if blocked_by(player, obstacle) {
                return Some(ObstacleContact::Blocked(obstacle.id));
            }
        }
        None
    }
}

/// Footprints overlap and the feet are between just under the obstacle's center
/// height and its top face.
pub fn lands_on(player: &Player, obstacle: &Obstacle, landing_tolerance: f32) -> bool {
    let b = &obstacle.bounds;
    player.bounds().footprint_overlaps(b)
        && player.pos.y > b.center.y - landing_tolerance
        && player.pos.y <= b.top()
}

/// Footprints overlap and the vertical spans intersect.
pub fn blocked_by(player: &Player, obstacle: &Obstacle) -> bool {
    let b = &obstacle.bounds;
    player.bounds().footprint_overlaps(b)
        && player.pos.y + player.height() > b.bottom()
        && player.pos.y < b.top()
}

/// What the resolver found and did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionReport {
    pub obstacle: Option<ObstacleContact>,
    /// Player's (x, z) left the room.
    pub out_of_bounds: bool,
    /// Player was clamped to the floor.
    pub on_floor: bool,
    /// Horizontal position was rolled back to the pre-move position.
    pub reverted: bool,
    /// Player overlaps the exit volume.
    pub reached_exit: bool,
}

impl CollisionReport {
    pub fn collided(&self) -> bool {
        self.obstacle.is_some() || self.out_of_bounds || self.on_floor
    }
}

/// Resolve the player against everything in the scene.
///
/// Order: obstacles (via `policy`), room bounds, floor, grounding, horizontal rollback, exit.
/// The player is grounded only if it landed on an obstacle or the floor this tick. The
/// rollback only fires for an airborne, ungrounded player; a grounded player keeps the
/// integrated position.
pub fn resolve_player<P: ResolutionPolicy + ?Sized>(
    policy: &P,
    scene: &mut Scene,
    old_pos: Vec3,
    landing_tolerance: f32,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let player = &mut scene.player;

    report.obstacle = policy.resolve_obstacles(player, &scene.obstacles, landing_tolerance);
    report.out_of_bounds = !scene.room.contains(player.pos);

    if player.pos.y <= FLOOR_Y {
        player.land(FLOOR_Y);
        report.on_floor = true;
    }

    let supported =
        report.on_floor || matches!(report.obstacle, Some(ObstacleContact::Landed(_)));
    if !supported {
        player.grounded = false;
    }

    if report.collided() && player.pos.y > FLOOR_Y && !player.grounded {
        player.pos.x = old_pos.x;
        player.pos.z = old_pos.z;
        report.reverted = true;
    }

    report.reached_exit = scene.exit.triggered_by(&player.bounds());
    report
}
