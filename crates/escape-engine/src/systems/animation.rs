//! Obstacle animator: moves obstacles that carry a movement profile.

use crate::components::obstacle::Motion;
use crate::core::scene::Scene;

/// Advance every moving obstacle by one tick of ping-pong motion.
/// Static obstacles are untouched. Returns how many obstacles reversed direction.
pub fn tick_obstacles(scene: &mut Scene) -> usize {
    let mut flips = 0;
    for obstacle in scene.obstacles.iter_mut() {
        if let Motion::Moving(profile) = &mut obstacle.motion {
            if profile.advance(&mut obstacle.bounds.center) {
                flips += 1;
                log::debug!(
                    "obstacle {} reversed at {:?}",
                    obstacle.id.0,
                    obstacle.bounds.center
                );
            }
        }
    }
    flips
}
