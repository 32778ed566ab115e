//! Player integrator: gravity, held-direction movement and jumps.
//!
//! No clamping happens here; the collision resolver corrects the result afterwards
//! using the pre-move position this step returns.

use glam::Vec3;

use crate::api::game::GameConfig;
use crate::components::player::Player;
use crate::input::held::HeldDirections;

/// Advance the player by one tick of `dt` seconds. Returns the pre-move position.
///
/// Gravity is applied unconditionally, even when grounded; the resolver re-asserts
/// grounding every tick. Forward movement decreases z.
pub fn integrate_player(
    player: &mut Player,
    held: &HeldDirections,
    config: &GameConfig,
    dt: f32,
) -> Vec3 {
    let old_pos = player.pos;

    player.velocity.y -= config.gravity * dt;

    let intent = held.intent();
    player.pos.x += intent.x * config.move_speed * dt;
    player.pos.z -= intent.y * config.move_speed * dt;

    player.pos.y += player.velocity.y * dt;

    old_pos
}

/// Handle a jump press. Only grounded players jump; airborne presses are dropped.
pub fn apply_jump(player: &mut Player, config: &GameConfig) -> bool {
    let jumped = player.try_jump(config.jump_force);
    if jumped {
        log::debug!("jump from y={:.2}", player.pos.y);
    }
    jumped
}
