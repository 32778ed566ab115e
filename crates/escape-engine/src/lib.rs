pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, GameStatus};
pub use api::types::{EntityId, GameEvent};
pub use assets::layout::{LayoutError, LevelLayout};
pub use bridge::protocol::ProtocolLayout;
pub use components::bounds::Aabb;
pub use components::entity::{EntityKind, EntityRef};
pub use components::exit::Exit;
pub use components::obstacle::{Axis, Motion, MovementProfile, Obstacle};
pub use components::player::Player;
pub use components::room::Room;
pub use crate::core::scene::Scene;
pub use crate::core::state::{GameState, Phase};
pub use crate::core::time::{Clock, FixedStep, ManualClock};
pub use input::bindings::{Direction, Key};
pub use input::held::HeldDirections;
pub use input::queue::{Command, InputEvent, InputQueue};
pub use renderer::camera::FollowCamera;
pub use renderer::instance::{EntityInstance, SnapshotBuffer};
pub use systems::animation::tick_obstacles;
pub use systems::collision::{
    resolve_player, CollisionReport, FirstMatchResolution, ObstacleContact, ResolutionPolicy,
};
pub use systems::physics::{apply_jump, integrate_player};
pub use systems::render::{write_snapshot, FrameHeader};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::core::time::SystemClock;
