use glam::Vec3;

use crate::api::types::GameEvent;
use crate::assets::layout::LevelLayout;
use crate::core::scene::Scene;
use crate::core::state::Phase;
use crate::input::queue::InputQueue;
use crate::renderer::camera::FollowCamera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Logical timestep per frame in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Downward acceleration in units/s² (default: 30).
    pub gravity: f32,
    /// Horizontal speed in units/s (default: 10).
    pub move_speed: f32,
    /// Upward velocity set by a jump in units/s (default: 10).
    pub jump_force: f32,
    /// How far below an obstacle's center the feet may be and still land on it (default: 0.1).
    pub landing_tolerance: f32,
    /// Camera eye relative to the player (default: 3 up, 5 behind).
    pub camera_offset: Vec3,
    /// Maximum number of entity records in the snapshot (default: 64).
    pub max_entities: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            gravity: 30.0,
            move_speed: 10.0,
            jump_force: 10.0,
            landing_tolerance: 0.1,
            camera_offset: Vec3::new(0.0, 3.0, 5.0),
            max_entities: 64,
            max_events: 16,
        }
    }
}

/// The core contract a game must fulfill to be driven by a runner.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state and populate the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. Read input, advance the simulation, check win conditions.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Current phase and elapsed seconds, for the snapshot header.
    fn status(&self) -> GameStatus;

    /// Replace the level. Games that keep state tied to the scene should override this.
    fn load_layout(&mut self, ctx: &mut EngineContext, layout: &LevelLayout) {
        ctx.scene = Scene::from_layout(layout);
        ctx.camera.follow(ctx.scene.player.pos);
    }
}

/// Coarse game status exposed to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameStatus {
    pub phase: Phase,
    pub elapsed_seconds: f64,
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: FollowCamera,
    pub events: Vec<GameEvent>,
    /// Wall-clock time sampled once at the start of the frame.
    pub now_ms: f64,
    /// Logical delta for this tick.
    pub dt: f32,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        let scene = Scene::default();
        let mut camera = FollowCamera::new(config.camera_offset);
        camera.follow(scene.player.pos);
        Self {
            scene,
            camera,
            events: Vec::with_capacity(config.max_events),
            now_ms: 0.0,
            dt: config.fixed_dt,
        }
    }

    /// Stamp the frame's time inputs. Called by the runner before `Game::update`.
    pub fn begin_frame(&mut self, now_ms: f64, dt: f32) {
        self.now_ms = now_ms;
        self.dt = dt;
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
