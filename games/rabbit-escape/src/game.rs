//! Rabbit Escape - walk the room, hop the barrier, reach the exit as fast as possible.
//! Each tick: integrate the player, slide the platforms, then resolve collisions.

use escape_engine::{
    apply_jump, integrate_player, resolve_player, tick_obstacles, Command, EngineContext,
    FirstMatchResolution, Game, GameConfig, GameEvent, GameState, GameStatus, HeldDirections,
    InputEvent, InputQueue, Key, LevelLayout, Scene,
};

pub struct EscapeGame {
    config: GameConfig,
    state: GameState,
    held: HeldDirections,
    policy: FirstMatchResolution,
}

impl EscapeGame {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            state: GameState::new(),
            held: HeldDirections::default(),
            policy: FirstMatchResolution,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start or restart a run: player back at the origin, keys released.
    fn begin_run(&mut self, ctx: &mut EngineContext, restart: bool) {
        let now = ctx.now_ms;
        let accepted = if restart {
            self.state.restart(now)
        } else {
            self.state.start(now)
        };
        if !accepted {
            log::debug!(
                "{} ignored in {:?}",
                if restart { "restart" } else { "start" },
                self.state.phase()
            );
            return;
        }

        ctx.scene.player.reset();
        self.held.clear();
        ctx.camera.follow(ctx.scene.player.pos);
        ctx.emit_event(GameEvent::started(restart));
        log::info!("Run {}", if restart { "restarted" } else { "started" });
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Command(Command::Start) => self.begin_run(ctx, false),
                InputEvent::Command(Command::Restart) => self.begin_run(ctx, true),
                // Keys only count during a run
                _ if !self.state.is_playing() => {}
                InputEvent::KeyDown(Key::Move(direction)) => self.held.set(direction, true),
                InputEvent::KeyUp(Key::Move(direction)) => self.held.set(direction, false),
                InputEvent::KeyDown(Key::Jump) => {
                    apply_jump(&mut ctx.scene.player, &self.config);
                }
                InputEvent::KeyUp(Key::Jump) => {}
            }
        }
    }
}

impl Default for EscapeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for EscapeGame {
    fn config(&self) -> GameConfig {
        self.config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.scene = Scene::from_layout(&LevelLayout::reference());
        ctx.camera.follow(ctx.scene.player.pos);
        log::info!("Rabbit Escape ready: {} obstacles", ctx.scene.obstacles.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        if !self.state.is_playing() {
            return;
        }

        let now = ctx.now_ms;
        self.state.update_elapsed(now);

        let old_pos = integrate_player(&mut ctx.scene.player, &self.held, &self.config, ctx.dt);
        tick_obstacles(&mut ctx.scene);
        let report = resolve_player(
            &self.policy,
            &mut ctx.scene,
            old_pos,
            self.config.landing_tolerance,
        );

        if report.reached_exit && self.state.win(now) {
            ctx.emit_event(GameEvent::won(self.state.elapsed_seconds()));
            log::info!("Exit reached in {}s", self.state.elapsed_whole_seconds());
        }

        ctx.camera.follow(ctx.scene.player.pos);
    }

    fn status(&self) -> GameStatus {
        GameStatus {
            phase: self.state.phase(),
            elapsed_seconds: self.state.elapsed_seconds(),
        }
    }

    fn load_layout(&mut self, ctx: &mut EngineContext, layout: &LevelLayout) {
        self.state.reset();
        self.held.clear();
        ctx.scene = Scene::from_layout(layout);
        ctx.camera.follow(ctx.scene.player.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_engine::api::types::event_kind;
    use escape_engine::Phase;
    use glam::Vec3;

    const EPSILON: f32 = 1e-4;

    fn setup() -> (EscapeGame, EngineContext) {
        let mut game = EscapeGame::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    /// One frame at wall time `now_ms` with the given queued input.
    fn frame(game: &mut EscapeGame, ctx: &mut EngineContext, now_ms: f64, input: &InputQueue) {
        ctx.clear_frame_data();
        ctx.begin_frame(now_ms, 1.0 / 60.0);
        game.update(ctx, input);
    }

    fn idle_frame(game: &mut EscapeGame, ctx: &mut EngineContext, now_ms: f64) {
        frame(game, ctx, now_ms, &InputQueue::new());
    }

    fn command(command: Command) -> InputQueue {
        let mut input = InputQueue::new();
        input.push(InputEvent::Command(command));
        input
    }

    fn keys(codes: &[(&str, bool)]) -> InputQueue {
        let mut input = InputQueue::new();
        for (code, down) in codes {
            assert!(input.push_key(code, *down));
        }
        input
    }

    fn started(game: &mut EscapeGame, ctx: &mut EngineContext, now_ms: f64) {
        frame(game, ctx, now_ms, &command(Command::Start));
        assert_eq!(game.state().phase(), Phase::Playing);
    }

    #[test]
    fn idle_ignores_keys_and_freezes_world() {
        let (mut game, mut ctx) = setup();
        frame(&mut game, &mut ctx, 0.0, &keys(&[("KeyW", true), ("Space", true)]));

        assert_eq!(game.state().phase(), Phase::Idle);
        assert_eq!(ctx.scene.player.pos, Vec3::ZERO);
        assert_eq!(ctx.scene.obstacles[8].bounds.center.x, 0.0);

        // The held W from Idle must not leak into the run
        started(&mut game, &mut ctx, 0.0);
        idle_frame(&mut game, &mut ctx, 16.0);
        assert_eq!(ctx.scene.player.pos, Vec3::ZERO);
    }

    #[test]
    fn start_emits_event_once() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, event_kind::STARTED);
        assert_eq!(ctx.events[0].a, 0.0);

        // Second start while playing keeps the original start time
        frame(&mut game, &mut ctx, 3000.0, &command(Command::Start));
        assert!(ctx.events.is_empty());
        assert!((game.state().elapsed_seconds() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn restart_needs_won() {
        let (mut game, mut ctx) = setup();
        frame(&mut game, &mut ctx, 0.0, &command(Command::Restart));
        assert_eq!(game.state().phase(), Phase::Idle);

        started(&mut game, &mut ctx, 0.0);
        frame(&mut game, &mut ctx, 500.0, &command(Command::Restart));
        assert!(ctx.events.is_empty());
        assert_eq!(game.state().phase(), Phase::Playing);
    }

    #[test]
    fn elapsed_never_decreases() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        idle_frame(&mut game, &mut ctx, 1500.0);
        assert!((game.state().elapsed_seconds() - 1.5).abs() < 1e-9);

        idle_frame(&mut game, &mut ctx, 1000.0);
        assert!((game.state().elapsed_seconds() - 1.5).abs() < 1e-9);
        assert_eq!(game.state().elapsed_whole_seconds(), 1);
    }

    #[test]
    fn walking_into_exit_wins_and_freezes() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        ctx.scene.player.pos = Vec3::new(8.0, 0.0, 9.2);

        frame(&mut game, &mut ctx, 12_345.0, &keys(&[("KeyS", true)]));

        assert_eq!(game.state().phase(), Phase::Won);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, event_kind::WON);
        assert_eq!(ctx.events[0].a, 12.0);
        assert_eq!(game.status().phase, Phase::Won);

        // Frozen: no timer, no movement, no input
        let pos = ctx.scene.player.pos;
        frame(&mut game, &mut ctx, 20_000.0, &keys(&[("KeyW", true)]));
        assert!((game.state().elapsed_seconds() - 12.345).abs() < 1e-9);
        assert_eq!(ctx.scene.player.pos, pos);
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn restart_after_win_resets_player() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        ctx.scene.player.pos = Vec3::new(8.0, 0.0, 9.2);
        frame(&mut game, &mut ctx, 4000.0, &keys(&[("KeyS", true)]));
        assert_eq!(game.state().phase(), Phase::Won);

        frame(&mut game, &mut ctx, 5000.0, &command(Command::Restart));

        assert_eq!(game.state().phase(), Phase::Playing);
        assert_eq!(ctx.events[0].kind, event_kind::STARTED);
        assert_eq!(ctx.events[0].a, 1.0);
        assert_eq!(game.state().elapsed_seconds(), 0.0);
        // S was still held at the win; it must be released by the restart
        assert_eq!(ctx.scene.player.pos, Vec3::ZERO);
        assert!(ctx.scene.player.grounded);
    }

    #[test]
    fn resting_on_box_stays_on_top() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        ctx.scene.player.pos = Vec3::new(-5.0, 2.0, -5.0);
        ctx.scene.player.velocity = Vec3::ZERO;

        for i in 0..120 {
            idle_frame(&mut game, &mut ctx, 16.0 * i as f64);
            assert_eq!(ctx.scene.player.pos.y, 2.0);
            assert!(ctx.scene.player.grounded);
        }
    }

    #[test]
    fn walking_off_box_cannot_jump_midair() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        ctx.scene.player.pos = Vec3::new(-5.0, 2.0, -5.0);
        ctx.scene.player.velocity = Vec3::ZERO;

        frame(&mut game, &mut ctx, 16.0, &keys(&[("KeyD", true)]));
        for i in 1..13 {
            idle_frame(&mut game, &mut ctx, 16.0 + 16.0 * i as f64);
        }

        // Past the box edge and dropping
        let player = &ctx.scene.player;
        assert!(player.pos.x > -3.5);
        assert!(player.pos.y < 2.0 && player.pos.y > 0.0);
        assert!(!player.grounded);
        assert!(!player.jumping);

        let vy = ctx.scene.player.velocity.y;
        frame(&mut game, &mut ctx, 240.0, &keys(&[("Space", true)]));
        assert!((ctx.scene.player.velocity.y - (vy - 0.5)).abs() < EPSILON);
        assert!(!ctx.scene.player.jumping);
    }

    #[test]
    fn jump_arcs_and_lands() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);

        frame(&mut game, &mut ctx, 16.0, &keys(&[("Space", true)]));
        assert!(ctx.scene.player.pos.y > 0.0);
        assert!(ctx.scene.player.jumping);
        assert!(!ctx.scene.player.grounded);

        // A second press mid-air does not relaunch
        let vy = ctx.scene.player.velocity.y;
        frame(&mut game, &mut ctx, 32.0, &keys(&[("Space", true)]));
        assert!((ctx.scene.player.velocity.y - (vy - 0.5)).abs() < EPSILON);

        for i in 0..60 {
            idle_frame(&mut game, &mut ctx, 48.0 + 16.0 * i as f64);
            let player = &ctx.scene.player;
            assert!(!(player.jumping && player.grounded));
        }
        assert_eq!(ctx.scene.player.pos.y, 0.0);
        assert!(ctx.scene.player.grounded);
        assert!(!ctx.scene.player.jumping);
    }

    #[test]
    fn held_direction_moves_player() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);

        frame(&mut game, &mut ctx, 16.0, &keys(&[("ArrowRight", true)]));
        assert!((ctx.scene.player.pos.x - 10.0 / 60.0).abs() < EPSILON);

        frame(&mut game, &mut ctx, 32.0, &keys(&[("ArrowRight", false), ("KeyW", true)]));
        assert!((ctx.scene.player.pos.x - 10.0 / 60.0).abs() < EPSILON);
        assert!((ctx.scene.player.pos.z + 10.0 / 60.0).abs() < EPSILON);
    }

    #[test]
    fn platform_slides_while_playing() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);
        assert!((ctx.scene.obstacles[8].bounds.center.x - 0.03).abs() < EPSILON);

        idle_frame(&mut game, &mut ctx, 16.0);
        assert!((ctx.scene.obstacles[8].bounds.center.x - 0.06).abs() < EPSILON);
    }

    #[test]
    fn new_layout_resets_to_idle() {
        let (mut game, mut ctx) = setup();
        started(&mut game, &mut ctx, 0.0);

        let mut layout = LevelLayout::reference();
        layout.obstacles.clear();
        game.load_layout(&mut ctx, &layout);

        assert_eq!(game.state().phase(), Phase::Idle);
        assert!(ctx.scene.obstacles.is_empty());
        assert_eq!(ctx.scene.player.pos, Vec3::ZERO);
    }
}
