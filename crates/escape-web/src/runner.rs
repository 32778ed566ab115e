use escape_engine::{
    write_snapshot, Clock, Command, EngineContext, FixedStep, FrameHeader, Game, GameConfig,
    GameEvent, GameStatus, InputEvent, InputQueue, LayoutError, LevelLayout, ProtocolLayout,
    Scene, SnapshotBuffer,
};

/// Drives a [`Game`] from host frames: samples the clock, feeds queued input, runs one fixed
/// step per [`GameRunner::tick`] and keeps the snapshot current.
///
/// `export_game!` stores one of these per WASM instance; tests drive it with a `ManualClock`.
pub struct GameRunner<G: Game, C: Clock> {
    game: G,
    clock: C,
    ctx: EngineContext,
    input: InputQueue,
    step: FixedStep,
    config: GameConfig,
    layout: ProtocolLayout,
    snapshot: SnapshotBuffer,
    initialized: bool,
}

impl<G: Game, C: Clock> GameRunner<G, C> {
    pub fn new(game: G, clock: C) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            clock,
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            step: FixedStep::new(config.fixed_dt),
            snapshot: SnapshotBuffer::with_capacity(layout.buffer_total_floats),
            layout,
            config,
            initialized: false,
        }
    }

    /// Let the game build its scene and write the first snapshot.
    pub fn init(&mut self) {
        self.ctx.begin_frame(self.clock.now_ms(), self.config.fixed_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_snapshot();
    }

    /// Queue an event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue a key event from a DOM key code. Returns false for unbound codes.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.push_key(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.push_key(code, false)
    }

    pub fn command(&mut self, command: Command) {
        self.input.push(InputEvent::Command(command));
    }

    /// Replace the level from a JSON layout. A rejected layout leaves the current one in place.
    pub fn load_layout(&mut self, json: &str) -> Result<(), LayoutError> {
        let layout = match LevelLayout::from_json(json) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("Layout rejected: {}", e);
                return Err(e);
            }
        };
        self.game.load_layout(&mut self.ctx, &layout);
        log::info!("Layout loaded ({} obstacles)", layout.obstacles.len());
        self.rebuild_snapshot();
        Ok(())
    }

    /// Run one frame: one fixed update, then rebuild the snapshot.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Events only live for the frame that emitted them
        self.ctx.clear_frame_data();

        let dt = self.step.advance();
        self.ctx.begin_frame(self.clock.now_ms(), dt);
        self.game.update(&mut self.ctx, &self.input);

        self.input.drain();

        self.rebuild_snapshot();
    }

    fn rebuild_snapshot(&mut self) {
        let header = FrameHeader {
            frame: self.step.ticks(),
            status: self.game.status(),
            event_count: self.ctx.events.len(),
        };
        write_snapshot(
            &mut self.snapshot,
            &self.layout,
            &self.ctx.scene,
            &self.ctx.camera,
            &header,
        );
    }

    // ---- Read accessors ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn scene(&self) -> &Scene {
        &self.ctx.scene
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn snapshot(&self) -> &[f32] {
        self.snapshot.as_slice()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn frame(&self) -> u64 {
        self.step.ticks()
    }

    /// Column-major view matrix of the follow camera, for the host's renderer.
    pub fn camera_view(&self) -> [f32; 16] {
        self.ctx.camera.view_matrix().to_cols_array()
    }

    // ---- Pointer accessors for reads out of WASM memory ----

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr()
    }

    pub fn snapshot_len(&self) -> u32 {
        self.snapshot.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn max_entities(&self) -> u32 {
        self.layout.max_entities as u32
    }
}
