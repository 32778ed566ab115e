/// Coarse lifecycle of a session. There is no lost state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Phase {
    #[default]
    Idle = 0,
    Playing = 1,
    Won = 2,
}

impl Phase {
    pub fn code(self) -> f32 {
        self as u8 as f32
    }
}

/// Phase and run timer.
///
/// `elapsed_seconds` is recomputed on every tick while Playing, never decreases,
/// and is frozen once the run is won.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    phase: Phase,
    start_ms: f64,
    elapsed_seconds: f64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Elapsed time as shown to the player: whole seconds, floor-rounded.
    pub fn elapsed_whole_seconds(&self) -> u64 {
        self.elapsed_seconds.floor() as u64
    }

    /// Idle/Won -> Playing. Returns false (and changes nothing) while already Playing.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.phase = Phase::Playing;
        self.start_ms = now_ms;
        self.elapsed_seconds = 0.0;
        true
    }

    /// Won -> Playing. Any other phase is ignored.
    pub fn restart(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Won {
            return false;
        }
        self.start(now_ms)
    }

    /// Refresh the timer. No-op outside Playing.
    pub fn update_elapsed(&mut self, now_ms: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        let elapsed = (now_ms - self.start_ms) / 1000.0;
        self.elapsed_seconds = self.elapsed_seconds.max(elapsed);
    }

    /// Playing -> Won, freezing the timer at `now_ms`.
    pub fn win(&mut self, now_ms: f64) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.update_elapsed(now_ms);
        self.phase = Phase::Won;
        true
    }

    /// Back to the initial phase, e.g. after the level was replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
