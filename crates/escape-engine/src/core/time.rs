use std::cell::Cell;

/// Source of wall-clock timestamps for the run timer.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch.
    fn now_ms(&self) -> f64;
}

/// Clock advanced by hand. Used by tests and headless replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Monotonic host clock. Not available on wasm32, where `Date.now()` is used instead.
#[cfg(not(target_arch = "wasm32"))]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Fixed logical timestep: exactly one simulation step per frame callback.
///
/// The step length does not depend on measured frame time, so simulation speed
/// follows the display rate.
pub struct FixedStep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Ticks taken so far.
    ticks: u64,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self { dt, ticks: 0 }
    }

    /// Count one frame and return the logical delta to simulate.
    pub fn advance(&mut self) -> f32 {
        self.ticks += 1;
        self.dt
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
