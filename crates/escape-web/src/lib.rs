pub mod clock;
pub mod runner;

pub use clock::DateClock;
pub use escape_engine;
pub use runner::GameRunner;

/// Expand to the browser-facing API of a game.
///
/// The runner lives in a `thread_local!` (wasm-bindgen cannot export generic types), and every
/// export reaches it through `with_runner`. Call it once from the game crate root:
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::EscapeGame;
///
/// escape_web::export_game!(EscapeGame, "rabbit-escape");
/// ```
///
/// `$game_type` must implement `escape_engine::Game` and provide `new()`; `$game_name` only
/// appears in the startup log line.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type, $crate::DateClock>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::GameRunner<$game_type, $crate::DateClock>) -> R,
        ) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game, $crate::DateClock);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        #[wasm_bindgen]
        pub fn game_key_down(code: &str) {
            with_runner(|r| {
                r.key_down(code);
            });
        }

        #[wasm_bindgen]
        pub fn game_key_up(code: &str) {
            with_runner(|r| {
                r.key_up(code);
            });
        }

        #[wasm_bindgen]
        pub fn game_start() {
            with_runner(|r| r.command($crate::escape_engine::Command::Start));
        }

        #[wasm_bindgen]
        pub fn game_restart() {
            with_runner(|r| r.command($crate::escape_engine::Command::Restart));
        }

        #[wasm_bindgen]
        pub fn game_load_layout(json: &str) -> bool {
            with_runner(|r| r.load_layout(json).is_ok())
        }

        // Snapshot, events and status

        #[wasm_bindgen]
        pub fn get_snapshot_ptr() -> *const f32 {
            with_runner(|r| r.snapshot_ptr())
        }

        #[wasm_bindgen]
        pub fn get_snapshot_len() -> u32 {
            with_runner(|r| r.snapshot_len())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn get_max_entities() -> u32 {
            with_runner(|r| r.max_entities())
        }

        #[wasm_bindgen]
        pub fn get_camera_view() -> Vec<f32> {
            with_runner(|r| r.camera_view().to_vec())
        }

        #[wasm_bindgen]
        pub fn get_phase() -> u32 {
            with_runner(|r| r.status().phase as u32)
        }

        #[wasm_bindgen]
        pub fn get_elapsed_seconds() -> f64 {
            with_runner(|r| r.status().elapsed_seconds)
        }
    };
}
