pub mod runner;

pub use runner::GameRunner;
pub use tilehop;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates the `thread_local!` storage for the GameRunner, a
/// `with_runner()` helper and every export the host page calls: init, level
/// loading, tick, input handlers and data accessors.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// tilehop_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `tilehop::Game` and
///   has a `new()` constructor
/// - `$game_name`: A string literal used in log messages
///
/// Exports called before `game_init()` are no-ops that return zero values.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        use $crate::tilehop::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let Some(runner) = borrow.as_mut() else {
                    log::warn!("{}: call game_init() first", $game_name);
                    return None;
                };
                Some(f(runner))
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::new(game);
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        /// Build the level from asset texts fetched by the host.
        #[wasm_bindgen]
        pub fn game_load_level(
            manifest_json: &str,
            legend_json: &str,
            level_text: &str,
        ) -> Result<(), JsError> {
            let loaded = with_runner(|r| r.load_assets(manifest_json, legend_json, level_text))
                .ok_or_else(|| JsError::new("game not initialized"))?;
            loaded.map_err(|err| {
                log::error!("{}: level load failed: {}", $game_name, err);
                JsError::new(&err.to_string())
            })
        }

        #[wasm_bindgen]
        pub fn game_is_loaded() -> bool {
            with_runner(|r| r.is_loaded()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            let _ = with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            let _ = with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            let _ = with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            let _ = with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            let _ = with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            let _ = with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_frame_len() -> u32 {
            with_runner(|r| r.frame_len()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_atlas_split() -> u32 {
            with_runner(|r| r.atlas_split()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or_default()
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or_default()
        }
    };
}
