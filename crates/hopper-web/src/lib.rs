pub mod canvas;
pub mod runner;
pub mod storage;

use std::fmt::Display;

use wasm_bindgen::JsValue;

pub use canvas::CanvasRenderer;
pub use runner::GameRunner;
pub use storage::LocalStore;

/// Wrap any displayable error as a JS `Error` so it throws on the page.
pub fn js_error(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Panic messages and `log` output go to the browser console.
pub fn install_console_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // Already installed when the page re-initializes; keep the first logger.
    let _ = console_log::init_with_level(level);
}

/// Numeric startup route handed to the page.
pub fn route_code(route: &hopper_engine::StartupRoute) -> u32 {
    match route {
        hopper_engine::StartupRoute::SelectPlayer => 0,
        hopper_engine::StartupRoute::Resume { .. } => 1,
        hopper_engine::StartupRoute::DefaultHero => 2,
    }
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers,
///   hero selection, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use hopper_engine::*;
///
/// hopper_web::export_game!(PlatformerGame, build_game(), "platformer");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `hopper_engine::Game`
/// - `$ctor`: Expression evaluating to `Result<$game_type, E>` with `E: Display`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $ctor:expr, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type, $crate::CanvasRenderer>>> =
                RefCell::new(None);
        }

        fn with_runner<R>(
            f: impl FnOnce(&mut $crate::GameRunner<$game_type, $crate::CanvasRenderer>) -> R,
        ) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("game not initialized, call game_init() first");
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init(canvas_id: &str) -> Result<(), JsValue> {
            $crate::install_console_logging(log::Level::Info);

            let surface = $crate::CanvasRenderer::from_canvas_id(canvas_id)?;
            let game: $game_type = ($ctor).map_err($crate::js_error)?;
            let runner = $crate::GameRunner::new(game, surface);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_control_down(control: u32) {
            with_runner(|r| r.push_input(InputEvent::ControlDown { control }));
        }

        #[wasm_bindgen]
        pub fn game_control_up(control: u32) {
            with_runner(|r| r.push_input(InputEvent::ControlUp { control }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| {
                r.surface_mut().resize(width as u32, height as u32);
                r.resize(width, height);
            });
        }

        #[wasm_bindgen]
        pub fn game_pause() {
            with_runner(|r| r.pause());
        }

        #[wasm_bindgen]
        pub fn game_resume() {
            with_runner(|r| r.resume());
        }

        // ---- Hero selection ----

        /// 0 = show selection, 1 = resume stored hero, 2 = built-in hero.
        #[wasm_bindgen]
        pub fn game_startup_route() -> u32 {
            let store = $crate::LocalStore::open();
            let selection = with_runner(|r| r.player_selection()).unwrap_or(true);
            $crate::route_code(&startup_route(&store, selection))
        }

        #[wasm_bindgen]
        pub fn game_stored_image() -> Option<String> {
            match startup_route(&$crate::LocalStore::open(), true) {
                StartupRoute::Resume { image_src } => Some(image_src),
                _ => None,
            }
        }

        #[wasm_bindgen]
        pub fn game_select_player(image_src: &str) -> Result<(), JsValue> {
            let mut store = $crate::LocalStore::open();
            remember_selection(&mut store, image_src)
                .map(|_| ())
                .map_err($crate::js_error)
        }

        #[wasm_bindgen]
        pub fn game_forget_player() -> Result<(), JsValue> {
            let mut store = $crate::LocalStore::open();
            forget_selection(&mut store).map_err($crate::js_error)?;
            with_runner(|r| {
                r.push_input(InputEvent::Custom {
                    kind: custom::CHANGE_HERO,
                    a: 0.0,
                    b: 0.0,
                    c: 0.0,
                })
            });
            Ok(())
        }

        /// Hand over the loaded hero image and leave the selection screen.
        #[wasm_bindgen]
        pub fn game_start(image: web_sys::HtmlImageElement) {
            with_runner(|r| {
                let id = r.surface_mut().register_image(image);
                r.push_input(InputEvent::Custom {
                    kind: custom::START,
                    a: id.0 as f32,
                    b: 0.0,
                    c: 0.0,
                });
            });
        }

        #[wasm_bindgen]
        pub fn game_asset_failed() {
            with_runner(|r| {
                r.push_input(InputEvent::Custom {
                    kind: custom::ASSET_FAILED,
                    a: 0.0,
                    b: 0.0,
                    c: 0.0,
                })
            });
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
