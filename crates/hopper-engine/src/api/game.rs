use crate::api::types::GameEvent;
use crate::input::queue::InputQueue;
use crate::render::traits::RenderAdapter;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// `None`: one update per rendered frame, whatever the refresh rate.
    /// `Some(dt)`: updates run on a fixed `dt` (seconds) accumulator.
    pub fixed_dt: Option<f32>,
    /// World width in game units. Fixed for the session; resizing the
    /// surface only changes how the world is scaled onto it.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of game events kept per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: None,
            world_width: 800.0,
            world_height: 600.0,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation tick. Input events queued since the last frame are in `input`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Draw the current state. Read-only.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// Whether the page should offer a hero selection screen when nothing is stored.
    fn player_selection(&self) -> bool {
        false
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub events: Vec<GameEvent>,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
        }
    }

    /// Emit a game event to be forwarded to the page.
    /// Events past the per-frame cap are dropped with a warning.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full, dropping {:?}", event);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    pub out: &'a mut dyn RenderAdapter,
}
