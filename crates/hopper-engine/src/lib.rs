pub mod api;
pub mod core;
pub mod input;
pub mod level;
pub mod physics;
pub mod render;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{event_kind, GameEvent};
pub use crate::core::time::{FixedTimestep, FrameStepper};
pub use input::{custom, Direction, InputEvent, InputQueue, InputState};
pub use level::{Level, LevelData, LevelError, PointDesc, RectDesc};
pub use physics::{
    Brake, BodyKind, ConfigError, Features, PhysicsConfig, Pickup, Player, PlayerState,
    Rect, RespawnCause, StaticBody, Variant, World, WorldEvent,
};
pub use render::{draw_world, Color, DrawCommand, DrawList, ImageId, Palette, RenderAdapter, View};
pub use session::{
    PlatformerGame, Screen, SelectionStore, MemoryStore, StartupRoute, StoreError,
    startup_route, remember_selection, forget_selection, PLAYER_IMAGE_KEY,
};
