pub mod game;
pub mod store;

pub use game::{PlatformerGame, Screen};
pub use store::{
    forget_selection, remember_selection, startup_route, MemoryStore, SelectionStore,
    StartupRoute, StoreError, PLAYER_IMAGE_KEY,
};
