use std::collections::HashMap;
use thiserror::Error;

/// Storage key holding the chosen hero image.
pub const PLAYER_IMAGE_KEY: &str = "playerImage";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key-value store is not available")]
    Unavailable,
    #[error("store rejected write to {key:?}: {reason}")]
    Rejected { key: String, reason: String },
}

/// Origin-scoped string key-value store (localStorage in the browser).
pub trait SelectionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store for tests and native runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Where the page should go once it has loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupRoute {
    /// Show the hero selection screen.
    SelectPlayer,
    /// Load this image and start playing straight away.
    Resume { image_src: String },
    /// Selection is disabled and nothing is stored: play with the built-in hero.
    DefaultHero,
}

/// Decide the startup route from what is stored.
pub fn startup_route(store: &dyn SelectionStore, selection_enabled: bool) -> StartupRoute {
    match store.get(PLAYER_IMAGE_KEY).filter(|s| !s.is_empty()) {
        Some(image_src) => StartupRoute::Resume { image_src },
        None if selection_enabled => StartupRoute::SelectPlayer,
        None => StartupRoute::DefaultHero,
    }
}

/// Persist the chosen hero and return the route that loads it.
pub fn remember_selection(
    store: &mut dyn SelectionStore,
    image_src: &str,
) -> Result<StartupRoute, StoreError> {
    store.set(PLAYER_IMAGE_KEY, image_src)?;
    log::info!("hero selected: {}", image_src);
    Ok(StartupRoute::Resume {
        image_src: image_src.to_owned(),
    })
}

/// Drop the stored hero so the next visit shows the selection screen again.
pub fn forget_selection(store: &mut dyn SelectionStore) -> Result<(), StoreError> {
    store.remove(PLAYER_IMAGE_KEY)
}
