use hopper_engine::{SelectionStore, StoreError};

/// `window.localStorage` as a [`SelectionStore`].
///
/// Private browsing and sandboxed frames can deny storage; the store then
/// reads as empty and rejects writes.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, hero selection will not persist");
        }
        Self { storage }
    }
}

impl SelectionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Rejected {
            key: key.to_owned(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StoreError::Rejected {
            key: key.to_owned(),
            reason: format!("{:?}", e),
        })
    }
}
