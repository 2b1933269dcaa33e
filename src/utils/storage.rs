//! `localStorage` as a [`KeyValueStore`].

use glowboard_core::{KeyValueStore, StoreError};

use super::dom;

/// The browser's `localStorage`. Reads fail soft; writes report why they failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = dom::local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Write)
    }
}
