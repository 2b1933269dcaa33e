//! Favorites persisted as a JSON array of item ids.
//!
//! The browser app backs this with `localStorage`; tests use [`MemoryStore`].
//! Stored values that fail to parse are treated as an empty list rather than
//! an error, so a corrupted entry never blocks the page.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Deserialize;

use crate::error::StoreError;
use crate::models::ItemId;

/// One stored entry: a bare id, or a whole saved item carrying an `id`.
/// Older wishlists stored full product objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Id(ItemId),
    Item { id: ItemId },
}

impl From<StoredEntry> for ItemId {
    fn from(entry: StoredEntry) -> Self {
        match entry {
            StoredEntry::Id(id) | StoredEntry::Item { id } => id,
        }
    }
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ordered set of favorited item ids, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<ItemId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }

    /// Read the list stored under `key`. Entries may be ids or objects with
    /// an `id` field; either way only the id is kept.
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        let Some(json) = store.get_item(key) else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<StoredEntry>>(&json) {
            Ok(entries) => {
                let mut ids: Vec<ItemId> = entries.into_iter().map(ItemId::from).collect();
                // Hand-edited storage may carry duplicates.
                let mut seen = Vec::with_capacity(ids.len());
                ids.retain(|id| {
                    if seen.contains(id) {
                        false
                    } else {
                        seen.push(id.clone());
                        true
                    }
                });
                Self { ids }
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed favorites");
                Self::default()
            }
        }
    }

    /// Write the list under `key`.
    pub fn save(&self, store: &impl KeyValueStore, key: &str) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(&self.ids).map_err(|e| StoreError::Serialize(e.to_string()))?;
        store.set_item(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "makeup-wishlist";

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(ItemId::Num(3)));
        assert!(favorites.contains(&ItemId::Num(3)));
        assert!(!favorites.toggle(ItemId::Num(3)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_store_then_load_reproduces_list() {
        let store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(ItemId::Num(5));
        favorites.toggle(ItemId::from("vintage"));
        favorites.toggle(ItemId::Num(1));
        favorites.save(&store, KEY).unwrap();

        let loaded = Favorites::load(&store, KEY);
        assert_eq!(loaded, favorites);
        assert_eq!(
            loaded.iter().cloned().collect::<Vec<_>>(),
            vec![ItemId::Num(5), ItemId::from("vintage"), ItemId::Num(1)]
        );
    }

    #[test]
    fn test_stored_format_is_json_array() {
        let store = MemoryStore::new();
        let mut favorites = Favorites::new();
        favorites.toggle(ItemId::Num(2));
        favorites.toggle(ItemId::Num(7));
        favorites.save(&store, KEY).unwrap();
        assert_eq!(store.get_item(KEY).as_deref(), Some("[2,7]"));
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(Favorites::load(&store, KEY).is_empty());
    }

    #[test]
    fn test_malformed_json_loads_empty() {
        let store = MemoryStore::new();
        store.set_item(KEY, "{not json").unwrap();
        assert!(Favorites::load(&store, KEY).is_empty());
    }

    #[test]
    fn test_duplicate_ids_collapse_on_load() {
        let store = MemoryStore::new();
        store.set_item(KEY, "[1, 2, 1]").unwrap();
        let loaded = Favorites::load(&store, KEY);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_saved_product_objects_load_as_ids() {
        let store = MemoryStore::new();
        store
            .set_item(
                KEY,
                r#"[
                    {"id": 1, "name": "Velvet Matte Lipstick", "brand": "Glossier", "price": 24},
                    {"id": 4, "name": "Silk Foundation", "price": 38},
                    7
                ]"#,
            )
            .unwrap();
        let loaded = Favorites::load(&store, KEY);
        assert_eq!(
            loaded.iter().cloned().collect::<Vec<_>>(),
            vec![ItemId::Num(1), ItemId::Num(4), ItemId::Num(7)]
        );

        // Saving rewrites the list in the id-only form.
        loaded.save(&store, KEY).unwrap();
        assert_eq!(store.get_item(KEY).as_deref(), Some("[1,4,7]"));
    }

    #[test]
    fn test_object_without_id_is_malformed() {
        let store = MemoryStore::new();
        store.set_item(KEY, r#"[{"name": "Silk Foundation"}]"#).unwrap();
        assert!(Favorites::load(&store, KEY).is_empty());
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut favorites = Favorites::new();
        favorites.toggle(ItemId::Num(9));
        assert!(favorites.remove(&ItemId::Num(9)));
        assert!(!favorites.remove(&ItemId::Num(9)));
    }
}
