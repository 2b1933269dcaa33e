//! Domain logic for the Glowboard front end.
//!
//! Everything here is synchronous, browser-free and single-threaded:
//!
//! - [`catalog`] - filterable view-model over any [`CatalogItem`]
//! - [`feed`] - adapter from a push-based snapshot source to item lists
//! - [`favorites`] - persisted favorite ids over a key-value store
//! - [`api`] - backend endpoints, bodies, and the fetch fallback policy
//! - [`models`] - products, trends, mood-board entries
//! - [`error`] - error enums per concern

pub mod api;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod feed;
pub mod models;

pub use catalog::{Catalog, CategorySelection, FilterState, PriceBounds};
pub use error::{FeedError, FetchError, StoreError, WriteError};
pub use favorites::{Favorites, KeyValueStore};
pub use feed::{FeedQuery, FeedStatus, LiveFeed, SnapshotSource, Subscription};
pub use models::{CatalogItem, ItemId, MoodEntry, Product, Trend};
