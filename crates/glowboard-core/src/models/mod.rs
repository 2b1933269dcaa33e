//! Item types rendered by the catalog views.
//!
//! - [`CatalogItem`], [`ItemId`] - the shape the view-model filters on
//! - [`Product`] - shop catalog entries
//! - [`Trend`] - fashion trends served by the backend
//! - [`MoodEntry`], [`NewMoodEntry`] - live mood-board posts

mod item;
mod mood;
mod product;
mod trend;

pub use item::{CatalogItem, ItemId};
pub use mood::{MoodEntry, MoodKind, NewMoodEntry};
pub use product::Product;
pub use trend::{Trend, UNCATEGORIZED};
