use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque item identifier.
///
/// Backends hand out either numeric ids (static catalogs, REST endpoints) or
/// string ids (document stores). Both forms compare by value only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Anything the catalog view-model can filter.
///
/// Only the id, category, price and searchable text are interpreted;
/// every other field of the implementing type is display-only.
pub trait CatalogItem {
    /// Stable unique key within one collection.
    fn id(&self) -> ItemId;

    /// Category label, compared by equality.
    fn category(&self) -> &str;

    /// Price for commerce items. Items without a price pass every price filter.
    fn price(&self) -> Option<f64> {
        None
    }

    /// Title-like and description-like text matched by free-text search.
    fn searchable_fields(&self) -> [&str; 2];

    /// Server-assigned creation time in milliseconds, when the source has one.
    fn timestamp(&self) -> Option<f64> {
        None
    }

    /// Case-insensitive substring match against the searchable fields.
    ///
    /// `needle_lower` must already be lowercased.
    fn matches_text(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle_lower))
    }
}
