//! Mapping raw snapshot documents into item types.

use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::subscription::{FeedQuery, RawDocument};
use crate::error::FeedError;
use crate::models::CatalogItem;

/// Convert every document of a snapshot into `T`.
///
/// Only renaming and defaulting happen here (through `T`'s serde attributes);
/// no document is dropped. One undecodable document fails the whole snapshot.
///
/// When the query orders by timestamp, the result is stably sorted on it,
/// with documents still awaiting a server timestamp counted as newest. An
/// already ordered snapshot comes back unchanged. Any other ordering field
/// is left to upstream.
pub fn normalize<T>(docs: Vec<RawDocument>, query: &FeedQuery) -> Result<Vec<T>, FeedError>
where
    T: CatalogItem + DeserializeOwned,
{
    let mut items = docs
        .into_iter()
        .map(decode::<T>)
        .collect::<Result<Vec<_>, _>>()?;

    if query.orders_by_timestamp() {
        items.sort_by(|a, b| compare_timestamps(a.timestamp(), b.timestamp(), query.descending));
    }

    Ok(items)
}

fn decode<T: DeserializeOwned>(doc: RawDocument) -> Result<T, FeedError> {
    let RawDocument { id, mut fields } = doc;
    let label = id.to_string();
    let id = serde_json::to_value(id).map_err(|e| FeedError::Malformed(e.to_string()))?;
    fields.insert("id".to_string(), id);

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| FeedError::Malformed(format!("document {}: {}", label, e)))
}

/// Pending (`None`) timestamps count as newer than any stamped one.
fn compare_timestamps(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    let ascending = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.total_cmp(&b),
    };
    if descending {
        ascending.reverse()
    } else {
        ascending
    }
}
