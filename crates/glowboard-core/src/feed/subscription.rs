//! The seam between the feed adapter and a push-based data source.

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FeedError, WriteError};
use crate::models::ItemId;

/// Server-assigned write time, the one ordering field the adapter can
/// reproduce locally.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Ordered query over one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub collection: String,
    /// Field the upstream orders by, if any.
    pub order_by: Option<String>,
    pub descending: bool,
}

impl FeedQuery {
    /// All documents of `collection`, in upstream order.
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            order_by: None,
            descending: false,
        }
    }

    /// Order by `field`, newest first.
    pub fn newest_first(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self.descending = true;
        self
    }

    /// Whether the upstream order is by [`TIMESTAMP_FIELD`].
    pub fn orders_by_timestamp(&self) -> bool {
        self.order_by.as_deref() == Some(TIMESTAMP_FIELD)
    }
}

/// A document as delivered upstream: its id plus arbitrary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// What a subscription delivers.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotEvent {
    /// The complete result set after an upstream change.
    Snapshot(Vec<RawDocument>),
    /// The upstream feed reported a problem. It may still recover.
    Error(String),
}

/// Callback registered with a [`SnapshotSource`].
pub type SnapshotListener = Box<dyn FnMut(SnapshotEvent)>;

/// Handle to an active subscription.
///
/// The release function runs exactly once: on [`release`](Self::release) or
/// when the handle is dropped, whichever comes first.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Unsubscribe now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A push-based collection store.
pub trait SnapshotSource {
    /// Register `listener` for every snapshot of `query`.
    ///
    /// Returns immediately; snapshots arrive later through the listener.
    fn subscribe(
        &self,
        query: &FeedQuery,
        listener: SnapshotListener,
    ) -> Result<Subscription, FeedError>;

    /// Append a document to `collection`. Resolves once upstream accepts or
    /// refuses the write.
    fn submit(
        &self,
        collection: &str,
        fields: Value,
    ) -> LocalBoxFuture<'static, Result<(), WriteError>>;
}
