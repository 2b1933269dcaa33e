//! Live feed adapter.
//!
//! A [`LiveFeed`] bridges a push-based [`SnapshotSource`] into item lists the
//! [`Catalog`](crate::catalog::Catalog) can consume, and tracks the
//! connection as a [`FeedStatus`].
//!
//! # Lifecycle
//!
//! ```text
//!            start()
//!   (idle) ──────────► Connecting ──snapshot──► Connected
//!                          │                     │   ▲
//!                          └──error──► Errored ◄─┘   │
//!                                         └──snapshot┘
//! ```
//!
//! Snapshots are total: each one replaces the held list. `stop()` releases
//! the subscription and makes any snapshot still in flight a no-op.

#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod snapshot;
mod subscription;

use std::cell::{Cell, Ref, RefCell};
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{Either, LocalBoxFuture, select};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FeedError, WriteError};
use crate::models::CatalogItem;

pub use snapshot::normalize;
pub use subscription::{
    FeedQuery, RawDocument, SnapshotEvent, SnapshotListener, SnapshotSource, Subscription,
    TIMESTAMP_FIELD,
};

/// Connection state of a live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Connecting,
    Connected,
    Errored,
}

impl FeedStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Short label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connecting => "Connecting...",
            Self::Connected => "Live Connected",
            Self::Errored => "Connection lost",
        }
    }
}

/// State shared between the adapter and the listener it registers.
struct FeedState<T> {
    live: Cell<bool>,
    status: Cell<FeedStatus>,
    items: RefCell<Vec<T>>,
}

/// Adapter from a [`SnapshotSource`] to a held, normalized item list.
pub struct LiveFeed<T, S> {
    source: S,
    query: FeedQuery,
    state: Rc<FeedState<T>>,
    subscription: RefCell<Option<Subscription>>,
    started: Cell<bool>,
}

impl<T, S> LiveFeed<T, S>
where
    T: CatalogItem + DeserializeOwned + 'static,
    S: SnapshotSource,
{
    pub fn new(source: S, query: FeedQuery) -> Self {
        Self {
            source,
            query,
            state: Rc::new(FeedState {
                live: Cell::new(false),
                status: Cell::new(FeedStatus::Connecting),
                items: RefCell::new(Vec::new()),
            }),
            subscription: RefCell::new(None),
            started: Cell::new(false),
        }
    }

    /// Subscribe to the source.
    ///
    /// Succeeds at most once per adapter. `on_snapshot` receives every
    /// applied snapshot; `on_error` receives upstream errors and snapshots
    /// that could not be normalized. Neither is called after [`stop`](Self::stop).
    pub fn start<F, E>(&self, mut on_snapshot: F, mut on_error: E) -> Result<(), FeedError>
    where
        F: FnMut(&[T]) + 'static,
        E: FnMut(&FeedError) + 'static,
    {
        if self.started.replace(true) {
            return Err(FeedError::AlreadyStarted);
        }

        self.state.live.set(true);
        self.state.status.set(FeedStatus::Connecting);

        let state = Rc::clone(&self.state);
        let query = self.query.clone();
        let listener: SnapshotListener = Box::new(move |event| {
            if !state.live.get() {
                tracing::debug!(collection = %query.collection, "ignoring event after stop");
                return;
            }

            match event {
                SnapshotEvent::Snapshot(docs) => match snapshot::normalize::<T>(docs, &query) {
                    Ok(items) => {
                        tracing::info!(
                            collection = %query.collection,
                            count = items.len(),
                            "snapshot applied"
                        );
                        *state.items.borrow_mut() = items;
                        state.status.set(FeedStatus::Connected);
                        on_snapshot(state.items.borrow().as_slice());
                    }
                    Err(err) => {
                        tracing::warn!(
                            collection = %query.collection,
                            error = %err,
                            "snapshot rejected"
                        );
                        state.status.set(FeedStatus::Errored);
                        on_error(&err);
                    }
                },
                SnapshotEvent::Error(message) => {
                    tracing::warn!(
                        collection = %query.collection,
                        error = %message,
                        "feed error"
                    );
                    state.status.set(FeedStatus::Errored);
                    on_error(&FeedError::Subscription(message));
                }
            }
        });

        match self.source.subscribe(&self.query, listener) {
            Ok(subscription) => {
                *self.subscription.borrow_mut() = Some(subscription);
                tracing::info!(collection = %self.query.collection, "feed subscribed");
                Ok(())
            }
            Err(err) => {
                // Nothing was acquired, so a later start may try again.
                self.state.live.set(false);
                self.state.status.set(FeedStatus::Errored);
                self.started.set(false);
                tracing::error!(
                    collection = %self.query.collection,
                    error = %err,
                    "subscribe failed"
                );
                Err(err)
            }
        }
    }

    /// Release the subscription. Safe to call repeatedly or before `start`.
    pub fn stop(&self) {
        self.state.live.set(false);
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.release();
            tracing::info!(collection = %self.query.collection, "feed unsubscribed");
        }
    }

    /// Append a document upstream.
    ///
    /// Local state is untouched; the write shows up with the next snapshot.
    pub fn submit(&self, fields: Value) -> LocalBoxFuture<'static, Result<(), WriteError>> {
        let collection = self.query.collection.clone();
        let write = self.source.submit(&collection, fields);
        async move {
            let result = write.await;
            if let Err(err) = &result {
                tracing::warn!(collection = %collection, error = %err, "write failed");
            }
            result
        }
        .boxed_local()
    }

    /// [`submit`](Self::submit), failing with [`WriteError::Timeout`] if
    /// `deadline` resolves first.
    ///
    /// The returned future owns everything it needs, so it may outlive the
    /// borrow of the adapter.
    pub fn submit_within<D>(
        &self,
        fields: Value,
        deadline: D,
    ) -> LocalBoxFuture<'static, Result<(), WriteError>>
    where
        D: Future<Output = ()> + 'static,
    {
        bounded_write(self.submit(fields), deadline).boxed_local()
    }

    pub fn status(&self) -> FeedStatus {
        self.state.status.get()
    }

    /// Whether a subscription is held and snapshots are being applied.
    pub fn is_live(&self) -> bool {
        self.state.live.get()
    }

    /// The most recently applied snapshot.
    pub fn items(&self) -> Ref<'_, [T]> {
        Ref::map(self.state.items.borrow(), Vec::as_slice)
    }

    pub fn query(&self) -> &FeedQuery {
        &self.query
    }
}

impl<T, S> Drop for LiveFeed<T, S> {
    fn drop(&mut self) {
        self.state.live.set(false);
        if let Some(subscription) = self.subscription.get_mut().take() {
            subscription.release();
        }
    }
}

/// Run a write until it settles or `deadline` fires. The deadline maps to
/// [`WriteError::Timeout`].
pub async fn bounded_write<F, D>(write: F, deadline: D) -> Result<(), WriteError>
where
    F: Future<Output = Result<(), WriteError>>,
    D: Future<Output = ()>,
{
    with_deadline(write, deadline)
        .await
        .unwrap_or(Err(WriteError::Timeout))
}

/// Run `work` until it finishes or `deadline` fires, whichever is first.
///
/// Returns `None` on deadline.
pub async fn with_deadline<F, D>(work: F, deadline: D) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    let work = pin!(work);
    let deadline = pin!(deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::mock::{MockSource, MockSubmit};
    use super::*;
    use crate::models::{ItemId, MoodEntry};

    type MoodFeed = LiveFeed<MoodEntry, MockSource>;

    fn mood_feed() -> (MoodFeed, MockSource) {
        let source = MockSource::new();
        let feed = LiveFeed::new(
            source.clone(),
            FeedQuery::collection("moodBoard").newest_first("timestamp"),
        );
        (feed, source)
    }

    fn ids(feed: &MoodFeed) -> Vec<ItemId> {
        feed.items().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_initial_status_is_connecting() {
        let (feed, _source) = mood_feed();
        assert_eq!(feed.status(), FeedStatus::Connecting);
        assert!(!feed.is_live());
        feed.start(|_| {}, |_| {}).unwrap();
        assert_eq!(feed.status(), FeedStatus::Connecting);
        assert!(feed.is_live());
    }

    #[test]
    fn test_snapshot_connects_and_notifies() {
        let (feed, source) = mood_feed();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        feed.start(
            move |items: &[MoodEntry]| sink.borrow_mut().push(items.len()),
            |_| {},
        )
        .unwrap();

        source.emit_snapshot(json!([{"id": "a", "timestamp": 2.0}, {"id": "b", "timestamp": 1.0}]));

        assert_eq!(feed.status(), FeedStatus::Connected);
        assert_eq!(ids(&feed), vec![ItemId::from("a"), ItemId::from("b")]);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_error_then_recovery() {
        let (feed, source) = mood_feed();
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);
        feed.start(|_| {}, move |err: &FeedError| sink.borrow_mut().push(err.clone()))
            .unwrap();

        source.emit_snapshot(json!([{"id": "a", "timestamp": 2.0}, {"id": "b", "timestamp": 1.0}]));
        source.emit_error("unavailable");
        assert_eq!(feed.status(), FeedStatus::Errored);
        assert_eq!(ids(&feed).len(), 2);

        source.emit_snapshot(json!([
            {"id": "a", "timestamp": 2.0},
            {"id": "b", "timestamp": 1.0},
            {"id": "c", "timestamp": 3.0}
        ]));
        assert_eq!(feed.status(), FeedStatus::Connected);
        assert_eq!(
            ids(&feed),
            vec![ItemId::from("c"), ItemId::from("a"), ItemId::from("b")]
        );
        assert_eq!(
            *errors.borrow(),
            vec![FeedError::Subscription("unavailable".to_string())]
        );
        assert_eq!(source.release_count(), 0);
    }

    #[test]
    fn test_late_snapshot_after_stop_is_ignored() {
        let (feed, source) = mood_feed();
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        feed.start(move |_: &[MoodEntry]| *sink.borrow_mut() += 1, |_| {})
            .unwrap();
        source.emit_snapshot(json!([{"id": "a"}]));

        feed.stop();
        source.emit_snapshot(json!([{"id": "a"}, {"id": "b"}]));
        source.emit_error("late");

        assert_eq!(ids(&feed), vec![ItemId::from("a")]);
        assert_eq!(feed.status(), FeedStatus::Connected);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_start_only_once() {
        let (feed, source) = mood_feed();
        feed.start(|_| {}, |_| {}).unwrap();
        assert_eq!(feed.start(|_| {}, |_| {}), Err(FeedError::AlreadyStarted));
        assert_eq!(source.subscribe_count(), 1);
    }

    #[test]
    fn test_failed_subscribe_can_be_retried() {
        let (feed, source) = mood_feed();
        source.refuse_next_subscribe("offline");
        assert_eq!(
            feed.start(|_| {}, |_| {}),
            Err(FeedError::Subscription("offline".to_string()))
        );
        assert_eq!(feed.status(), FeedStatus::Errored);
        assert!(!feed.is_live());

        feed.start(|_| {}, |_| {}).unwrap();
        assert_eq!(feed.status(), FeedStatus::Connecting);
        assert_eq!(source.subscribe_count(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (feed, source) = mood_feed();
        feed.stop();
        feed.start(|_| {}, |_| {}).unwrap();
        feed.stop();
        feed.stop();
        drop(feed);
        assert_eq!(source.release_count(), 1);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (feed, source) = mood_feed();
        feed.start(|_| {}, |_| {}).unwrap();
        drop(feed);
        assert_eq!(source.release_count(), 1);
    }

    #[test]
    fn test_malformed_snapshot_keeps_previous_items() {
        let (feed, source) = mood_feed();
        let errors = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&errors);
        feed.start(|_| {}, move |_: &FeedError| *sink.borrow_mut() += 1)
            .unwrap();

        source.emit_snapshot(json!([{"id": "a"}]));
        source.emit_snapshot(json!([{"id": "b", "type": "video"}]));

        assert_eq!(feed.status(), FeedStatus::Errored);
        assert_eq!(ids(&feed), vec![ItemId::from("a")]);
        assert_eq!(*errors.borrow(), 1);
    }

    #[test]
    fn test_last_snapshot_wins() {
        let (feed, source) = mood_feed();
        feed.start(|_| {}, |_| {}).unwrap();
        source.emit_snapshot(json!([{"id": "a"}, {"id": "b"}]));
        source.emit_snapshot(json!([{"id": "z"}]));
        assert_eq!(ids(&feed), vec![ItemId::from("z")]);
    }

    #[tokio::test]
    async fn test_submit_does_not_touch_local_items() {
        let (feed, source) = mood_feed();
        feed.start(|_| {}, |_| {}).unwrap();

        feed.submit(json!({"type": "text", "content": "hi", "author": "Ana"}))
            .await
            .unwrap();

        assert!(feed.items().is_empty());
        assert_eq!(
            source.submitted(),
            vec![(
                "moodBoard".to_string(),
                json!({"type": "text", "content": "hi", "author": "Ana"})
            )]
        );
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let (feed, source) = mood_feed();
        source.set_submit_outcome(MockSubmit::Reject("network down".to_string()));
        let result = feed.submit(json!({})).await;
        assert_eq!(result, Err(WriteError::Rejected("network down".to_string())));
    }

    #[tokio::test]
    async fn test_submit_within_times_out() {
        let (feed, source) = mood_feed();
        source.set_submit_outcome(MockSubmit::Hang);
        let result = feed.submit_within(json!({}), futures::future::ready(())).await;
        assert_eq!(result, Err(WriteError::Timeout));
    }

    #[tokio::test]
    async fn test_submit_within_completes_before_deadline() {
        let (feed, _source) = mood_feed();
        let result = feed
            .submit_within(json!({}), futures::future::pending::<()>())
            .await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_submit_within_outlives_adapter_borrow() {
        let (feed, source) = mood_feed();
        let write = feed.submit_within(json!({"content": "gloss"}), futures::future::pending::<()>());
        drop(feed);
        assert_eq!(write.await, Ok(()));
        assert_eq!(source.submitted().len(), 1);
    }

    #[tokio::test]
    async fn test_bounded_write() {
        assert_eq!(
            bounded_write(async { Ok(()) }, futures::future::pending()).await,
            Ok(())
        );
        assert_eq!(
            bounded_write(
                async { Err(WriteError::Rejected("503 Service Unavailable".into())) },
                futures::future::pending(),
            )
            .await,
            Err(WriteError::Rejected("503 Service Unavailable".into()))
        );
        assert_eq!(
            bounded_write(futures::future::pending(), async {}).await,
            Err(WriteError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_with_deadline() {
        assert_eq!(
            with_deadline(async { 7 }, futures::future::pending()).await,
            Some(7)
        );
        assert_eq!(
            with_deadline(futures::future::pending::<u8>(), async {}).await,
            None
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FeedStatus::default().label(), "Connecting...");
        assert!(FeedStatus::Connected.is_connected());
        assert!(!FeedStatus::Errored.is_connected());
    }
}
