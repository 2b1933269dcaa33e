//! In-memory [`SnapshotSource`] for tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde_json::Value;

use super::subscription::{
    FeedQuery, RawDocument, SnapshotEvent, SnapshotListener, SnapshotSource, Subscription,
};
use crate::error::{FeedError, WriteError};

/// How the mock answers writes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MockSubmit {
    #[default]
    Accept,
    Reject(String),
    /// Never resolves.
    Hang,
}

#[derive(Default)]
struct MockInner {
    listeners: RefCell<Vec<SnapshotListener>>,
    queries: RefCell<Vec<FeedQuery>>,
    releases: Cell<usize>,
    submitted: RefCell<Vec<(String, Value)>>,
    submit_outcome: RefCell<MockSubmit>,
    refuse_subscribe: RefCell<Option<String>>,
}

/// Source whose snapshots are pushed by hand.
///
/// Clones share state, so a test keeps one clone and hands the other to the
/// adapter. Listeners stay registered after release, which lets a test
/// deliver an "in-flight" snapshot after the adapter has stopped.
#[derive(Clone, Default)]
pub struct MockSource {
    inner: Rc<MockInner>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a snapshot given as a JSON array of documents.
    pub fn emit_snapshot(&self, docs: Value) {
        let docs: Vec<RawDocument> =
            serde_json::from_value(docs).expect("mock snapshot must be an array of documents");
        self.emit(SnapshotEvent::Snapshot(docs));
    }

    pub fn emit_error(&self, message: &str) {
        self.emit(SnapshotEvent::Error(message.to_string()));
    }

    pub fn emit(&self, event: SnapshotEvent) {
        for listener in self.inner.listeners.borrow_mut().iter_mut() {
            listener(event.clone());
        }
    }

    pub fn subscribe_count(&self) -> usize {
        self.inner.queries.borrow().len()
    }

    pub fn release_count(&self) -> usize {
        self.inner.releases.get()
    }

    pub fn last_query(&self) -> Option<FeedQuery> {
        self.inner.queries.borrow().last().cloned()
    }

    pub fn submitted(&self) -> Vec<(String, Value)> {
        self.inner.submitted.borrow().clone()
    }

    pub fn set_submit_outcome(&self, outcome: MockSubmit) {
        *self.inner.submit_outcome.borrow_mut() = outcome;
    }

    /// Make the next `subscribe` call fail with `message`.
    pub fn refuse_next_subscribe(&self, message: &str) {
        *self.inner.refuse_subscribe.borrow_mut() = Some(message.to_string());
    }
}

impl SnapshotSource for MockSource {
    fn subscribe(
        &self,
        query: &FeedQuery,
        listener: SnapshotListener,
    ) -> Result<Subscription, FeedError> {
        if let Some(message) = self.inner.refuse_subscribe.borrow_mut().take() {
            return Err(FeedError::Subscription(message));
        }

        self.inner.queries.borrow_mut().push(query.clone());
        self.inner.listeners.borrow_mut().push(listener);

        let inner = Rc::clone(&self.inner);
        Ok(Subscription::new(move || {
            inner.releases.set(inner.releases.get() + 1);
        }))
    }

    fn submit(
        &self,
        collection: &str,
        fields: Value,
    ) -> LocalBoxFuture<'static, Result<(), WriteError>> {
        self.inner
            .submitted
            .borrow_mut()
            .push((collection.to_string(), fields));

        match self.inner.submit_outcome.borrow().clone() {
            MockSubmit::Accept => futures::future::ready(Ok(())).boxed_local(),
            MockSubmit::Reject(reason) => {
                futures::future::ready(Err(WriteError::Rejected(reason))).boxed_local()
            }
            MockSubmit::Hang => futures::future::pending().boxed_local(),
        }
    }
}
