//! Live collections over server-sent events.
//!
//! The backend streams every change of a collection as a `message` event
//! whose data is the full, ordered JSON array of documents. Writes are plain
//! `POST`s to the collection path; their effect arrives with the next event.

use futures::FutureExt;
use futures::StreamExt;
use futures::future::{LocalBoxFuture, abortable};
use gloo_net::eventsource::futures::EventSource;
use glowboard_core::api::ApiEndpoints;
use glowboard_core::feed::{
    FeedQuery, RawDocument, SnapshotEvent, SnapshotListener, SnapshotSource, Subscription,
};
use glowboard_core::{FeedError, WriteError};
use serde_json::Value;

use super::fetch;

/// [`SnapshotSource`] backed by the backend's event streams.
#[derive(Debug, Clone)]
pub struct EventStreamSource {
    api: ApiEndpoints,
}

impl EventStreamSource {
    pub fn new(api: ApiEndpoints) -> Self {
        Self { api }
    }
}

impl SnapshotSource for EventStreamSource {
    fn subscribe(
        &self,
        query: &FeedQuery,
        mut listener: SnapshotListener,
    ) -> Result<Subscription, FeedError> {
        let url = self.api.live_collection(query);
        let mut source =
            EventSource::new(&url).map_err(|e| FeedError::Subscription(e.to_string()))?;
        let mut messages = source
            .subscribe("message")
            .map_err(|e| FeedError::Subscription(e.to_string()))?;

        let pump = async move {
            while let Some(event) = messages.next().await {
                match event {
                    Ok((_, message)) => {
                        let data = message.data().as_string().unwrap_or_default();
                        listener(decode_snapshot(&data));
                    }
                    // The browser reconnects on its own; a later message recovers the feed.
                    Err(err) => listener(SnapshotEvent::Error(format!("{:?}", err))),
                }
            }
        };
        let (pump, handle) = abortable(pump);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = pump.await;
        });

        tracing::debug!(url = %url, "event stream opened");
        Ok(Subscription::new(move || {
            handle.abort();
            source.close();
            tracing::debug!(url = %url, "event stream closed");
        }))
    }

    fn submit(
        &self,
        collection: &str,
        fields: Value,
    ) -> LocalBoxFuture<'static, Result<(), WriteError>> {
        let url = self.api.live_collection_path(collection);
        async move {
            fetch::post_ack(&url, &fields)
                .await
                .map_err(WriteError::from)
        }
        .boxed_local()
    }
}

/// Parse one event payload into a snapshot.
pub fn decode_snapshot(data: &str) -> SnapshotEvent {
    match serde_json::from_str::<Vec<RawDocument>>(data) {
        Ok(docs) => SnapshotEvent::Snapshot(docs),
        Err(err) => SnapshotEvent::Error(format!("invalid snapshot payload: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowboard_core::ItemId;

    #[test]
    fn test_decode_snapshot() {
        let event = decode_snapshot(r#"[{"id": "a1", "type": "text", "content": "gloss"}]"#);
        match event {
            SnapshotEvent::Snapshot(docs) => {
                assert_eq!(docs.len(), 1);
                assert_eq!(docs[0].id, ItemId::from("a1"));
            }
            other => panic!("expected snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_collection() {
        assert_eq!(decode_snapshot("[]"), SnapshotEvent::Snapshot(Vec::new()));
    }

    #[test]
    fn test_decode_garbage_is_error() {
        assert!(matches!(
            decode_snapshot("not json"),
            SnapshotEvent::Error(msg) if msg.starts_with("invalid snapshot payload")
        ));
        assert!(matches!(
            decode_snapshot(r#"{"id": "a"}"#),
            SnapshotEvent::Error(_)
        ));
    }
}
