//! Live feed driving a catalog, end to end through the mock source.

use std::cell::RefCell;
use std::rc::Rc;

use glowboard_core::catalog::Catalog;
use glowboard_core::error::{FeedError, WriteError};
use glowboard_core::feed::mock::{MockSource, MockSubmit};
use glowboard_core::feed::{FeedQuery, FeedStatus, LiveFeed};
use glowboard_core::models::{CatalogItem, ItemId, MoodEntry, NewMoodEntry};
use serde_json::json;

struct Board {
    source: MockSource,
    feed: LiveFeed<MoodEntry, MockSource>,
    catalog: Rc<RefCell<Catalog<MoodEntry>>>,
    errors: Rc<RefCell<Vec<FeedError>>>,
}

fn board(query: FeedQuery) -> Board {
    let source = MockSource::new();
    let feed = LiveFeed::new(source.clone(), query);
    let catalog = Rc::new(RefCell::new(Catalog::new(Vec::new())));
    let errors = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&catalog);
    let error_sink = Rc::clone(&errors);
    feed.start(
        move |items: &[MoodEntry]| sink.borrow_mut().replace_items(items.to_vec()),
        move |err: &FeedError| error_sink.borrow_mut().push(err.clone()),
    )
    .unwrap();

    Board {
        source,
        feed,
        catalog,
        errors,
    }
}

fn visible_ids(catalog: &Catalog<MoodEntry>) -> Vec<ItemId> {
    catalog.visible_items().iter().map(|item| item.id()).collect()
}

#[test]
fn test_error_then_recovery() {
    let board = board(FeedQuery::collection("moodBoard"));
    assert_eq!(board.feed.status(), FeedStatus::Connecting);

    board.source.emit_error("permission denied");
    assert_eq!(board.feed.status(), FeedStatus::Errored);
    assert_eq!(
        *board.errors.borrow(),
        vec![FeedError::Subscription("permission denied".to_string())]
    );

    board.source.emit_snapshot(json!([
        {"id": "a", "type": "text", "content": "soft pinks", "author": "Ana"},
        {"id": "b", "type": "image", "content": "/look.jpg", "author": "Bo"},
        {"id": "c", "type": "text", "content": "gold hoops", "author": "Cy"},
    ]));

    assert_eq!(board.feed.status(), FeedStatus::Connected);
    assert_eq!(
        visible_ids(&board.catalog.borrow()),
        vec![ItemId::from("a"), ItemId::from("b"), ItemId::from("c")]
    );
}

#[test]
fn test_stop_ignores_late_snapshot() {
    let board = board(FeedQuery::collection("moodBoard"));
    board
        .source
        .emit_snapshot(json!([{"id": "a", "content": "x", "author": "y"}]));

    board.feed.stop();
    board.source.emit_snapshot(json!([
        {"id": "a", "content": "x", "author": "y"},
        {"id": "b", "content": "z", "author": "w"},
    ]));

    assert_eq!(visible_ids(&board.catalog.borrow()), vec![ItemId::from("a")]);
    assert_eq!(board.source.release_count(), 1);

    board.feed.stop();
    drop(board.feed);
    assert_eq!(board.source.release_count(), 1);
}

#[test]
fn test_filters_survive_snapshots() {
    let board = board(FeedQuery::collection("moodBoard").newest_first("timestamp"));
    board.catalog.borrow_mut().set_category_selection("image");

    board.source.emit_snapshot(json!([
        {"id": "1", "type": "image", "content": "/one.jpg", "author": "Ana", "timestamp": 1.0},
        {"id": "2", "type": "text", "content": "hello", "author": "Bo", "timestamp": 2.0},
    ]));
    assert_eq!(visible_ids(&board.catalog.borrow()), vec![ItemId::from("1")]);

    board.source.emit_snapshot(json!([
        {"id": "3", "type": "image", "content": "/three.jpg", "author": "Cy"},
        {"id": "1", "type": "image", "content": "/one.jpg", "author": "Ana", "timestamp": 1.0},
        {"id": "2", "type": "text", "content": "hello", "author": "Bo", "timestamp": 2.0},
    ]));
    assert_eq!(
        visible_ids(&board.catalog.borrow()),
        vec![ItemId::from("3"), ItemId::from("1")]
    );
    assert!(board.catalog.borrow().is_selected("image"));
}

#[test]
fn test_malformed_snapshot_keeps_previous_items() {
    let board = board(FeedQuery::collection("moodBoard"));
    board
        .source
        .emit_snapshot(json!([{"id": "a", "content": "x", "author": "y"}]));
    board
        .source
        .emit_snapshot(json!([{"id": "b", "type": "video", "content": "x", "author": "y"}]));

    assert_eq!(board.feed.status(), FeedStatus::Errored);
    assert_eq!(visible_ids(&board.catalog.borrow()), vec![ItemId::from("a")]);
    assert!(matches!(
        board.errors.borrow().as_slice(),
        [FeedError::Malformed(_)]
    ));
}

#[tokio::test]
async fn test_submit_reaches_source_without_local_change() {
    let board = board(FeedQuery::collection("moodBoard"));
    let post = NewMoodEntry::text("  butter yellow ", "Ana", "#F59E0B");

    board.feed.submit(post.to_fields()).await.unwrap();

    let submitted = board.source.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].0, "moodBoard");
    assert_eq!(submitted[0].1["content"], "butter yellow");
    assert_eq!(submitted[0].1["type"], "text");
    assert!(board.catalog.borrow().items().is_empty());
}

#[tokio::test]
async fn test_rejected_and_timed_out_writes() {
    let board = board(FeedQuery::collection("moodBoard"));
    let post = NewMoodEntry::image("/look.jpg", "Bo");

    board
        .source
        .set_submit_outcome(MockSubmit::Reject("quota exceeded".to_string()));
    assert_eq!(
        board.feed.submit(post.to_fields()).await,
        Err(WriteError::Rejected("quota exceeded".to_string()))
    );

    board.source.set_submit_outcome(MockSubmit::Hang);
    assert_eq!(
        board
            .feed
            .submit_within(post.to_fields(), futures::future::ready(()))
            .await,
        Err(WriteError::Timeout)
    );
}
