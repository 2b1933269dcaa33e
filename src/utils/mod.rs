//! Browser-side utilities.
//!
//! Provides:
//! - [`dom`] - window, storage, and clock access
//! - [`fetch`] - JSON over the Fetch API with timeout
//! - [`live`] - event-stream [`SnapshotSource`](glowboard_core::SnapshotSource)
//! - [`storage`] - `localStorage` as a key-value store
//! - [`format`] - display formatting
//! - [`logging`] - tracing to the browser console

pub mod dom;
pub mod fetch;
pub mod format;
pub mod live;
pub mod logging;
pub mod storage;

pub use live::EventStreamSource;
pub use storage::LocalStore;
