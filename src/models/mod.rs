//! App-side models.
//!
//! - [`Route`] - hash-based page navigation
//! - [`BackendStatus`] - reachability of the backend API
//!
//! Item types live in `glowboard_core::models`.

mod backend;
mod route;

pub use backend::BackendStatus;
pub use route::Route;
