//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing between pages (main entry point)
//! - [`nav`] - Top navigation bar
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Connection status badges
//! - [`shop`] - Makeup catalog with wishlist
//! - [`trends`] - Fashion trends with fallback data
//! - [`mood_board`] - Live mood board
//! - [`journal`] - Prompt generator and journal entries
//! - [`automation`] - Manual trigger for the trend-scrape workflow

pub mod automation;
pub mod icons;
pub mod journal;
pub mod mood_board;
pub mod nav;
pub mod router;
pub mod shop;
pub mod status;
pub mod trends;

pub use nav::Nav;
pub use router::AppRouter;
