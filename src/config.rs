//! Application configuration.
//!
//! Centralizes the constants used throughout the application. Static item
//! data is loaded at compile time using `include_str!` (see [`crate::data`]).

use glowboard_core::PriceBounds;

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the navigation bar.
pub const APP_NAME: &str = "Glowboard";

/// Tagline under the brand name.
pub const APP_TAGLINE: &str = "Beauty picks, fashion trends, live inspiration";

// =============================================================================
// Backend Configuration
// =============================================================================

/// Backend base URL, overridable at build time with `GLOWBOARD_API_URL`.
pub const API_BASE_URL: &str = match option_env!("GLOWBOARD_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Deadline for writes to the backend (journal entries, mood posts).
pub const WRITE_TIMEOUT_MS: u32 = 8000;

/// Prompt generation runs a local model and gets a longer budget.
pub const PROMPT_TIMEOUT_MS: i32 = 60000;

/// A manual trend scrape waits on the scraper service.
pub const SCRAPE_TIMEOUT_MS: i32 = 30000;

/// Model requested from the prompt generator.
pub const DEFAULT_PROMPT_MODEL: &str = "llama3";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Range of the shop's price slider.
pub const PRICE_BOUNDS: PriceBounds = PriceBounds { min: 0.0, max: 200.0 };

/// Price slider step in dollars.
pub const PRICE_STEP: f64 = 5.0;

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage keys for persisted favorites.
pub mod storage {
    /// Shop wishlist.
    pub const WISHLIST_KEY: &str = "makeup-wishlist";
    /// Favorited trends.
    pub const TREND_FAVORITES_KEY: &str = "trend-favorites";
    /// Last author name used on the mood board.
    pub const MOOD_AUTHOR_KEY: &str = "mood-author";
}

// =============================================================================
// Live Mood Board
// =============================================================================

/// Collection backing the live mood board.
pub const MOOD_COLLECTION: &str = "moodBoard";

/// Field the mood board is ordered by.
pub const MOOD_ORDER_FIELD: &str = glowboard_core::feed::TIMESTAMP_FIELD;

/// Note colors offered on the mood board, as (name, hex).
pub const MOOD_COLORS: &[(&str, &str)] = &[
    ("Amber", "#F59E0B"),
    ("Rose", "#F43F5E"),
    ("Purple", "#A855F7"),
    ("Teal", "#14B8A6"),
    ("Indigo", "#6366F1"),
];

/// Color preselected for new notes.
pub const DEFAULT_MOOD_COLOR: &str = "#F59E0B";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconTheme {
    Lucide,
    Bootstrap,
}

/// Active icon theme.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
