//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Journal, LuBot as Automation, LuHeart as Heart, LuImage as Image, LuLayoutGrid as Board,
        LuPalette as Palette, LuPencil as Note, LuRotateCcw as Reset, LuSearch as Search,
        LuSend as Send, LuShoppingBag as Shop, LuSparkles as Sparkles, LuStar as Star,
        LuTrendingUp as Trends, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsRobot as Automation, BsBag as Shop, BsBook as Journal, BsGraphUpArrow as Trends,
        BsGrid as Board, BsHeart as Heart, BsImage as Image, BsPalette as Palette,
        BsPencil as Note, BsSearch as Search, BsSend as Send, BsStarFill as Star,
        BsStars as Sparkles, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(SHOP, Shop);
themed_icon!(TRENDS, Trends);
themed_icon!(BOARD, Board);
themed_icon!(JOURNAL, Journal);
themed_icon!(AUTOMATION, Automation);
themed_icon!(HEART, Heart);
themed_icon!(SEARCH, Search);
themed_icon!(RESET, Reset);
themed_icon!(STAR, Star);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(NOTE, Note);
themed_icon!(IMAGE, Image);
themed_icon!(PALETTE, Palette);
themed_icon!(SEND, Send);
themed_icon!(CLOSE, Close);
