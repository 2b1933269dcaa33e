//! Hash-based routing between the app's pages.

/// Application pages, addressed by URL hash (`#/trends`, `#/mood-board`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    /// Product catalog: `#/` or empty hash.
    #[default]
    Shop,
    Trends,
    MoodBoard,
    Journal,
    /// Trend-scrape automation panel.
    Automation,
}

impl Route {
    /// Every page, in navigation order.
    pub const ALL: [Route; 5] = [
        Self::Shop,
        Self::Trends,
        Self::MoodBoard,
        Self::Journal,
        Self::Automation,
    ];

    /// Parse URL hash into Route. Unknown paths land on the shop.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "trends" => Self::Trends,
            "mood-board" => Self::MoodBoard,
            "journal" => Self::Journal,
            "automation" => Self::Automation,
            _ => Self::Shop,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> &'static str {
        match self {
            Self::Shop => "#/",
            Self::Trends => "#/trends",
            Self::MoodBoard => "#/mood-board",
            Self::Journal => "#/journal",
            Self::Automation => "#/automation",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shop => "Shop",
            Self::Trends => "Trends",
            Self::MoodBoard => "Mood Board",
            Self::Journal => "Journal",
            Self::Automation => "Automation",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Shop);
        assert_eq!(Route::from_hash("#"), Route::Shop);
        assert_eq!(Route::from_hash("#/"), Route::Shop);
        assert_eq!(Route::from_hash("#/trends"), Route::Trends);
        assert_eq!(Route::from_hash("#/trends/"), Route::Trends);
        assert_eq!(Route::from_hash("#/mood-board"), Route::MoodBoard);
        assert_eq!(Route::from_hash("journal"), Route::Journal);
        assert_eq!(Route::from_hash("#/automation"), Route::Automation);
        assert_eq!(Route::from_hash("#/checkout"), Route::Shop);
    }

    #[test]
    fn test_route_to_hash_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Route::MoodBoard.label(), "Mood Board");
        assert_eq!(Route::default(), Route::Shop);
    }
}
