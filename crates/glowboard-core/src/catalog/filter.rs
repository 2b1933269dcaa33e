//! Filter inputs and the predicate they define.

use std::collections::BTreeSet;

use crate::models::CatalogItem;

/// Label of the "every category" choice in category controls.
pub const ALL_CATEGORIES: &str = "all";

/// Which categories are visible.
///
/// `Only` never holds an empty set: toggling the last label off falls back
/// to `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl CategorySelection {
    /// Apply a click on a category control.
    ///
    /// The [`ALL_CATEGORIES`] sentinel selects everything. Any other label
    /// toggles its membership.
    pub fn toggle(&mut self, label: &str) {
        if label == ALL_CATEGORIES {
            *self = Self::All;
            return;
        }

        let mut labels = match std::mem::take(self) {
            Self::All => BTreeSet::new(),
            Self::Only(labels) => labels,
        };
        if !labels.remove(label) {
            labels.insert(label.to_string());
        }

        if !labels.is_empty() {
            *self = Self::Only(labels);
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether the control for `label` renders as active.
    pub fn is_selected(&self, label: &str) -> bool {
        match self {
            Self::All => label == ALL_CATEGORIES,
            Self::Only(labels) => labels.contains(label),
        }
    }

    /// Whether items of `category` pass this selection.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(labels) => labels.contains(category),
        }
    }
}

/// Inclusive range of the price control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Creates bounds, swapping the ends if given in the wrong order.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamp a control value into range. NaN maps to the maximum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.max
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 200.0 }
    }
}

/// The user-controlled predicate configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: CategorySelection,
    /// Inclusive upper bound on price.
    pub price_ceiling: f64,
    pub search_term: String,
}

impl FilterState {
    /// Default filters: all categories, ceiling at the bound's maximum, no search.
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            category: CategorySelection::All,
            price_ceiling: bounds.max,
            search_term: String::new(),
        }
    }

    /// True when no filter narrows the collection.
    pub fn is_default(&self, bounds: PriceBounds) -> bool {
        *self == Self::new(bounds)
    }

    /// Category AND price AND search.
    pub fn matches<T: CatalogItem + ?Sized>(&self, item: &T) -> bool {
        self.matches_lowered(item, &self.search_term.to_lowercase())
    }

    /// Same as [`matches`](Self::matches) with the search term already lowercased,
    /// so a full pass over a collection lowercases it once.
    pub(crate) fn matches_lowered<T: CatalogItem + ?Sized>(
        &self,
        item: &T,
        needle_lower: &str,
    ) -> bool {
        self.category.admits(item.category())
            && item.price().is_none_or(|price| price <= self.price_ceiling)
            && item.matches_text(needle_lower)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(labels: &[&str]) -> CategorySelection {
        CategorySelection::Only(labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_toggle_from_all_selects_label() {
        let mut sel = CategorySelection::All;
        sel.toggle("lipstick");
        assert_eq!(sel, only(&["lipstick"]));
        assert!(!sel.is_selected(ALL_CATEGORIES));
    }

    #[test]
    fn test_toggle_accumulates_labels() {
        let mut sel = CategorySelection::All;
        sel.toggle("lipstick");
        sel.toggle("blush");
        assert_eq!(sel, only(&["blush", "lipstick"]));
        assert!(sel.admits("blush"));
        assert!(!sel.admits("mascara"));
    }

    #[test]
    fn test_toggle_last_label_falls_back_to_all() {
        let mut sel = CategorySelection::All;
        sel.toggle("lipstick");
        sel.toggle("lipstick");
        assert!(sel.is_all());
        assert!(sel.is_selected(ALL_CATEGORIES));
    }

    #[test]
    fn test_all_sentinel_clears_selection() {
        let mut sel = only(&["lipstick", "blush"]);
        sel.toggle(ALL_CATEGORIES);
        assert!(sel.is_all());
    }

    #[test]
    fn test_selection_never_empty() {
        let labels = ["lipstick", "foundation", "lipstick", "all", "blush", "blush", "foundation"];
        let mut sel = CategorySelection::All;
        for label in labels.iter().cycle().take(50) {
            sel.toggle(label);
            if let CategorySelection::Only(set) = &sel {
                assert!(!set.is_empty());
            }
        }
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = PriceBounds::default();
        assert_eq!(bounds.clamp(-5.0), 0.0);
        assert_eq!(bounds.clamp(250.0), 200.0);
        assert_eq!(bounds.clamp(42.0), 42.0);
        assert_eq!(bounds.clamp(f64::NAN), 200.0);
    }

    #[test]
    fn test_bounds_new_orders_ends() {
        let bounds = PriceBounds::new(100.0, 10.0);
        assert_eq!(bounds.min, 10.0);
        assert_eq!(bounds.max, 100.0);
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert!(state.category.is_all());
        assert_eq!(state.price_ceiling, 200.0);
        assert!(state.search_term.is_empty());
        assert!(state.is_default(PriceBounds::default()));
    }
}
