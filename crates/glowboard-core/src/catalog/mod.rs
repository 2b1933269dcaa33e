//! Catalog view-model.
//!
//! A [`Catalog`] owns one view's item collection and [`FilterState`], and
//! keeps the visible subset in sync with both. Every mutation recomputes the
//! subset in full; collections are small and the pass is a single stable
//! filter, so no incremental bookkeeping is kept.

mod filter;

pub use filter::{ALL_CATEGORIES, CategorySelection, FilterState, PriceBounds};

use crate::models::CatalogItem;

/// Item collection plus filter inputs plus the derived visible subset.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    filters: FilterState,
    bounds: PriceBounds,
    /// Indices into `items` of the visible subset, in source order.
    visible: Vec<usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Creates a catalog with the default `[0, 200]` price control.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_bounds(items, PriceBounds::default())
    }

    /// Creates a catalog whose price control spans `bounds`.
    pub fn with_bounds(items: Vec<T>, bounds: PriceBounds) -> Self {
        let mut catalog = Self {
            items,
            filters: FilterState::new(bounds),
            bounds,
            visible: Vec::new(),
        };
        catalog.refresh();
        catalog
    }

    /// Click on a category control. See [`CategorySelection::toggle`].
    pub fn set_category_selection(&mut self, label: &str) {
        self.filters.category.toggle(label);
        self.refresh();
    }

    /// Move the price control. Out-of-range values are clamped.
    pub fn set_price_ceiling(&mut self, value: f64) {
        self.filters.price_ceiling = self.bounds.clamp(value);
        self.refresh();
    }

    /// Replace the search text verbatim.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.filters.search_term = text.into();
        self.refresh();
    }

    /// Restore the default filters.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::new(self.bounds);
        self.refresh();
    }

    /// Swap in a new collection, keeping the current filters.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    /// Items passing every active filter, in source order.
    pub fn visible_items(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Whether the category control for `label` is active.
    pub fn is_selected(&self, label: &str) -> bool {
        self.filters.category.is_selected(label)
    }

    fn refresh(&mut self) {
        let needle = self.filters.search_term.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filters.matches_lowered(*item, &needle))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            visible = self.visible.len(),
            total = self.items.len(),
            "catalog refreshed"
        );
    }
}

impl<T: CatalogItem + Clone> Catalog<T> {
    /// Owned copies of the visible items, for render layers that key by value.
    pub fn visible_cloned(&self) -> Vec<T> {
        self.visible.iter().map(|&i| self.items[i].clone()).collect()
    }
}

impl<T: CatalogItem> Default for Catalog<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
