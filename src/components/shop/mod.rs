//! Makeup shop: filterable product grid with a persisted wishlist.
//!
//! - [`ShopPage`] - page root, owns the catalog and the wishlist
//! - `sidebar` - category, price, and reset controls
//! - `card` - one product tile
//! - `wishlist` - saved products

mod card;
mod sidebar;
mod wishlist;

use glowboard_core::{Catalog, Favorites, ItemId, Product};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::PRICE_BOUNDS;
use crate::config::storage::WISHLIST_KEY;
use crate::data;
use crate::utils::LocalStore;
use crate::utils::format::pluralize;
use card::ProductCard;
use sidebar::FilterSidebar;
use wishlist::WishlistPanel;

stylance::import_crate_style!(css, "src/components/shop/shop.module.css");

/// Wishlist handle shared by the cards and the wishlist panel.
#[derive(Clone, Copy)]
pub(crate) struct Wishlist {
    pub ids: RwSignal<Favorites>,
}

impl Wishlist {
    fn load() -> Self {
        let favorites = Favorites::load(&LocalStore, WISHLIST_KEY);
        tracing::debug!(count = favorites.len(), "wishlist loaded");
        Self {
            ids: RwSignal::new(favorites),
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.with(|ids| ids.contains(id))
    }

    pub fn toggle(&self, id: ItemId) {
        self.ids.update(|ids| {
            ids.toggle(id);
            if let Err(err) = ids.save(&LocalStore, WISHLIST_KEY) {
                tracing::warn!(error = %err, "failed to save wishlist");
            }
        });
    }
}

#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::with_bounds(data::products(), PRICE_BOUNDS));
    let wishlist = Wishlist::load();
    provide_context(wishlist);

    let visible = Memo::new(move |_| catalog.with(|c| c.visible_cloned()));
    let search = Signal::derive(move || catalog.with(|c| c.filters().search_term.clone()));
    let summary = Signal::derive(move || {
        catalog.with(|c| {
            format!(
                "Showing {} of {}",
                c.visible_count(),
                pluralize(c.items().len(), "product")
            )
        })
    });

    view! {
        <div class=css::page>
            <FilterSidebar catalog=catalog />

            <section class=css::content>
                <header class=css::header>
                    <div>
                        <h1 class=css::title>"Makeup Collection"</h1>
                        <p class=css::summary>{summary}</p>
                    </div>
                    <label class=css::search>
                        <Icon icon=ic::SEARCH />
                        <input
                            type="search"
                            placeholder="Search products or brands..."
                            prop:value=search
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                catalog.update(|c| c.set_search_term(text));
                            }
                        />
                    </label>
                </header>

                <Show
                    when=move || !visible.with(|items| items.is_empty())
                    fallback=move || view! {
                        <div class=css::empty>
                            <p>"No products match these filters."</p>
                            <button
                                class=css::resetButton
                                on:click=move |_| catalog.update(|c| c.reset_filters())
                            >
                                "Reset Filters"
                            </button>
                        </div>
                    }
                >
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|product: &Product| product.id.clone()
                            children=move |product| view! { <ProductCard product=product /> }
                        />
                    </div>
                </Show>
            </section>

            <WishlistPanel products=catalog />
        </div>
    }
}
