//! Saved products.

use glowboard_core::{Catalog, Product};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Wishlist, css};
use crate::components::icons as ic;

#[component]
pub fn WishlistPanel(products: RwSignal<Catalog<Product>>) -> impl IntoView {
    let wishlist = expect_context::<Wishlist>();

    // Saved ids in save order, resolved against the full catalog, not the filtered view.
    let saved = Memo::new(move |_| {
        wishlist.ids.with(|ids| {
            products.with(|c| {
                ids.iter()
                    .filter_map(|id| c.items().iter().find(|p| &p.id == id).cloned())
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <aside class=css::wishlist>
            <h3 class=css::sidebarHeading>
                <Icon icon=ic::HEART />
                {move || format!(" Wishlist ({})", saved.with(|s| s.len()))}
            </h3>
            <Show
                when=move || !saved.with(|s| s.is_empty())
                fallback=|| view! { <p class=css::wishlistEmpty>"Tap the heart on a product to save it."</p> }
            >
                <ul class=css::wishlistItems>
                    <For
                        each=move || saved.get()
                        key=|product: &Product| product.id.clone()
                        children=move |product| {
                            let id = product.id.clone();
                            view! {
                                <li class=css::wishlistItem>
                                    <div>
                                        <span class=css::wishlistName>{product.name.clone()}</span>
                                        <span class=css::wishlistPrice>{product.display_price()}</span>
                                    </div>
                                    <button
                                        class=css::iconButton
                                        aria-label="Remove from wishlist"
                                        on:click=move |_| wishlist.toggle(id.clone())
                                    >
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </aside>
    }
}
