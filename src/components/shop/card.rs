//! One product tile.

use glowboard_core::Product;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Wishlist, css};
use crate::components::icons as ic;
use crate::data::category_name;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let wishlist = expect_context::<Wishlist>();

    let id = product.id.clone();
    let saved = {
        let id = id.clone();
        move || wishlist.contains(&id)
    };
    let saved_label = saved.clone();
    let saved_class = saved.clone();

    view! {
        <article class=css::card>
            <div class=css::imageWrap>
                <img class=css::image src=product.image.clone() alt=product.name.clone() loading="lazy" />
                <button
                    class=move || {
                        if saved_class() {
                            format!("{} {}", css::heart, css::heartActive)
                        } else {
                            css::heart.to_string()
                        }
                    }
                    aria-label=move || {
                        if saved_label() { "Remove from wishlist" } else { "Add to wishlist" }
                    }
                    aria-pressed=move || saved().to_string()
                    on:click=move |_| wishlist.toggle(id.clone())
                >
                    <Icon icon=ic::HEART />
                </button>
            </div>
            <div class=css::cardBody>
                <span class=css::brand>{product.brand.clone()}</span>
                <h3 class=css::productName>{product.name.clone()}</h3>
                <span class=css::categoryTag>{category_name(&product.category)}</span>
                <div class=css::rating>
                    <span class=css::stars>{product.star_rating()}</span>
                    <span class=css::reviews>{format!("({})", product.reviews)}</span>
                </div>
                <span class=css::price>{product.display_price()}</span>
            </div>
        </article>
    }
}
