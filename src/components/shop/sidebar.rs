//! Category, price, and reset controls for the shop.

use glowboard_core::{Catalog, Product};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::config::PRICE_STEP;
use crate::data::PRODUCT_CATEGORIES;
use crate::utils::format::format_dollars;

#[component]
pub fn FilterSidebar(catalog: RwSignal<Catalog<Product>>) -> impl IntoView {
    let bounds = catalog.with_untracked(|c| c.bounds());
    let ceiling = Signal::derive(move || catalog.with(|c| c.filters().price_ceiling));

    view! {
        <aside class=css::sidebar>
            <h3 class=css::sidebarHeading>"Category"</h3>
            <div class=css::categoryList>
                {PRODUCT_CATEGORIES
                    .iter()
                    .map(|&(label, name)| {
                        let selected = move || catalog.with(|c| c.is_selected(label));
                        view! {
                            <button
                                class=move || {
                                    if selected() {
                                        format!("{} {}", css::categoryButton, css::categoryActive)
                                    } else {
                                        css::categoryButton.to_string()
                                    }
                                }
                                aria-pressed=move || selected().to_string()
                                on:click=move |_| catalog.update(|c| c.set_category_selection(label))
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <h3 class=css::sidebarHeading>"Price Range"</h3>
            <input
                class=css::slider
                type="range"
                min=bounds.min
                max=bounds.max
                step=PRICE_STEP
                prop:value=move || ceiling.get().to_string()
                on:input=move |ev| {
                    let value = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
                    catalog.update(|c| c.set_price_ceiling(value));
                }
            />
            <div class=css::sliderLabels>
                <span>{format_dollars(bounds.min)}</span>
                <span>{move || format!("up to {}", format_dollars(ceiling.get()))}</span>
            </div>

            <button
                class=css::resetButton
                disabled=move || catalog.with(|c| c.filters().is_default(c.bounds()))
                on:click=move |_| catalog.update(|c| c.reset_filters())
            >
                <Icon icon=ic::RESET />
                "Reset Filters"
            </button>
        </aside>
    }
}
