//! Fashion trends fetched from the backend, with bundled fallback data.

use glowboard_core::api::{TrendsResponse, with_fallback};
use glowboard_core::catalog::ALL_CATEGORIES;
use glowboard_core::{Catalog, Favorites, FetchError, ItemId, Trend};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::storage::TREND_FAVORITES_KEY;
use crate::data::{self, category_name};
use crate::utils::LocalStore;
use crate::utils::fetch;
use crate::utils::format::pluralize;

stylance::import_crate_style!(css, "src/components/trends/trends.module.css");

/// Distinct categories of `trends`, in first-seen order, behind "all".
pub(crate) fn category_labels(trends: &[Trend]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for trend in trends {
        if !labels.contains(&trend.category) {
            labels.push(trend.category.clone());
        }
    }
    labels
}

fn toggle_favorite(favorites: RwSignal<Favorites>, id: ItemId) {
    favorites.update(|f| {
        f.toggle(id);
        if let Err(err) = f.save(&LocalStore, TREND_FAVORITES_KEY) {
            tracing::warn!(error = %err, "failed to save trend favorites");
        }
    });
}

#[component]
pub fn TrendsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let catalog = RwSignal::new(Catalog::<Trend>::new(Vec::new()));
    let loading = RwSignal::new(true);
    let from_fallback = RwSignal::new(false);
    let error = RwSignal::new(None::<FetchError>);
    let favorites = RwSignal::new(Favorites::load(&LocalStore, TREND_FAVORITES_KEY));

    let url = ctx.endpoints().trends();
    spawn_local(async move {
        let result = fetch::get_json::<TrendsResponse>(&url)
            .await
            .map(|body| body.trends);
        ctx.report_outcome(&result);

        let loaded = with_fallback(result, data::fallback_trends());
        tracing::info!(
            count = loaded.items.len(),
            fallback = loaded.from_fallback,
            "trends loaded"
        );
        // The page may have unmounted while the request was in flight.
        if catalog.try_update(|c| c.replace_items(loaded.items)).is_none() {
            return;
        }
        from_fallback.set(loaded.from_fallback);
        error.set(loaded.error);
        loading.set(false);
    });

    let visible = Memo::new(move |_| catalog.with(|c| c.visible_cloned()));
    let labels = Memo::new(move |_| catalog.with(|c| category_labels(c.items())));
    let search = Signal::derive(move || catalog.with(|c| c.filters().search_term.clone()));

    view! {
        <div class=css::page>
            <header class=css::header>
                <div>
                    <h1 class=css::title>
                        <Icon icon=ic::TRENDS />
                        " Fashion Trends"
                    </h1>
                    <p class=css::subtitle>
                        {move || pluralize(visible.with(|v| v.len()), "trend")}
                        {move || {
                            let count = favorites.with(|f| f.len());
                            (count > 0).then(|| format!(" · {} saved", count))
                        }}
                    </p>
                </div>
                <label class=css::search>
                    <Icon icon=ic::SEARCH />
                    <input
                        type="search"
                        placeholder="Search trends..."
                        prop:value=search
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            catalog.update(|c| c.set_search_term(text));
                        }
                    />
                </label>
            </header>

            <Show when=move || from_fallback.get()>
                <div class=css::notice role="status">
                    <strong>"Using fallback data."</strong>
                    {move || {
                        error
                            .get()
                            .map(|err| format!(" Could not reach the trends service: {}", err))
                    }}
                </div>
            </Show>

            <Show when=move || labels.with(|l| l.len() > 2)>
                <div class=css::chips>
                    <For
                        each=move || labels.get()
                        key=|label: &String| label.clone()
                        children=move |label| {
                            let name = if label == ALL_CATEGORIES {
                                "All".to_string()
                            } else {
                                category_name(&label)
                            };
                            let selected = {
                                let label = label.clone();
                                move || catalog.with(|c| c.is_selected(&label))
                            };
                            view! {
                                <button
                                    class=move || {
                                        if selected() {
                                            format!("{} {}", css::chip, css::chipActive)
                                        } else {
                                            css::chip.to_string()
                                        }
                                    }
                                    on:click=move |_| catalog.update(|c| c.set_category_selection(&label))
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class=css::loading>"Loading trends..."</p> }
            >
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=move || view! {
                        <div class=css::empty>
                            <p>"No trends match your search."</p>
                            <button
                                class=css::clearButton
                                on:click=move |_| catalog.update(|c| c.reset_filters())
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }
                >
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|trend: &Trend| trend.id.clone()
                            children=move |trend| {
                                view! {
                                    <TrendCard trend=trend favorites=favorites />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn TrendCard(trend: Trend, favorites: RwSignal<Favorites>) -> impl IntoView {
    let id = trend.id.clone();
    let saved = {
        let id = id.clone();
        move || favorites.with(|f| f.contains(&id))
    };
    let saved_class = saved.clone();

    view! {
        <article class=css::card>
            <div class=css::cardTop>
                <span class=css::icon>{trend.icon.clone().unwrap_or_else(|| "✨".to_string())}</span>
                <button
                    class=move || {
                        if saved_class() {
                            format!("{} {}", css::favorite, css::favoriteActive)
                        } else {
                            css::favorite.to_string()
                        }
                    }
                    aria-label="Save trend"
                    aria-pressed=move || saved().to_string()
                    on:click=move |_| toggle_favorite(favorites, id.clone())
                >
                    <Icon icon=ic::STAR />
                </button>
            </div>
            <h3 class=css::cardTitle>{trend.name.clone()}</h3>
            <p class=css::description>{trend.description.clone()}</p>
            <div class=css::meta>
                <span class=css::season>{trend.season.clone()}</span>
                {trend
                    .popularity
                    .clone()
                    .map(|p| view! { <span class=css::popularity>{p}</span> })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(id: u64, category: &str) -> Trend {
        Trend {
            id: ItemId::from(id),
            name: format!("Trend {}", id),
            description: String::new(),
            season: String::new(),
            popularity: None,
            category: category.to_string(),
            icon: None,
        }
    }

    #[test]
    fn test_category_labels_first_seen_order() {
        let trends = [trend(1, "vintage"), trend(2, "aesthetic"), trend(3, "vintage")];
        assert_eq!(category_labels(&trends), ["all", "vintage", "aesthetic"]);
    }

    #[test]
    fn test_category_labels_empty() {
        assert_eq!(category_labels(&[]), ["all"]);
    }
}
