//! Live mood board.
//!
//! - [`MoodBoardPage`] - page root, owns the feed and the board catalog
//! - `composer` - text and image post forms

mod composer;

use glowboard_core::catalog::ALL_CATEGORIES;
use glowboard_core::feed::FeedQuery;
use glowboard_core::models::MoodKind;
use glowboard_core::{Catalog, FeedStatus, LiveFeed, MoodEntry};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::status::FeedBadge;
use crate::config::{DEFAULT_MOOD_COLOR, MOOD_COLLECTION, MOOD_ORDER_FIELD};
use crate::utils::format::format_relative;
use crate::utils::{EventStreamSource, dom};
use composer::Composer;

stylance::import_crate_style!(css, "src/components/mood_board/mood_board.module.css");

pub(crate) type MoodFeed = LiveFeed<MoodEntry, EventStreamSource>;

const KIND_FILTERS: [(&str, &str); 3] = [
    (ALL_CATEGORIES, "All"),
    ("text", "Notes"),
    ("image", "Images"),
];

#[component]
pub fn MoodBoardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let board = RwSignal::new(Catalog::<MoodEntry>::new(Vec::new()));
    let status = RwSignal::new(FeedStatus::Connecting);
    let query = FeedQuery::collection(MOOD_COLLECTION).newest_first(MOOD_ORDER_FIELD);
    let feed: StoredValue<MoodFeed, LocalStorage> =
        StoredValue::new_local(LiveFeed::new(EventStreamSource::new(ctx.endpoints()), query));

    let started = feed.with_value(|feed| {
        feed.start(
            move |items| {
                let items = items.to_vec();
                board.try_update(|b| b.replace_items(items));
                status.try_set(FeedStatus::Connected);
            },
            move |err| {
                tracing::warn!(error = %err, "mood board feed error");
                status.try_set(FeedStatus::Errored);
            },
        )
    });
    if let Err(err) = started {
        tracing::error!(error = %err, "could not subscribe to the mood board");
        status.set(FeedStatus::Errored);
    }

    on_cleanup(move || {
        feed.try_with_value(|feed| feed.stop());
    });

    let visible = Memo::new(move |_| board.with(|b| b.visible_cloned()));
    let search = Signal::derive(move || board.with(|b| b.filters().search_term.clone()));

    view! {
        <div class=css::page>
            <header class=css::header>
                <div>
                    <h1 class=css::title>
                        <Icon icon=ic::BOARD />
                        {move || format!(" Live Mood Board ({} items)", board.with(|b| b.items().len()))}
                    </h1>
                    <p class=css::subtitle>"Share a thought or an image. Everyone sees it instantly."</p>
                </div>
                <FeedBadge status=status />
            </header>

            <Composer feed=feed />

            <div class=css::toolbar>
                <div class=css::chips>
                    {KIND_FILTERS
                        .iter()
                        .map(|&(label, name)| {
                            let selected = move || board.with(|b| b.is_selected(label));
                            view! {
                                <button
                                    class=move || {
                                        if selected() {
                                            format!("{} {}", css::chip, css::chipActive)
                                        } else {
                                            css::chip.to_string()
                                        }
                                    }
                                    on:click=move |_| board.update(|b| b.set_category_selection(label))
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class=css::search>
                    <Icon icon=ic::SEARCH />
                    <input
                        type="search"
                        placeholder="Search posts or authors..."
                        prop:value=search
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            board.update(|b| b.set_search_term(text));
                        }
                    />
                </label>
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=move || {
                    let message = if board.with(|b| b.items().is_empty()) {
                        "The board is empty. Be the first to post!"
                    } else {
                        "No posts match these filters."
                    };
                    view! { <p class=css::empty>{message}</p> }
                }
            >
                <div class=css::board>
                    <For
                        each=move || visible.get()
                        key=|entry: &MoodEntry| (entry.id.clone(), entry.timestamp.map(f64::to_bits))
                        children=|entry| view! { <MoodCard entry=entry /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MoodCard(entry: MoodEntry) -> impl IntoView {
    let color = entry
        .color
        .clone()
        .unwrap_or_else(|| DEFAULT_MOOD_COLOR.to_string());
    let age = format_relative(entry.timestamp, dom::now_ms());

    let body = match entry.kind {
        MoodKind::Text => view! {
            <p class=css::note style=format!("border-left-color: {}", color)>
                {entry.content.clone()}
            </p>
        }
        .into_any(),
        MoodKind::Image => view! {
            <img class=css::photo src=entry.content.clone() alt="Mood board image" loading="lazy" />
        }
        .into_any(),
    };

    view! {
        <article class=css::card>
            {body}
            <footer class=css::cardFooter>
                <span class=css::avatar style=format!("background: {}", color)>
                    {entry.initial()}
                </span>
                <span class=css::author>{entry.author.clone()}</span>
                <time class=css::age>{age}</time>
            </footer>
        </article>
    }
}
