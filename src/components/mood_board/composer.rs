//! Post forms for the mood board.
//!
//! Posts go upstream only; they appear on the board with the next snapshot.

use gloo_timers::future::TimeoutFuture;
use glowboard_core::models::{MoodKind, NewMoodEntry};
use glowboard_core::KeyValueStore;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::{MoodFeed, css};
use crate::components::icons as ic;
use crate::config::storage::MOOD_AUTHOR_KEY;
use crate::config::{DEFAULT_MOOD_COLOR, MOOD_COLORS, WRITE_TIMEOUT_MS};
use crate::utils::LocalStore;

fn remember_author(author: &str) {
    if let Err(err) = LocalStore.set_item(MOOD_AUTHOR_KEY, author.trim()) {
        tracing::debug!(error = %err, "could not remember author");
    }
}

#[component]
pub fn Composer(feed: StoredValue<MoodFeed, LocalStorage>) -> impl IntoView {
    let kind = RwSignal::new(MoodKind::Text);
    let author = RwSignal::new(LocalStore.get_item(MOOD_AUTHOR_KEY).unwrap_or_default());
    let content = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_MOOD_COLOR.to_string());
    let sending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let draft = move || {
        let author = author.get();
        let content = content.get();
        match kind.get() {
            MoodKind::Text => NewMoodEntry::text(&content, &author, &color.get()),
            MoodKind::Image => NewMoodEntry::image(&content, &author),
        }
    };
    let can_send = move || !sending.get() && draft().is_complete();

    let send = move || {
        let post = untrack(draft);
        if sending.get_untracked() || !post.is_complete() {
            return;
        }
        remember_author(&post.author);
        sending.set(true);
        error.set(None);

        let deadline = TimeoutFuture::new(WRITE_TIMEOUT_MS);
        let Some(write) = feed.try_with_value(|feed| feed.submit_within(post.to_fields(), deadline))
        else {
            sending.set(false);
            return;
        };
        spawn_local(async move {
            match write.await {
                Ok(()) => {
                    tracing::info!(kind = post.kind.as_str(), "mood post sent");
                    content.try_set(String::new());
                }
                Err(err) => {
                    error.try_set(Some(format!("Could not post: {}", err)));
                }
            }
            sending.try_set(false);
        });
    };

    let tab_class = move |tab: MoodKind| {
        move || {
            if kind.get() == tab {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        }
    };

    view! {
        <form
            class=css::composer
            on:submit=move |ev| {
                ev.prevent_default();
                send();
            }
        >
            <div class=css::tabs role="tablist">
                <button
                    type="button"
                    class=tab_class(MoodKind::Text)
                    on:click=move |_| kind.set(MoodKind::Text)
                >
                    <Icon icon=ic::NOTE />
                    " Note"
                </button>
                <button
                    type="button"
                    class=tab_class(MoodKind::Image)
                    on:click=move |_| kind.set(MoodKind::Image)
                >
                    <Icon icon=ic::IMAGE />
                    " Image"
                </button>
            </div>

            <input
                class=css::field
                type="text"
                placeholder="Your name"
                maxlength="40"
                prop:value=author
                on:input=move |ev| author.set(event_target_value(&ev))
            />

            <Show
                when=move || kind.get() == MoodKind::Text
                fallback=move || view! {
                    <input
                        class=css::field
                        type="url"
                        placeholder="Image URL"
                        prop:value=content
                        on:input=move |ev| content.set(event_target_value(&ev))
                    />
                }
            >
                <textarea
                    class=css::field
                    rows="3"
                    placeholder="What's inspiring you today?"
                    prop:value=content
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class=css::swatches>
                    <Icon icon=ic::PALETTE />
                    {MOOD_COLORS
                        .iter()
                        .map(|&(name, hex)| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if color.get() == hex {
                                            format!("{} {}", css::swatch, css::swatchActive)
                                        } else {
                                            css::swatch.to_string()
                                        }
                                    }
                                    style=format!("background: {}", hex)
                                    title=name
                                    aria-label=name
                                    on:click=move |_| color.set(hex.to_string())
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            {move || error.get().map(|msg| view! { <p class=css::error role="alert">{msg}</p> })}

            <button class=css::sendButton type="submit" disabled=move || !can_send()>
                <Icon icon=ic::SEND />
                {move || if sending.get() { " Posting..." } else { " Post" }}
            </button>
        </form>
    }
}
