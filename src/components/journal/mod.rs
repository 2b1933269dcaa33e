//! Style journal: AI prompt generator and entry form.

use glowboard_core::api::{JournalEntry, JournalPrompt, PromptRequest, parse_tags};
use gloo_timers::future::TimeoutFuture;
use glowboard_core::WriteError;
use glowboard_core::feed::bounded_write;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DEFAULT_PROMPT_MODEL, PROMPT_TIMEOUT_MS, WRITE_TIMEOUT_MS};
use crate::data::{EXAMPLE_THEMES, JOURNAL_MOODS};
use crate::utils::fetch;

stylance::import_crate_style!(css, "src/components/journal/journal.module.css");

#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::title>
                    <Icon icon=ic::JOURNAL />
                    " Style Journal"
                </h1>
                <p class=css::subtitle>"Get a writing prompt, then capture your style story."</p>
            </header>
            <div class=css::columns>
                <PromptGenerator />
                <EntryForm />
            </div>
        </div>
    }
}

#[component]
fn PromptGenerator() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let theme = RwSignal::new(String::new());
    let generating = RwSignal::new(false);
    let prompt = RwSignal::new(None::<JournalPrompt>);
    let error = RwSignal::new(None::<String>);

    let generate = move || {
        let current = theme.get_untracked().trim().to_string();
        if current.is_empty() || generating.get_untracked() {
            return;
        }
        generating.set(true);
        error.set(None);

        let url = ctx.endpoints().journal_prompt();
        let request = PromptRequest::new(current).with_model(DEFAULT_PROMPT_MODEL);
        spawn_local(async move {
            let result =
                fetch::post_json::<_, JournalPrompt>(&url, &request, PROMPT_TIMEOUT_MS).await;
            ctx.report_outcome(&result);
            match result {
                Ok(generated) => {
                    tracing::info!(theme = %generated.theme, model = %generated.model, "prompt generated");
                    prompt.try_set(Some(generated));
                }
                Err(err) => {
                    error.try_set(Some(format!("Could not generate a prompt: {}", err)));
                }
            }
            generating.try_set(false);
        });
    };

    view! {
        <section class=css::panel>
            <h2 class=css::panelTitle>
                <Icon icon=ic::SPARKLES />
                " Prompt Generator"
            </h2>
            <form
                class=css::row
                on:submit=move |ev| {
                    ev.prevent_default();
                    generate();
                }
            >
                <input
                    class=css::field
                    type="text"
                    placeholder="Enter a theme..."
                    prop:value=theme
                    on:input=move |ev| theme.set(event_target_value(&ev))
                />
                <button
                    class=css::primaryButton
                    type="submit"
                    disabled=move || generating.get() || theme.with(|t| t.trim().is_empty())
                >
                    {move || if generating.get() { "Generating..." } else { "Generate" }}
                </button>
            </form>

            <div class=css::themes>
                {EXAMPLE_THEMES
                    .iter()
                    .map(|&example| {
                        view! {
                            <button
                                type="button"
                                class=css::themeChip
                                on:click=move |_| theme.set(example.to_string())
                            >
                                {example}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || error.get().map(|msg| view! { <p class=css::error role="alert">{msg}</p> })}

            {move || {
                prompt
                    .get()
                    .map(|p| {
                        view! {
                            <blockquote class=css::prompt>
                                <p>{p.prompt}</p>
                                <footer class=css::promptMeta>
                                    {format!("Theme: {}", p.theme)}
                                    {(!p.model.is_empty()).then(|| format!(" · {}", p.model))}
                                </footer>
                            </blockquote>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn EntryForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let mood = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let outcome = RwSignal::new(None::<Result<(), WriteError>>);

    let draft = move || JournalEntry {
        title: title.get().trim().to_string(),
        content: content.get().trim().to_string(),
        mood: mood.get(),
        tags: parse_tags(&tags.get()),
    };

    let save = move || {
        let entry = untrack(draft);
        if saving.get_untracked() || !entry.is_complete() {
            return;
        }
        saving.set(true);
        outcome.set(None);

        let url = ctx.endpoints().journal();
        spawn_local(async move {
            let write = async {
                let result = fetch::post_ack(&url, &entry).await;
                ctx.report_outcome(&result);
                result.map_err(WriteError::from)
            };
            let result = bounded_write(write, TimeoutFuture::new(WRITE_TIMEOUT_MS)).await;
            if result.is_ok() {
                tracing::info!(tags = entry.tags.len(), "journal entry saved");
                title.try_set(String::new());
                content.try_set(String::new());
                mood.try_set(String::new());
                tags.try_set(String::new());
            }
            outcome.try_set(Some(result));
            saving.try_set(false);
        });
    };

    view! {
        <section class=css::panel>
            <h2 class=css::panelTitle>
                <Icon icon=ic::NOTE />
                " New Entry"
            </h2>
            <form
                class=css::form
                on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }
            >
                <input
                    class=css::field
                    type="text"
                    placeholder="Title"
                    prop:value=title
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class=css::field
                    rows="8"
                    placeholder="Write about your style today..."
                    prop:value=content
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <select
                    class=css::field
                    prop:value=mood
                    on:change=move |ev| mood.set(event_target_value(&ev))
                >
                    <option value="">"Select a mood"</option>
                    {JOURNAL_MOODS
                        .iter()
                        .map(|&m| view! { <option value=m>{m}</option> })
                        .collect_view()}
                </select>
                <input
                    class=css::field
                    type="text"
                    placeholder="Tags, comma separated"
                    prop:value=tags
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />

                {move || {
                    outcome
                        .get()
                        .map(|result| match result {
                            Ok(()) => view! {
                                <p class=css::success role="status">"Entry saved!"</p>
                            }
                            .into_any(),
                            Err(err) => view! {
                                <p class=css::error role="alert">
                                    {format!("Could not save entry: {}", err)}
                                </p>
                            }
                            .into_any(),
                        })
                }}

                <button
                    class=css::primaryButton
                    type="submit"
                    disabled=move || saving.get() || !draft().is_complete()
                >
                    <Icon icon=ic::SEND />
                    {move || if saving.get() { " Saving..." } else { " Save Entry" }}
                </button>
            </form>
        </section>
    }
}
