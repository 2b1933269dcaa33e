//! Manual trigger for the trend-scrape workflow, plus the trends the last
//! run reported.

use glowboard_core::api::ScrapeResponse;
use glowboard_core::catalog::ALL_CATEGORIES;
use glowboard_core::{Catalog, FetchError, Trend};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::trends::category_labels;
use crate::config::SCRAPE_TIMEOUT_MS;
use crate::utils::fetch;
use crate::utils::format::{format_iso_minutes, pluralize};

stylance::import_crate_style!(css, "src/components/automation/automation.module.css");

const SCHEDULE: &str = "Daily at 9:00 AM";
const NOTIFICATION: &str = "Discord / Slack";

/// Steps for wiring the scheduled workflow to the scrape endpoint.
const SETUP_STEPS: [&str; 4] = [
    "Start n8n and open the workflow editor",
    "Import the trend-scraping workflow",
    "Point its HTTP node at the scrape endpoint",
    "Add a Discord or Slack webhook for the run summary",
];

/// What a finished run leaves on the page.
#[derive(Debug, Clone, PartialEq)]
struct RunSummary {
    finished_at: Option<String>,
    message: String,
    found: usize,
}

/// Split a scrape response into the summary line and the trends to show.
///
/// A run the scraper reports as failed keeps its message as an error and
/// shows no trends.
fn settle_run(run: ScrapeResponse) -> Result<(RunSummary, Vec<Trend>), String> {
    if !run.succeeded() {
        let reason = if run.message.is_empty() {
            format!("scraper reported status \"{}\"", run.status)
        } else {
            run.message
        };
        return Err(reason);
    }
    let summary = RunSummary {
        finished_at: run.timestamp.clone(),
        message: run.message.clone(),
        found: run.trends_found.max(run.trends.len()),
    };
    Ok((summary, run.into_trends()))
}

#[component]
pub fn AutomationPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = ctx.endpoints();
    let url = StoredValue::new(api.scrape_trends());
    let endpoint_path = api
        .scrape_trends()
        .strip_prefix(api.base())
        .map(str::to_string)
        .unwrap_or_default();

    let catalog = RwSignal::new(Catalog::<Trend>::new(Vec::new()));
    let running = RwSignal::new(false);
    let summary = RwSignal::new(None::<RunSummary>);
    let error = RwSignal::new(None::<String>);

    let trigger = move |_| {
        if running.get_untracked() {
            return;
        }
        running.set(true);
        error.set(None);

        let url = url.get_value();
        spawn_local(async move {
            tracing::info!(url = %url, "manual trend scrape");
            let result: Result<ScrapeResponse, FetchError> =
                fetch::post_json(&url, &serde_json::Map::new(), SCRAPE_TIMEOUT_MS).await;
            ctx.report_outcome(&result);

            let settled = result
                .map_err(|err| err.to_string())
                .and_then(settle_run);
            // The page may have unmounted while the scraper ran.
            if running.try_set(false).is_some() {
                return;
            }
            match settled {
                Ok((run, trends)) => {
                    tracing::info!(found = run.found, "trend scrape finished");
                    catalog.update(|c| c.replace_items(trends));
                    summary.set(Some(run));
                }
                Err(reason) => {
                    tracing::warn!(error = %reason, "trend scrape failed");
                    error.set(Some(reason));
                }
            }
        });
    };

    let visible = Memo::new(move |_| catalog.with(|c| c.visible_cloned()));
    let labels = Memo::new(move |_| catalog.with(|c| category_labels(c.items())));
    let search = Signal::derive(move || catalog.with(|c| c.filters().search_term.clone()));
    let has_results = move || catalog.with(|c| !c.items().is_empty());

    view! {
        <div class=css::page>
            <header class=css::header>
                <h1 class=css::title>
                    <Icon icon=ic::AUTOMATION />
                    " Trend Automation"
                </h1>
                <p class=css::subtitle>"Scheduled scraping of fashion publications"</p>
            </header>

            <section class=css::info>
                <div class=css::infoItem>
                    <span class=css::infoLabel>"Schedule"</span>
                    <span>{SCHEDULE}</span>
                </div>
                <div class=css::infoItem>
                    <span class=css::infoLabel>"Endpoint"</span>
                    <code>{format!("POST {}", endpoint_path)}</code>
                </div>
                <div class=css::infoItem>
                    <span class=css::infoLabel>"Notification"</span>
                    <span>{NOTIFICATION}</span>
                </div>
            </section>

            <div class=css::controls>
                <button class=css::trigger disabled=move || running.get() on:click=trigger>
                    <Icon icon=ic::SPARKLES />
                    {move || if running.get() { " Scraping Trends..." } else { " Trigger Manual Scraping" }}
                </button>
                {move || {
                    summary
                        .get()
                        .map(|run| {
                            let when = run
                                .finished_at
                                .as_deref()
                                .map(format_iso_minutes)
                                .unwrap_or_else(|| "just now".to_string());
                            view! {
                                <p class=css::lastRun>
                                    <strong>"Last run: "</strong>
                                    {when}
                                    {(!run.message.is_empty()).then(|| format!(" · {}", run.message))}
                                </p>
                            }
                        })
                }}
            </div>

            {move || {
                error
                    .get()
                    .map(|reason| {
                        view! {
                            <div class=css::error role="alert">
                                <strong>"Error: "</strong>
                                {reason}
                            </div>
                        }
                    })
            }}

            <Show when=has_results>
                <div class=css::resultsHeader>
                    <h2 class=css::resultsTitle>
                        {move || format!("Scraped Trends ({})", visible.with(|v| v.len()))}
                    </h2>
                    <label class=css::search>
                        <Icon icon=ic::SEARCH />
                        <input
                            type="search"
                            placeholder="Search scraped trends..."
                            prop:value=search
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                catalog.update(|c| c.set_search_term(text));
                            }
                        />
                    </label>
                </div>

                <div class=css::chips>
                    <For
                        each=move || labels.get()
                        key=|label: &String| label.clone()
                        children=move |label| {
                            let name = if label == ALL_CATEGORIES {
                                "All sources".to_string()
                            } else {
                                label.clone()
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

                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <p class=css::empty>"No scraped trends match your filters."</p> }
                >
                    <div class=css::grid>
                        <For
                            each=move || visible.get()
                            key=|trend: &Trend| trend.id.clone()
                            children=|trend| view! { <ScrapedCard trend=trend /> }
                        />
                    </div>
                </Show>
            </Show>

            <section class=css::setup>
                <h2 class=css::resultsTitle>"Workflow setup"</h2>
                <ol>
                    {SETUP_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>
                <p class=css::subtitle>
                    {move || {
                        let count = summary.with(|s| s.as_ref().map(|run| run.found).unwrap_or(0));
                        format!("{} found in the last manual run", pluralize(count, "trend"))
                    }}
                </p>
            </section>
        </div>
    }
}

#[component]
fn ScrapedCard(trend: Trend) -> impl IntoView {
    view! {
        <article class=css::card>
            <div class=css::cardTop>
                <span class=css::score>{trend.popularity.clone().unwrap_or_default()}</span>
                <span class=css::date>{trend.season.clone()}</span>
            </div>
            <h3 class=css::cardTitle>{trend.name.clone()}</h3>
            <p class=css::description>{trend.description.clone()}</p>
            <p class=css::source>{format!("Source: {}", trend.category)}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: &str) -> ScrapeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_successful_run_yields_trends() {
        let (summary, trends) = settle_run(run(
            r#"{"status": "success", "message": "Trend scraping completed",
                "trends_found": 1, "timestamp": "2025-10-19T09:00:02",
                "trends": [{"id": 4, "source": "Elle", "title": "Sheer Layers",
                            "popularity_score": 80}]}"#,
        ))
        .unwrap();
        assert_eq!(summary.found, 1);
        assert_eq!(summary.finished_at.as_deref(), Some("2025-10-19T09:00:02"));
        assert_eq!(trends[0].category, "Elle");
    }

    #[test]
    fn test_found_count_covers_listed_trends() {
        let (summary, _) = settle_run(run(
            r#"{"status": "success", "trends": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]}"#,
        ))
        .unwrap();
        assert_eq!(summary.found, 2);
    }

    #[test]
    fn test_failed_run_keeps_reason() {
        assert_eq!(
            settle_run(run(r#"{"status": "error", "message": "source unreachable"}"#)),
            Err("source unreachable".to_string())
        );
        assert_eq!(
            settle_run(run(r#"{"status": "error"}"#)),
            Err("scraper reported status \"error\"".to_string())
        );
    }
}
