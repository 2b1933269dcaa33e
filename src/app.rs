//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup following Leptos conventions.

use glowboard_core::FetchError;
use glowboard_core::api::ApiEndpoints;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{AppRouter, Nav};
use crate::config::API_BASE_URL;
use crate::models::{BackendStatus, Route};
use crate::utils::fetch;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `expect_context::<AppContext>()`. Page-level state (catalogs, feeds,
/// form inputs) is owned by each page and dropped when it unmounts.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page, mirrored from the URL hash.
    pub route: RwSignal<Route>,
    /// Reachability of the backend, updated by every backend call.
    pub backend: RwSignal<BackendStatus>,
    /// Backend endpoint builder.
    pub api: StoredValue<ApiEndpoints>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::current()),
            backend: RwSignal::new(BackendStatus::Checking),
            api: StoredValue::new(ApiEndpoints::new(API_BASE_URL)),
        }
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        self.api.get_value()
    }

    /// Record the backend status implied by a finished request.
    pub fn report_outcome<T>(&self, result: &Result<T, FetchError>) {
        self.backend.set(BackendStatus::from_outcome(result));
    }

    /// Check the backend's root endpoint in the background. Any HTTP answer
    /// counts as online, the same rule every other request follows.
    pub fn check_backend(&self) {
        let ctx = *self;
        let url = self.endpoints().health();
        spawn_local(async move {
            let result = fetch::ping(&url).await;
            tracing::info!(url = %url, ok = result.is_ok(), "backend health check");
            ctx.report_outcome(&result);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.check_backend();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #fff7ed;
                    color: #1e293b;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #e11d48; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 12px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #94a3b8;">
                                "Error details"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #e11d48;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #9333ea;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Nav />
            <AppRouter />
        </ErrorBoundary>
    }
}
