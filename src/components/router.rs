//! Application router component.
//!
//! Hash routing over native `hashchange` events:
//!
//! - **URL hash is the source of truth**: the current page is derived from `#/page`
//! - **Pages own their state**: switching pages unmounts the old page, which
//!   releases its feeds and discards its filters
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::automation::AutomationPage;
use crate::components::journal::JournalPage;
use crate::components::mood_board::MoodBoardPage;
use crate::components::shop::ShopPage;
use crate::components::trends::TrendsPage;
use crate::models::Route;

/// Main application router.
///
/// - `#/` → shop
/// - `#/trends` → trends
/// - `#/mood-board` → live mood board
/// - `#/journal` → style journal
/// - `#/automation` → trend-scrape trigger
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let next = Route::current();
            tracing::debug!(route = next.label(), "navigate");
            route.set(next);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Re-render only when the page actually changes.
    let page = Memo::new(move |_| route.get());

    view! {
        <main>
            {move || match page.get() {
                Route::Shop => view! { <ShopPage /> }.into_any(),
                Route::Trends => view! { <TrendsPage /> }.into_any(),
                Route::MoodBoard => view! { <MoodBoardPage /> }.into_any(),
                Route::Journal => view! { <JournalPage /> }.into_any(),
                Route::Automation => view! { <AutomationPage /> }.into_any(),
            }}
        </main>
    }
}
