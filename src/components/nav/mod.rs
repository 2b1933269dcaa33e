//! Top navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::status::BackendBadge;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

fn route_icon(route: Route) -> icondata::Icon {
    match route {
        Route::Shop => ic::SHOP,
        Route::Trends => ic::TRENDS,
        Route::MoodBoard => ic::BOARD,
        Route::Journal => ic::JOURNAL,
        Route::Automation => ic::AUTOMATION,
    }
}

/// Brand, page links, and backend status.
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class=css::bar>
            <a class=css::brand href=Route::Shop.to_hash()>
                <span class=css::brandName>{APP_NAME}</span>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </a>
            <ul class=css::links>
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        let active = move || ctx.route.get() == route;
                        view! {
                            <li>
                                <a
                                    href=route.to_hash()
                                    class=move || {
                                        if active() {
                                            format!("{} {}", css::link, css::linkActive)
                                        } else {
                                            css::link.to_string()
                                        }
                                    }
                                    aria-current=move || active().then_some("page")
                                >
                                    <Icon icon=route_icon(route) />
                                    <span>{route.label()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <BackendBadge status=ctx.backend />
        </nav>
    }
}
