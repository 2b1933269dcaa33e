//! Connection status badges.
//!
//! A pill with a colored dot, used for the live feed and the backend.

use glowboard_core::FeedStatus;
use leptos::prelude::*;

use crate::models::BackendStatus;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Color of a status dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Pending,
    Bad,
}

impl Tone {
    fn dot_class(self) -> String {
        let tone = match self {
            Self::Good => css::dotGood,
            Self::Pending => css::dotPending,
            Self::Bad => css::dotBad,
        };
        format!("{} {}", css::dot, tone)
    }
}

impl From<FeedStatus> for Tone {
    fn from(status: FeedStatus) -> Self {
        match status {
            FeedStatus::Connected => Self::Good,
            FeedStatus::Connecting => Self::Pending,
            FeedStatus::Errored => Self::Bad,
        }
    }
}

impl From<BackendStatus> for Tone {
    fn from(status: BackendStatus) -> Self {
        match status {
            BackendStatus::Online => Self::Good,
            BackendStatus::Checking => Self::Pending,
            BackendStatus::Offline => Self::Bad,
        }
    }
}

/// Pill showing a tone dot and a label.
#[component]
pub fn StatusBadge(
    #[prop(into)] tone: Signal<Tone>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=css::badge role="status">
            <span class=move || tone.get().dot_class()></span>
            <span class=css::label>{label}</span>
        </span>
    }
}

/// Badge for a live feed.
#[component]
pub fn FeedBadge(#[prop(into)] status: Signal<FeedStatus>) -> impl IntoView {
    let tone = Signal::derive(move || Tone::from(status.get()));
    let label = Signal::derive(move || status.get().label().to_string());
    view! { <StatusBadge tone=tone label=label /> }
}

/// Badge for the backend API.
#[component]
pub fn BackendBadge(#[prop(into)] status: Signal<BackendStatus>) -> impl IntoView {
    let tone = Signal::derive(move || Tone::from(status.get()));
    let label = Signal::derive(move || status.get().label().to_string());
    view! { <StatusBadge tone=tone label=label /> }
}
