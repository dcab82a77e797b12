//! Signed-in pages. Each renders the shared view and maps its navigation
//! callbacks onto routes.

use dioxus::prelude::*;
use ui::views::{
    DashboardView, HistoryView, PredictionView, ProfileView, RecommendationView, SummaryView,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_predict: move |_| {
                nav.push(Route::Prediction {});
            },
        }
    }
}

#[component]
pub fn Prediction() -> Element {
    let nav = use_navigator();
    rsx! {
        PredictionView {
            on_recommendation: move |_| {
                nav.push(Route::Recommendation {});
            },
        }
    }
}

#[component]
pub fn Recommendation() -> Element {
    let nav = use_navigator();
    rsx! {
        RecommendationView {
            on_predict: move |_| {
                nav.push(Route::Prediction {});
            },
        }
    }
}

#[component]
pub fn Summary() -> Element {
    rsx! { SummaryView {} }
}

#[component]
pub fn History() -> Element {
    rsx! { HistoryView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}
