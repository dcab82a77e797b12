//! Signed-in window: drawer layout plus one thin page per drawer entry.

use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;
use ui::views::{
    AppLayoutView, DashboardView, HistoryView, PredictionView, ProfileView, RecommendationView,
    SummaryView,
};
use ui::Screen;

#[cfg(feature = "desktop")]
use crate::window_title;
use crate::Route;

/// Drawer layout. Keeps the window title on the open page and sends the
/// window back to `/welcome` once the session is gone.
#[component]
pub fn Workspace() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let screen = route.screen();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            nav.replace(Route::Welcome {});
        }
    });

    #[cfg(feature = "desktop")]
    use_effect(use_reactive!(|screen| {
        dioxus::desktop::window().set_title(&window_title(screen));
    }));

    if !auth().is_authenticated() {
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        AppLayoutView {
            active: screen.unwrap_or_default(),
            on_navigate: move |screen: Screen| {
                nav.push(Route::from(screen));
            },
            // The auth effect above moves the window to `/welcome`
            on_logout: move |_| {},
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView { on_predict: move |_| { nav.push(Route::Prediction {}); } }
    }
}

#[component]
pub fn Prediction() -> Element {
    let nav = use_navigator();
    rsx! {
        PredictionView { on_recommendation: move |_| { nav.push(Route::Recommendation {}); } }
    }
}

#[component]
pub fn Recommendation() -> Element {
    let nav = use_navigator();
    rsx! {
        RecommendationView { on_predict: move |_| { nav.push(Route::Prediction {}); } }
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
