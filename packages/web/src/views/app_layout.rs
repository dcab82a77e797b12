use dioxus::prelude::*;
use ui::components::Spinner;
use ui::use_auth;
use ui::views::AppLayoutView;

use crate::Route;

/// Drawer layout for the signed-in routes. Anonymous visitors, and sessions
/// that end while a page is open, go back to the login page.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    if !auth().is_authenticated() {
        return rsx! {
            Spinner {}
        };
    }

    rsx! {
        AppLayoutView {
            active: route.screen(),
            on_navigate: move |screen| {
                nav.push(Route::from(screen));
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
