//! Desktop shell. The window has no address bar, so only the drawer pages
//! are routes; the signed-out flow is a single `/welcome` route that steps
//! through `AuthScreen` in a signal.

use dioxus::prelude::*;

use ui::{AuthProvider, Screen};
use views::{Dashboard, History, Prediction, Profile, Recommendation, Summary, Welcome, Workspace};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/welcome")]
    Welcome {},
    #[layout(Workspace)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/prediction")]
        Prediction {},
        #[route("/recommendation")]
        Recommendation {},
        #[route("/summary")]
        Summary {},
        #[route("/history")]
        History {},
        #[route("/profile")]
        Profile {},
}

impl Route {
    /// Drawer page this route shows, `None` outside the workspace.
    fn screen(&self) -> Option<Screen> {
        match self {
            Route::Root {} | Route::Welcome {} => None,
            Route::Dashboard {} => Some(Screen::Dashboard),
            Route::Prediction {} => Some(Screen::Prediction),
            Route::Recommendation {} => Some(Screen::Recommendation),
            Route::Summary {} => Some(Screen::Summary),
            Route::History {} => Some(Screen::History),
            Route::Profile {} => Some(Screen::Profile),
        }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Dashboard => Route::Dashboard {},
            Screen::Prediction => Route::Prediction {},
            Screen::Recommendation => Route::Recommendation {},
            Screen::Summary => Route::Summary {},
            Screen::History => Route::History {},
            Screen::Profile => Route::Profile {},
        }
    }
}

const APP_TITLE: &str = "Diabetes Risk";

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let window = WindowBuilder::new()
            .with_title(APP_TITLE)
            .with_inner_size(LogicalSize::new(1100.0, 760.0))
            .with_min_inner_size(LogicalSize::new(420.0, 600.0));
        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(window))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

/// Window title for a drawer page, or the bare app name.
#[cfg_attr(not(feature = "desktop"), allow(dead_code))]
fn window_title(screen: Option<Screen>) -> String {
    match screen {
        Some(screen) => format!("{} - {APP_TITLE}", screen.title()),
        None => APP_TITLE.to_string(),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Pick the first screen once the saved session has been checked
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Welcome {});
        }
    }

    rsx! {
        ui::components::Spinner { label: "Checking session..." }
    }
}
