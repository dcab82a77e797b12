use dioxus::prelude::*;

use ui::{AuthProvider, Screen};
use views::{
    AppLayout, Dashboard, ForgotPassword, History, Login, Prediction, Profile, Recommendation,
    Register, ResetPassword, Summary, VerifyOtp,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/verify-otp?:email")]
    VerifyOtp { email: String },
    #[route("/reset-password?:email")]
    ResetPassword { email: String },
    #[layout(AppLayout)]
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
    /// Drawer entry highlighted for this route.
    fn screen(&self) -> Screen {
        match self {
            Route::Prediction {} => Screen::Prediction,
            Route::Recommendation {} => Screen::Recommendation,
            Route::Summary {} => Screen::Summary,
            Route::History {} => Screen::History,
            Route::Profile {} => Screen::Profile,
            _ => Screen::Dashboard,
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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Diabetes Risk" }
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` once the stored session has been checked
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {
        ui::components::Spinner {}
    }
}
