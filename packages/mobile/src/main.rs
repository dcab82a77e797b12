//! Mobile shell. Navigation is a pair of screen signals instead of a router:
//! one for the signed-out flow, one for the drawer.

use dioxus::prelude::*;

use ui::components::Spinner;
use ui::views::{
    AppLayoutView, DashboardView, ForgotPasswordView, HistoryView, LoginView, PredictionView,
    ProfileView, RecommendationView, RegisterView, ResetPasswordView, SummaryView, VerifyOtpView,
};
use ui::{use_auth, AuthProvider, AuthScreen, Screen};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        AuthProvider {
            Shell {}
        }
    }
}

#[component]
fn Shell() -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            Spinner { label: "Checking session..." }
        };
    }

    if auth().is_authenticated() {
        rsx! { SignedIn {} }
    } else {
        rsx! { SignedOut {} }
    }
}

#[component]
fn SignedOut() -> Element {
    let mut screen = use_signal(AuthScreen::default);

    let back = move |_: ()| {
        let previous = screen.peek().back();
        if let Some(previous) = previous {
            screen.set(previous);
        }
    };

    match screen() {
        AuthScreen::Login => rsx! {
            LoginView {
                // Shell swaps to the drawer once the session is set
                on_success: move |_| {},
                on_register: move |_| screen.set(AuthScreen::Register),
                on_forgot_password: move |_| screen.set(AuthScreen::ForgotPassword),
            }
        },
        AuthScreen::Register => rsx! {
            RegisterView {
                on_registered: move |_| screen.set(AuthScreen::Login),
                on_login: move |_| screen.set(AuthScreen::Login),
            }
        },
        AuthScreen::ForgotPassword => rsx! {
            ForgotPasswordView {
                on_sent: move |email: String| screen.set(AuthScreen::VerifyOtp { email }),
                on_back: back,
            }
        },
        AuthScreen::VerifyOtp { email } => rsx! {
            VerifyOtpView {
                email,
                on_verified: move |email: String| screen.set(AuthScreen::ResetPassword { email }),
                on_back: back,
            }
        },
        AuthScreen::ResetPassword { email } => rsx! {
            ResetPasswordView {
                email,
                on_done: move |_| screen.set(AuthScreen::Login),
                on_back: back,
            }
        },
    }
}

#[component]
fn SignedIn() -> Element {
    let mut active = use_signal(Screen::default);

    let body = match active() {
        Screen::Dashboard => rsx! {
            DashboardView { on_predict: move |_| active.set(Screen::Prediction) }
        },
        Screen::Prediction => rsx! {
            PredictionView { on_recommendation: move |_| active.set(Screen::Recommendation) }
        },
        Screen::Recommendation => rsx! {
            RecommendationView { on_predict: move |_| active.set(Screen::Prediction) }
        },
        Screen::Summary => rsx! { SummaryView {} },
        Screen::History => rsx! { HistoryView {} },
        Screen::Profile => rsx! { ProfileView {} },
    };

    rsx! {
        AppLayoutView {
            active: active(),
            on_navigate: move |screen| active.set(screen),
            // Shell swaps back to the login flow on its own
            on_logout: move |_| {},
            {body}
        }
    }
}
