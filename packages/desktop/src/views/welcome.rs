//! Signed-out flow. Login, registration and the three reset steps share one
//! route; the step and the reset email live in an `AuthScreen` signal.

use dioxus::prelude::*;
use ui::use_auth;
use ui::views::{
    ForgotPasswordView, LoginView, RegisterView, ResetPasswordView, VerifyOtpView,
};
use ui::AuthScreen;

use crate::Route;

#[component]
pub fn Welcome() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut step = use_signal(AuthScreen::default);

    // Covers both a fresh login and a session restored after this mounted
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let back = move |_: ()| {
        let previous = step.peek().back();
        if let Some(previous) = previous {
            step.set(previous);
        }
    };

    match step() {
        AuthScreen::Login => rsx! {
            LoginView {
                on_success: move |_| {},
                on_register: move |_| step.set(AuthScreen::Register),
                on_forgot_password: move |_| step.set(AuthScreen::ForgotPassword),
            }
        },
        AuthScreen::Register => rsx! {
            RegisterView {
                on_registered: move |_| step.set(AuthScreen::Login),
                on_login: move |_| step.set(AuthScreen::Login),
            }
        },
        AuthScreen::ForgotPassword => rsx! {
            ForgotPasswordView {
                on_sent: move |email: String| step.set(AuthScreen::VerifyOtp { email }),
                on_back: back,
            }
        },
        AuthScreen::VerifyOtp { email } => rsx! {
            VerifyOtpView {
                email,
                on_verified: move |email: String| step.set(AuthScreen::ResetPassword { email }),
                on_back: back,
            }
        },
        AuthScreen::ResetPassword { email } => rsx! {
            ResetPasswordView {
                email,
                on_done: move |_| step.set(AuthScreen::Login),
                on_back: back,
            }
        },
    }
}
