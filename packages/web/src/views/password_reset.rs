//! Forgot password, OTP check and new password. The email travels in the
//! query string between steps.

use dioxus::prelude::*;
use ui::views::{ForgotPasswordView, ResetPasswordView, VerifyOtpView};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();

    rsx! {
        ForgotPasswordView {
            on_sent: move |email: String| {
                nav.push(Route::VerifyOtp { email });
            },
            on_back: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn VerifyOtp(email: String) -> Element {
    let nav = use_navigator();

    if email.is_empty() {
        nav.replace(Route::ForgotPassword {});
        return rsx! {};
    }

    rsx! {
        VerifyOtpView {
            email,
            on_verified: move |email: String| {
                nav.push(Route::ResetPassword { email });
            },
            on_back: move |_| {
                nav.replace(Route::ForgotPassword {});
            },
        }
    }
}

#[component]
pub fn ResetPassword(email: String) -> Element {
    let nav = use_navigator();

    if email.is_empty() {
        nav.replace(Route::ForgotPassword {});
        return rsx! {};
    }

    let back_email = email.clone();
    rsx! {
        ResetPasswordView {
            email,
            on_done: move |_| {
                nav.replace(Route::Login {});
            },
            on_back: move |_| {
                nav.replace(Route::VerifyOtp { email: back_email.clone() });
            },
        }
    }
}
