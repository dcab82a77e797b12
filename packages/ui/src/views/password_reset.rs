//! Forgot password, OTP verification and the new-password step.

use api::forms::{
    resend_otp, submit_forgot_password, submit_reset_password, submit_verify_otp,
    ForgotPasswordForm, ResetPasswordForm, VerifyOtpForm,
};
use api::validation::sanitize_otp;
use dioxus::prelude::*;

use crate::alerts::{show_alert, use_alerts, AlertLevel};
use crate::auth::{use_api, use_error_reporter};
use crate::components::{Button, ButtonVariant, ErrorText, Field};

use super::AuthCard;

#[component]
pub fn ForgotPasswordView(on_sent: EventHandler<String>, on_back: EventHandler<()>) -> Element {
    let client = use_api();
    let reporter = use_error_reporter();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let form = ForgotPasswordForm { email: email() };
            let result = submit_forgot_password(&client, &form).await;
            loading.set(false);
            match result {
                Ok(email) => on_sent.call(email),
                Err(e) => error.set(reporter.inline(&e)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Forgot password",
            subtitle: "We will email you a 6-digit code",

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }
                Field {
                    id: "forgot-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@gmail.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Sending..." } else { "Send code" }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                class: "auth-link",
                onclick: move |_| on_back.call(()),
                "Back to sign in"
            }
        }
    }
}

#[component]
pub fn VerifyOtpView(
    email: String,
    on_verified: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    let client = use_api();
    let reporter = use_error_reporter();
    let mut alerts = use_alerts();
    let mut otp = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut resending = use_signal(|| false);

    let handle_verify = {
        let client = client.clone();
        let email = email.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let form = VerifyOtpForm {
                email: email.clone(),
                otp: otp(),
            };
            spawn(async move {
                error.set(None);
                loading.set(true);
                let result = submit_verify_otp(&client, &form).await;
                loading.set(false);
                match result {
                    Ok(()) => on_verified.call(form.email),
                    Err(e) => error.set(reporter.inline(&e)),
                }
            });
        }
    };

    let handle_resend = {
        let email = email.clone();
        move |_: MouseEvent| {
            let client = client.clone();
            let email = email.clone();
            spawn(async move {
                resending.set(true);
                let result = resend_otp(&client, &email).await;
                resending.set(false);
                match result {
                    Ok(()) => show_alert(
                        &mut alerts,
                        AlertLevel::Success,
                        "Code sent",
                        &format!("A new code was sent to {email}"),
                    ),
                    Err(e) => error.set(reporter.inline(&e)),
                }
            });
        }
    };

    rsx! {
        AuthCard {
            title: "Verify OTP",
            subtitle: "Enter the code sent to {email}",

            form {
                class: "auth-form",
                onsubmit: handle_verify,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }
                Field {
                    id: "otp-code",
                    label: "OTP code",
                    placeholder: "123456",
                    value: otp(),
                    oninput: move |evt: FormEvent| otp.set(sanitize_otp(&evt.value())),
                }
                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Verifying..." } else { "Verify" }
                }
            }

            div {
                class: "auth-footer",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "auth-link",
                    disabled: resending(),
                    onclick: handle_resend,
                    if resending() { "Sending..." } else { "Resend code" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "auth-link",
                    onclick: move |_| on_back.call(()),
                    "Back"
                }
            }
        }
    }
}

#[component]
pub fn ResetPasswordView(email: String, on_done: EventHandler<()>, on_back: EventHandler<()>) -> Element {
    let client = use_api();
    let reporter = use_error_reporter();
    let mut alerts = use_alerts();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let form = ResetPasswordForm {
            email: email.clone(),
            password: password(),
            confirm_password: confirm(),
        };
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = submit_reset_password(&client, &form).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    show_alert(
                        &mut alerts,
                        AlertLevel::Success,
                        "Password updated",
                        "Sign in with your new password.",
                    );
                    on_done.call(());
                }
                Err(e) => error.set(reporter.inline(&e)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Reset password",
            subtitle: "Choose a new password",

            form {
                class: "auth-form",
                onsubmit: handle_reset,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }
                Field {
                    id: "reset-password",
                    label: "New password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Field {
                    id: "reset-confirm",
                    label: "Confirm password",
                    r#type: "password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Save password" }
                }
            }

            Button {
                variant: ButtonVariant::Ghost,
                class: "auth-link",
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
