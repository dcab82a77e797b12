use api::forms::{submit_register, RegisterForm};
use dioxus::prelude::*;

use crate::alerts::{show_alert, use_alerts, AlertLevel};
use crate::auth::{use_api, use_error_reporter};
use crate::components::{Button, ButtonVariant, ErrorText, Field};

use super::AuthCard;

#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_api();
    let reporter = use_error_reporter();
    let mut alerts = use_alerts();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = submit_register(&client, &form()).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    show_alert(
                        &mut alerts,
                        AlertLevel::Success,
                        "Registration successful",
                        "Your account is ready. Please sign in.",
                    );
                    form.set(RegisterForm::default());
                    on_registered.call(());
                }
                Err(e) => error.set(reporter.inline(&e)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Create account",
            subtitle: "Register with your Gmail address",

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }

                Field {
                    id: "register-name",
                    label: "Name",
                    value: form().name,
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                Field {
                    id: "register-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@gmail.com",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                Field {
                    id: "register-password",
                    label: "Password",
                    r#type: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                Field {
                    id: "register-confirm",
                    label: "Confirm password",
                    r#type: "password",
                    value: form().confirm_password,
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
                p {
                    class: "field-hint",
                    "At least 8 characters with upper-case and lower-case letters, a digit and a symbol."
                }

                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "auth-link",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
