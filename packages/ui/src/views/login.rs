//! Sign-in screen.

use api::forms::LoginForm;
use api::session;
use api::{Backend, SessionEvent};
use dioxus::prelude::*;

use crate::auth::{sign_in, use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, ErrorText, Field};
use crate::token_store::current_token_store;

use super::AuthCard;

#[component]
pub fn LoginView(
    on_success: EventHandler<()>,
    on_register: EventHandler<()>,
    on_forgot_password: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let form = LoginForm {
                email: email(),
                password: password(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            loading.set(true);
            auth.write().apply(SessionEvent::LoginStarted);
            match session::login(&client, &current_token_store(), &form).await {
                Ok(token) => {
                    // the drawer header can live without the profile
                    let user = client.me(&token).await.ok();
                    sign_in(&mut auth, token, user);
                    loading.set(false);
                    password.set(String::new());
                    on_success.call(());
                }
                Err(e) => {
                    loading.set(false);
                    auth.write().apply(SessionEvent::LoginFailed);
                    error.set(reporter.inline(&e));
                }
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Welcome back",
            subtitle: "Sign in to check your diabetes risk",

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }

                Field {
                    id: "login-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "you@gmail.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Field {
                    id: "login-password",
                    label: "Password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    class: "auth-link align-end",
                    onclick: move |_| on_forgot_password.call(()),
                    "Forgot password?"
                }

                Button {
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-footer",
                "No account yet? "
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "auth-link",
                    onclick: move |_| on_register.call(()),
                    "Register"
                }
            }
        }
    }
}
