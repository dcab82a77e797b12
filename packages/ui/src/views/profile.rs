use api::format::{format_measure, format_timestamp};
use api::forms::{submit_profile, ProfileForm};
use api::{Backend, UserProfile};
use dioxus::prelude::*;

use crate::alerts::{show_alert, use_alerts, AlertLevel};
use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, EmptyState, ErrorText, Field, Spinner, StatCard};

use super::Fetched;

#[component]
pub fn ProfileView() -> Element {
    let mut auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut alerts = use_alerts();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(ProfileForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let me_client = client.clone();
    let profile = use_resource(move || {
        let client = me_client.clone();
        async move {
            let _ = refresh();
            let token = auth.peek().token()?;
            let result = client.me(&token).await;
            if let Ok(user) = &result {
                auth.write().user = Some(user.clone());
            }
            Some(Fetched::from_result(result, reporter))
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let Some(token) = auth().token() else {
                return;
            };
            saving.set(true);
            let result = submit_profile(&client, &token, &form()).await;
            saving.set(false);
            match result {
                Ok(user) => {
                    auth.write().user = Some(user);
                    editing.set(false);
                    show_alert(&mut alerts, AlertLevel::Success, "Saved", "Profile updated.");
                    refresh += 1;
                }
                Err(e) => error.set(reporter.inline(&e)),
            }
        });
    };

    let user = match profile() {
        None | Some(None) => return rsx! { Spinner { label: "Loading profile..." } },
        Some(Some(Fetched::Ready(user))) => user,
        Some(Some(Fetched::NoData)) | Some(Some(Fetched::Failed(_))) => {
            return rsx! {
                EmptyState {
                    title: "Profile unavailable",
                    message: "Your profile could not be loaded.",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| refresh += 1,
                        "Try again"
                    }
                }
            }
        }
    };

    let start_edit = {
        let user = user.clone();
        move |_: MouseEvent| {
            form.set(ProfileForm::from_profile(&user));
            error.set(None);
            editing.set(true);
        }
    };

    rsx! {
        div {
            class: "screen",
            ProfileHeader { user: user.clone() }

            if editing() {
                form {
                    class: "card form-grid",
                    onsubmit: handle_save,

                    if let Some(err) = error() {
                        ErrorText { message: err }
                    }
                    Field {
                        id: "profile-name",
                        label: "Name",
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    Field {
                        id: "profile-weight",
                        label: "Weight (kg)",
                        placeholder: "65,5",
                        value: form().weight,
                        oninput: move |evt: FormEvent| form.write().weight = evt.value(),
                    }
                    Field {
                        id: "profile-height",
                        label: "Height (cm)",
                        placeholder: "165",
                        value: form().height,
                        oninput: move |evt: FormEvent| form.write().height = evt.value(),
                    }
                    div {
                        class: "form-actions",
                        Button {
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: start_edit,
                    "Edit profile"
                }
            }
        }
    }
}

#[component]
fn ProfileHeader(user: UserProfile) -> Element {
    let weight = format_measure(user.weight, "kg");
    let height = format_measure(user.height, "cm");
    let bmi = user
        .bmi()
        .map(|b| format!("{b:.1}"))
        .unwrap_or_else(|| "-".to_string());
    let (category, tone) = user
        .bmi_category()
        .map(|c| (c.label(), c.tone()))
        .unwrap_or(("Add weight and height", ""));
    let joined = format_timestamp(user.created_at.as_deref());

    rsx! {
        section {
            class: "card profile-card",
            span { class: "avatar", "{user.initial()}" }
            div {
                h2 { class: "card-title", "{user.name}" }
                p { class: "muted", "{user.email}" }
                p { class: "muted", "Member since {joined}" }
            }
        }
        div {
            class: "stat-grid",
            StatCard { label: "Weight", value: weight }
            StatCard { label: "Height", value: height }
            StatCard { label: "BMI", value: bmi, tone: tone.to_string() }
            StatCard { label: "Category", value: category.to_string(), tone: tone.to_string() }
        }
    }
}
