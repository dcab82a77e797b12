//! Small form and layout primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Destructive => "btn btn-destructive",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: html_for, {children} }
    }
}

/// Label plus input, stacked.
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id,
                r#type: r#type,
                placeholder: placeholder,
                value: value,
                disabled: disabled,
                oninput: oninput,
            }
        }
    }
}

/// Inline form error.
#[component]
pub fn ErrorText(message: String) -> Element {
    rsx! {
        div { class: "form-error", role: "alert", "{message}" }
    }
}

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            span { class: "spinner-dot" }
            span { "{label}" }
        }
    }
}

#[component]
pub fn EmptyState(title: String, message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            p { "{message}" }
            {children}
        }
    }
}

#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// CSS modifier: `good`, `warn`, `bad` or empty.
    #[props(default)]
    tone: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card {tone}",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
        }
    }
}
