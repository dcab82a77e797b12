use std::collections::VecDeque;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::views::ModalOverlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

/// Blocking alerts, shown one at a time in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertQueue {
    pending: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: Alert) {
        // The same alert twice in a row (e.g. several 401s at once) shows once.
        if self.pending.back() == Some(&alert) {
            return;
        }
        self.pending.push_back(alert);
    }

    pub fn current(&self) -> Option<&Alert> {
        self.pending.front()
    }

    pub fn dismiss(&mut self) {
        self.pending.pop_front();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

pub fn use_alerts() -> Signal<AlertQueue> {
    use_context::<Signal<AlertQueue>>()
}

pub fn show_alert(alerts: &mut Signal<AlertQueue>, level: AlertLevel, title: &str, message: &str) {
    alerts.write().push(Alert {
        level,
        title: title.to_string(),
        message: message.to_string(),
    });
}

/// Renders the front of the [`AlertQueue`] as a modal. Mount once per app.
#[component]
pub fn AlertHost() -> Element {
    let mut alerts = use_alerts();
    let Some(alert) = alerts().current().cloned() else {
        return rsx! {};
    };

    let class = match alert.level {
        AlertLevel::Error => "alert-card error",
        AlertLevel::Success => "alert-card success",
        AlertLevel::Info => "alert-card info",
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| alerts.write().dismiss(),
            div {
                class: "{class}",
                h2 { class: "modal-title", "{alert.title}" }
                p { class: "modal-text", "{alert.message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| alerts.write().dismiss(),
                        "OK"
                    }
                }
            }
        }
    }
}
