use api::format::{format_measure, format_probability, format_timestamp};
use api::history::{load_first_page, load_more, HistoryList};
use api::{Backend, PredictionRecord};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, EmptyState, Spinner, StatCard};

use super::{Fetched, ModalOverlay};

#[component]
pub fn HistoryView() -> Element {
    let auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut list = use_signal(|| Option::<Fetched<HistoryList>>::None);
    let mut loading_more = use_signal(|| false);
    let mut detail = use_signal(|| Option::<PredictionRecord>::None);
    let mut refresh = use_signal(|| 0u32);

    let first_client = client.clone();
    let _loader = use_resource(move || {
        let client = first_client.clone();
        async move {
            let _ = refresh();
            let Some(token) = auth.peek().token() else {
                return;
            };
            list.set(None);
            let result = load_first_page(&client, &token).await;
            list.set(Some(Fetched::from_result(result, reporter)));
        }
    });

    let more_client = client.clone();
    let handle_more = move |_: MouseEvent| {
        let client = more_client.clone();
        let Some(Fetched::Ready(current)) = list() else {
            return;
        };
        spawn(async move {
            let Some(token) = auth().token() else {
                return;
            };
            loading_more.set(true);
            match load_more(&client, &token, current).await {
                Ok(next) => list.set(Some(Fetched::Ready(next))),
                Err(e) => {
                    reporter.report(&e);
                }
            }
            loading_more.set(false);
        });
    };

    let open_detail = use_callback(move |id: i64| {
        let client = client.clone();
        spawn(async move {
            let Some(token) = auth().token() else {
                return;
            };
            match client.history_item(&token, id).await {
                Ok(record) => detail.set(Some(record)),
                Err(e) => {
                    reporter.report(&e);
                }
            }
        });
    });

    let body = match list() {
        None => rsx! { Spinner { label: "Loading history..." } },
        Some(Fetched::Ready(history)) if !history.records.is_empty() => {
            let counts = history.counts();
            rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: "Loaded", value: "{history.records.len()}" }
                    StatCard { label: "Healthy", value: "{counts.healthy}", tone: "good" }
                    StatCard { label: "Diabetic", value: "{counts.diabetic}", tone: "bad" }
                }
                section {
                    class: "card",
                    for record in history.records.iter().cloned() {
                        HistoryRow {
                            key: "{record.id.unwrap_or_default()}",
                            record,
                            on_open: open_detail,
                        }
                    }
                    if history.has_more {
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "w-full",
                            disabled: loading_more(),
                            onclick: handle_more,
                            if loading_more() { "Loading..." } else { "Load more" }
                        }
                    }
                }
            }
        }
        Some(Fetched::Ready(_)) | Some(Fetched::NoData) => rsx! {
            EmptyState {
                title: "No history yet",
                message: "Predictions you make will be listed here.",
            }
        },
        Some(Fetched::Failed(message)) => rsx! {
            EmptyState {
                title: "Could not load history",
                message,
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| refresh += 1,
                    "Try again"
                }
            }
        },
    };

    rsx! {
        div {
            class: "screen",
            {body}
        }

        if let Some(record) = detail() {
            ModalOverlay {
                on_close: move |_| detail.set(None),
                RecordDetail { record }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| detail.set(None),
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(record: PredictionRecord, on_open: EventHandler<i64>) -> Element {
    let outcome = record.outcome();
    let probability = format_probability(record.probability);
    let created = format_timestamp(record.created_at.as_deref());
    let id = record.id;

    rsx! {
        button {
            class: "record-row clickable",
            disabled: id.is_none(),
            onclick: move |_| {
                if let Some(id) = id {
                    on_open.call(id);
                }
            },
            span {
                class: if outcome.is_diabetes() { "badge bad" } else { "badge good" },
                "{outcome.label()}"
            }
            span { "{probability}" }
            span { class: "muted", "{created}" }
        }
    }
}

#[component]
fn RecordDetail(record: PredictionRecord) -> Element {
    let outcome = record.outcome();
    let rows = [
        ("Pregnancies", format_measure(record.pregnancies, "")),
        ("Glucose", format_measure(record.glucose, "mg/dL")),
        ("Blood pressure", format_measure(record.blood_pressure, "mmHg")),
        ("BMI", format_measure(record.bmi, "")),
        ("DPF", format_measure(record.dpf, "")),
        ("Probability", format_probability(record.probability)),
        ("Date", format_timestamp(record.created_at.as_deref())),
    ];

    rsx! {
        div {
            class: "modal-body",
            h2 { class: "modal-title", "{outcome.label()}" }
            dl {
                class: "kv",
                for (label, value) in rows {
                    dt { key: "{label}", "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}
