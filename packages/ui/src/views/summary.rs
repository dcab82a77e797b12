use api::format::{format_measure, format_probability, format_timestamp};
use api::{Backend, Outcome, Summary};
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, EmptyState, Spinner, StatCard};

use super::Fetched;

#[component]
pub fn SummaryView() -> Element {
    let auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut refresh = use_signal(|| 0u32);

    let summary = use_resource(move || {
        let client = client.clone();
        async move {
            let _ = refresh();
            let token = auth.peek().token()?;
            Some(Fetched::from_result(client.summary(&token).await, reporter))
        }
    });

    let body = match summary() {
        None | Some(None) => rsx! { Spinner { label: "Loading summary..." } },
        Some(Some(Fetched::Ready(s))) if s.total_predictions > 0 => rsx! { SummaryBody { summary: s } },
        Some(Some(Fetched::Ready(_))) | Some(Some(Fetched::NoData)) => rsx! {
            EmptyState {
                title: "No predictions yet",
                message: "Your summary appears after your first prediction.",
            }
        },
        Some(Some(Fetched::Failed(message))) => rsx! {
            EmptyState { title: "Could not load the summary", message }
        },
    };

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-toolbar",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| refresh += 1,
                    "Refresh"
                }
            }
            {body}
        }
    }
}

#[component]
fn SummaryBody(summary: Summary) -> Element {
    let diabetes_share = format!("{}%", summary.diabetes_share());
    let healthy_share = format!("{}%", summary.non_diabetes_share());
    let avg_probability = summary
        .avg_probability
        .map(format_probability)
        .unwrap_or_else(|| "-".to_string());
    let avg_glucose = format_measure(summary.avg_glucose, "mg/dL");
    let avg_bp = format_measure(summary.avg_blood_pressure, "mmHg");
    let latest = summary.latest.clone().map(|l| {
        let outcome = Outcome::from_prediction(l.prediction);
        (
            outcome,
            format_probability(l.probability),
            format_timestamp(l.created_at.as_deref()),
        )
    });

    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Total predictions", value: "{summary.total_predictions}" }
            StatCard { label: "Diabetes", value: "{summary.diabetes_count} ({diabetes_share})", tone: "bad" }
            StatCard { label: "No Diabetes", value: "{summary.non_diabetes_count} ({healthy_share})", tone: "good" }
        }

        section {
            class: "card",
            h2 { class: "card-title", "Averages" }
            dl {
                class: "kv",
                dt { "Probability" }
                dd { "{avg_probability}" }
                dt { "Glucose" }
                dd { "{avg_glucose}" }
                dt { "Blood pressure" }
                dd { "{avg_bp}" }
            }
        }

        if let Some((outcome, probability, created)) = latest {
            section {
                class: if outcome.is_diabetes() { "card result-card bad" } else { "card result-card good" },
                h2 { class: "card-title", "Latest: {outcome.label()}" }
                p { "Probability {probability}" }
                p { class: "muted", "{created}" }
            }
        }
    }
}
