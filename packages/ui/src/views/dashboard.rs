use api::format::{format_measure, format_probability, format_timestamp};
use api::{load_dashboard, ChartParam, PredictionRecord};
use dioxus::prelude::*;

use crate::auth::{use_api, use_app_config, use_auth, use_error_reporter};
use crate::chart::LineChart;
use crate::components::{Button, ButtonVariant, EmptyState, Spinner, StatCard};

use super::Fetched;

#[component]
pub fn DashboardView(on_predict: EventHandler<()>) -> Element {
    let auth = use_auth();
    let client = use_api();
    let config = use_app_config();
    let reporter = use_error_reporter();
    let mut selected = use_signal(|| {
        ChartParam::from_query(&config.dashboard.default_chart).unwrap_or_default()
    });
    let mut refresh = use_signal(|| 0u32);

    let overview = use_resource(move || {
        let client = client.clone();
        async move {
            let _ = refresh();
            let token = auth.peek().token()?;
            let result = load_dashboard(&client, &token, *selected.peek()).await;
            Some(Fetched::from_result(result, reporter))
        }
    });

    let greeting = auth()
        .user
        .map(|u| format!("Hello, {}", u.name))
        .unwrap_or_else(|| "Hello".to_string());
    let bmi = auth()
        .user
        .and_then(|u| u.bmi().zip(u.bmi_category()))
        .map(|(value, category)| (format!("BMI {value:.1}"), category));

    let body = match overview() {
        None | Some(None) => rsx! { Spinner { label: "Loading dashboard..." } },
        Some(Some(Fetched::NoData)) => rsx! {
            EmptyState {
                title: "No data yet",
                message: "Make your first prediction to see your statistics.",
                Button { onclick: move |_| on_predict.call(()), "Make a prediction" }
            }
        },
        Some(Some(Fetched::Failed(message))) => rsx! {
            EmptyState {
                title: "Could not load the dashboard",
                message,
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| refresh += 1,
                    "Try again"
                }
            }
        },
        Some(Some(Fetched::Ready(data))) => {
            let stats = data.user.clone();
            let param = selected();
            let points = data.series(param).to_vec();
            let recent = data.recent.clone();
            rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: "Predictions", value: "{stats.total_predictions}" }
                    StatCard { label: "Diabetes", value: "{stats.diabetes_count}", tone: "bad" }
                    StatCard { label: "No Diabetes", value: "{stats.non_diabetes_count}", tone: "good" }
                    StatCard {
                        label: "Avg. probability",
                        value: stats.avg_probability.map(format_probability).unwrap_or_else(|| "-".into()),
                    }
                }

                section {
                    class: "card",
                    div {
                        class: "chip-row",
                        for p in ChartParam::ALL {
                            button {
                                key: "{p.as_query()}",
                                class: if p == param { "chip active" } else { "chip" },
                                onclick: move |_| selected.set(p),
                                "{p.label()}"
                            }
                        }
                    }
                    LineChart { points, label: param.label().to_string() }
                }

                section {
                    class: "card",
                    h2 { class: "card-title", "Recent predictions" }
                    if recent.is_empty() {
                        p { class: "muted", "No predictions yet." }
                    }
                    for record in recent {
                        RecentRow { key: "{record.id.unwrap_or_default()}", record }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-toolbar",
                h2 { "{greeting}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| refresh += 1,
                    "Refresh"
                }
            }

            if let Some((value, category)) = bmi {
                div {
                    class: "bmi-banner {category.tone()}",
                    span { "{value}" }
                    strong { "{category.label()}" }
                }
            }

            {body}
        }
    }
}

#[component]
fn RecentRow(record: PredictionRecord) -> Element {
    let outcome = record.outcome();
    let probability = format_probability(record.probability);
    let glucose = format_measure(record.glucose, "mg/dL");
    let created = format_timestamp(record.created_at.as_deref());
    rsx! {
        div {
            class: "record-row",
            span {
                class: if outcome.is_diabetes() { "badge bad" } else { "badge good" },
                "{outcome.label()}"
            }
            span { "{probability}" }
            span { class: "muted", "Glucose {glucose}" }
            span { class: "muted", "{created}" }
        }
    }
}
