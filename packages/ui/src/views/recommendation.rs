use api::format::{format_probability, format_timestamp};
use api::Backend;
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, EmptyState, Spinner};

use super::Fetched;

/// Food recommendations for the latest prediction. A 404 means no
/// prediction exists yet.
#[component]
pub fn RecommendationView(on_predict: EventHandler<()>) -> Element {
    let auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut refresh = use_signal(|| 0u32);

    let recommendation = use_resource(move || {
        let client = client.clone();
        async move {
            let _ = refresh();
            let token = auth.peek().token()?;
            Some(Fetched::from_result(
                client.food_recommendation(&token).await,
                reporter,
            ))
        }
    });

    let body = match recommendation() {
        None | Some(None) => rsx! { Spinner { label: "Loading recommendations..." } },
        Some(Some(Fetched::Ready(rec))) if !rec.is_empty() => {
            let outcome = rec.outcome();
            let tone = if outcome.is_some_and(|o| o.is_diabetes()) { "bad" } else { "good" };
            let probability = rec.probability.map(format_probability);
            let created = format_timestamp(rec.created_at.as_deref());
            rsx! {
                section {
                    class: "card result-card {tone}",
                    h2 { class: "card-title", "{rec.headline()}" }
                    if let Some(p) = probability {
                        p { class: "result-probability", "Probability {p}" }
                    }
                    p { class: "muted", "Based on your prediction of {created}" }
                }
                section {
                    class: "card",
                    h3 { "{rec.guidance()}" }
                    ul {
                        class: "food-list",
                        for (i, item) in rec.recommendations.iter().enumerate() {
                            li { key: "{i}", "{item}" }
                        }
                    }
                }
            }
        }
        Some(Some(Fetched::Ready(_))) | Some(Some(Fetched::NoData)) => rsx! {
            EmptyState {
                title: "No recommendations yet",
                message: "Make a prediction first to get food recommendations.",
                Button { onclick: move |_| on_predict.call(()), "Make a prediction" }
            }
        },
        Some(Some(Fetched::Failed(message))) => rsx! {
            EmptyState {
                title: "Could not load recommendations",
                message,
            }
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
