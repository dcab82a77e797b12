use api::format::{format_probability, format_timestamp};
use api::forms::{load_latest_prediction, submit_prediction, PredictionForm};
use api::PredictionRecord;
use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, use_error_reporter};
use crate::components::{Button, ButtonVariant, ErrorText, Field};

#[component]
pub fn PredictionView(on_recommendation: EventHandler<()>) -> Element {
    let auth = use_auth();
    let client = use_api();
    let reporter = use_error_reporter();
    let mut form = use_signal(PredictionForm::default);
    let mut result = use_signal(|| Option::<PredictionRecord>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Prefill the form and result card from the latest stored prediction
    let latest_client = client.clone();
    let _prefill = use_resource(move || {
        let client = latest_client.clone();
        async move {
            let Some(token) = auth.peek().token() else {
                return;
            };
            match load_latest_prediction(&client, &token).await {
                Ok(Some(record)) => {
                    form.set(PredictionForm::from_record(&record));
                    result.set(Some(record));
                }
                Ok(None) => {}
                Err(e) => {
                    reporter.report(&e);
                }
            }
        }
    });

    let handle_predict = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let Some(token) = auth().token() else {
                return;
            };
            loading.set(true);
            let outcome = submit_prediction(&client, &token, &form()).await;
            loading.set(false);
            match outcome {
                Ok(record) => result.set(Some(record)),
                Err(e) => error.set(reporter.inline(&e)),
            }
        });
    };

    let handle_reset = move |_: MouseEvent| {
        form.write().reset();
        result.set(None);
        error.set(None);
    };

    rsx! {
        div {
            class: "screen",
            form {
                class: "card form-grid",
                onsubmit: handle_predict,

                if let Some(err) = error() {
                    ErrorText { message: err }
                }

                Field {
                    id: "pregnancies",
                    label: "Pregnancies",
                    placeholder: "0",
                    value: form().pregnancies,
                    oninput: move |evt: FormEvent| form.write().pregnancies = evt.value(),
                }
                Field {
                    id: "glucose",
                    label: "Glucose (mg/dL)",
                    placeholder: "120",
                    value: form().glucose,
                    oninput: move |evt: FormEvent| form.write().glucose = evt.value(),
                }
                Field {
                    id: "blood-pressure",
                    label: "Blood pressure (mmHg)",
                    placeholder: "70",
                    value: form().blood_pressure,
                    oninput: move |evt: FormEvent| form.write().blood_pressure = evt.value(),
                }
                Field {
                    id: "bmi",
                    label: "BMI",
                    placeholder: "24.5",
                    value: form().bmi,
                    oninput: move |evt: FormEvent| form.write().bmi = evt.value(),
                }
                Field {
                    id: "dpf",
                    label: "Diabetes pedigree function",
                    placeholder: "0.5",
                    value: form().dpf,
                    oninput: move |evt: FormEvent| form.write().dpf = evt.value(),
                }

                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Predicting..." } else { "Predict" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_reset,
                        "Reset"
                    }
                }
            }

            if let Some(record) = result() {
                ResultCard { record, on_recommendation }
            }
        }
    }
}

#[component]
fn ResultCard(record: PredictionRecord, on_recommendation: EventHandler<()>) -> Element {
    let outcome = record.outcome();
    let probability = format_probability(record.probability);
    let created = format_timestamp(record.created_at.as_deref());
    let message = if outcome.is_diabetes() {
        "Your parameters indicate a diabetes risk. Please consult a doctor."
    } else {
        "Your parameters do not indicate diabetes. Keep up a healthy lifestyle."
    };

    rsx! {
        section {
            class: if outcome.is_diabetes() { "card result-card bad" } else { "card result-card good" },
            h2 { class: "card-title", "{outcome.label()}" }
            p { class: "result-probability", "Probability {probability}" }
            p { "{message}" }
            p { class: "muted", "{created}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_recommendation.call(()),
                "See food recommendations"
            }
        }
    }
}
