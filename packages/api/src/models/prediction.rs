//! Prediction input and stored prediction records.

use serde::{Deserialize, Serialize};

/// `POST /predict` body. Field names follow the backend's lower-case aliases.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionInput {
    pub pregnancies: f64,
    pub glucose: f64,
    #[serde(rename = "bloodPressure")]
    pub blood_pressure: f64,
    pub bmi: f64,
    pub dpf: f64,
}

/// One stored prediction, as returned by `/predict`, `/predict/latest`,
/// `/history` and inside the dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pregnancies: Option<f64>,
    #[serde(default)]
    pub glucose: Option<f64>,
    #[serde(default, alias = "bloodPressure")]
    pub blood_pressure: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub dpf: Option<f64>,
    /// 1 = diabetes, 0 = no diabetes.
    pub prediction: i64,
    /// Percentage, 0–100.
    pub probability: f64,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

impl PredictionRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_prediction(self.prediction)
    }
}

/// Classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Diabetes,
    NoDiabetes,
}

impl Outcome {
    pub fn from_prediction(value: i64) -> Self {
        if value == 1 {
            Self::Diabetes
        } else {
            Self::NoDiabetes
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::NoDiabetes => "No Diabetes",
        }
    }

    pub fn is_diabetes(self) -> bool {
        matches!(self, Self::Diabetes)
    }
}
