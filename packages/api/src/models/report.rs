//! Read-only aggregates: dashboard, summary statistics, food recommendations.

use serde::{Deserialize, Serialize};

use super::prediction::{Outcome, PredictionRecord};

/// A single point of a per-parameter chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardUserStats {
    #[serde(default)]
    pub total_predictions: u64,
    #[serde(default)]
    pub diabetes_count: u64,
    #[serde(default)]
    pub non_diabetes_count: u64,
    #[serde(default)]
    pub avg_probability: Option<f64>,
    #[serde(default)]
    pub last_prediction: Option<PredictionRecord>,
}

/// `GET /dashboard?chart_param=<p>` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    #[serde(default)]
    pub user: DashboardUserStats,
    #[serde(default)]
    pub recent_user_predictions: Vec<PredictionRecord>,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryLatest {
    #[serde(default)]
    pub id: Option<i64>,
    pub prediction: i64,
    pub probability: f64,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

/// `GET /summary/` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    #[serde(default)]
    pub total_predictions: u64,
    #[serde(default)]
    pub diabetes_count: u64,
    #[serde(default)]
    pub non_diabetes_count: u64,
    #[serde(default)]
    pub avg_probability: Option<f64>,
    #[serde(default)]
    pub avg_glucose: Option<f64>,
    #[serde(default)]
    pub avg_blood_pressure: Option<f64>,
    #[serde(default)]
    pub latest: Option<SummaryLatest>,
}

impl Summary {
    pub fn diabetes_share(&self) -> String {
        crate::format::percentage(self.diabetes_count, self.total_predictions)
    }

    pub fn non_diabetes_share(&self) -> String {
        crate::format::percentage(self.non_diabetes_count, self.total_predictions)
    }
}

/// `GET /recommend/food` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub prediction: Option<i64>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

fn default_status() -> String {
    "success".to_string()
}

impl Recommendation {
    pub fn outcome(&self) -> Option<Outcome> {
        self.prediction.map(Outcome::from_prediction)
    }

    pub fn headline(&self) -> &'static str {
        match self.outcome() {
            Some(Outcome::Diabetes) => "Diabetes risk detected",
            _ => "Healthy condition",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self.outcome() {
            Some(Outcome::Diabetes) => {
                "These foods help keep your blood sugar under control"
            }
            _ => "These foods help you stay healthy",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
