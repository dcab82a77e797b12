//! # Dashboard aggregation
//!
//! The backend serves one chart series per request
//! (`GET /dashboard?chart_param=<p>`). [`load_dashboard`] fans out one
//! request per [`ChartParam`] concurrently and merges the series; a failed
//! series becomes an empty one without affecting the others. A final request
//! for the selected parameter supplies the user statistics and recent
//! predictions, and its error is the one the caller sees.

use std::collections::BTreeMap;

use futures::future::join_all;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{ChartPoint, DashboardData, DashboardUserStats, PredictionRecord};
use crate::session::SessionToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChartParam {
    Pregnancies,
    #[default]
    Glucose,
    BloodPressure,
    Bmi,
    Dpf,
    Prediction,
}

impl ChartParam {
    pub const ALL: [ChartParam; 6] = [
        Self::Pregnancies,
        Self::Glucose,
        Self::BloodPressure,
        Self::Bmi,
        Self::Dpf,
        Self::Prediction,
    ];

    pub fn as_query(self) -> &'static str {
        match self {
            Self::Pregnancies => "pregnancies",
            Self::Glucose => "glucose",
            Self::BloodPressure => "blood_pressure",
            Self::Bmi => "bmi",
            Self::Dpf => "dpf",
            Self::Prediction => "prediction",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_query().eq_ignore_ascii_case(value.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pregnancies => "Pregnancies",
            Self::Glucose => "Glucose",
            Self::BloodPressure => "Blood Pressure",
            Self::Bmi => "BMI",
            Self::Dpf => "Diabetes Pedigree Function",
            Self::Prediction => "Prediction",
        }
    }
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardOverview {
    pub charts: BTreeMap<ChartParam, Vec<ChartPoint>>,
    pub user: DashboardUserStats,
    pub recent: Vec<PredictionRecord>,
}

impl DashboardOverview {
    /// Points for `param`; empty means "no data".
    pub fn series(&self, param: ChartParam) -> &[ChartPoint] {
        self.charts.get(&param).map(Vec::as_slice).unwrap_or(&[])
    }
}

pub async fn load_dashboard<B: Backend>(
    backend: &B,
    token: &SessionToken,
    selected: ChartParam,
) -> Result<DashboardOverview, ApiError> {
    let requests = ChartParam::ALL.map(|param| async move {
        let points = match backend.dashboard(token, param.as_query()).await {
            Ok(data) => data.chart_data,
            Err(e) => {
                tracing::warn!("Chart {} unavailable: {}", param.as_query(), e);
                Vec::new()
            }
        };
        (param, points)
    });
    let charts: BTreeMap<_, _> = join_all(requests).await.into_iter().collect();

    let DashboardData {
        user,
        recent_user_predictions,
        ..
    } = backend.dashboard(token, selected.as_query()).await?;

    Ok(DashboardOverview {
        charts,
        user,
        recent: recent_user_predictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[test]
    fn test_query_values() {
        let values: Vec<_> = ChartParam::ALL.iter().map(|p| p.as_query()).collect();
        assert_eq!(
            values,
            ["pregnancies", "glucose", "blood_pressure", "bmi", "dpf", "prediction"]
        );
        assert_eq!(ChartParam::from_query("BMI"), Some(ChartParam::Bmi));
        assert_eq!(ChartParam::from_query("insulin"), None);
        assert_eq!(ChartParam::default(), ChartParam::Glucose);
    }

    #[tokio::test]
    async fn test_every_series_loaded() {
        let backend = FakeBackend::default();
        let view = load_dashboard(&backend, &SessionToken::new("t"), ChartParam::Glucose)
            .await
            .unwrap();

        assert_eq!(view.charts.len(), ChartParam::ALL.len());
        for param in ChartParam::ALL {
            assert_eq!(view.series(param).len(), 1, "{param:?}");
        }
        assert_eq!(view.user.total_predictions, 3);
        // six series plus the statistics request
        assert_eq!(backend.calls().len(), 7);
    }

    #[tokio::test]
    async fn test_one_failed_series_leaves_others_intact() {
        let backend = FakeBackend::default().failing_chart("bmi");
        let view = load_dashboard(&backend, &SessionToken::new("t"), ChartParam::Glucose)
            .await
            .unwrap();

        assert!(view.series(ChartParam::Bmi).is_empty());
        assert_eq!(view.series(ChartParam::Glucose).len(), 1);
        assert_eq!(view.series(ChartParam::Dpf).len(), 1);
        assert_eq!(view.user.total_predictions, 3);
    }

    #[tokio::test]
    async fn test_statistics_failure_is_propagated() {
        let backend = FakeBackend::default().failing_chart("dpf");
        let err = load_dashboard(&backend, &SessionToken::new("t"), ChartParam::Dpf)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Server { status: 500, detail: None });
    }
}
