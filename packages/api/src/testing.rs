//! In-process [`Backend`] for controller tests. Records the name of every
//! call so tests can assert that nothing was sent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::{Backend, HistoryPage};
use crate::error::ApiError;
use crate::models::{
    ChartPoint, DashboardData, DashboardUserStats, ForgotPasswordRequest, LoginRequest,
    PredictionInput, PredictionRecord, ProfileUpdate, Recommendation, RegisterRequest,
    ResetPasswordRequest, Summary, TokenResponse, UserProfile, VerifyOtpRequest,
};
use crate::session::SessionToken;

pub fn record(id: i64, prediction: i64) -> PredictionRecord {
    PredictionRecord {
        id: Some(id),
        pregnancies: Some(1.0),
        glucose: Some(120.0),
        blood_pressure: Some(70.0),
        bmi: Some(24.0),
        dpf: Some(0.5),
        prediction,
        probability: if prediction == 1 { 70.0 } else { 20.0 },
        created_at: Some("2024-11-02T08:15:00".into()),
    }
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    calls: Arc<Mutex<Vec<&'static str>>>,
    failures: HashMap<&'static str, ApiError>,
    failing_chart: Option<&'static str>,
    token: Option<String>,
    history_len: usize,
}

impl FakeBackend {
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn failing(mut self, call: &'static str, err: ApiError) -> Self {
        self.failures.insert(call, err);
        self
    }

    /// `GET /dashboard?chart_param=<param>` answers 500.
    pub fn failing_chart(mut self, param: &'static str) -> Self {
        self.failing_chart = Some(param);
        self
    }

    pub fn with_history(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn hit(&self, call: &'static str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.get(call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: Some(1),
            name: "Ani".into(),
            email: "ani@gmail.com".into(),
            weight: Some(55.0),
            height: Some(160.0),
            created_at: None,
        }
    }
}

impl Backend for FakeBackend {
    async fn login(&self, _req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.hit("login")?;
        Ok(TokenResponse {
            access_token: self.token.clone().unwrap_or_else(|| "token".into()),
            token_type: Some("bearer".into()),
        })
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<(), ApiError> {
        self.hit("register")
    }

    async fn forgot_password(&self, _req: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.hit("forgot_password")
    }

    async fn verify_reset_otp(&self, _req: &VerifyOtpRequest) -> Result<(), ApiError> {
        self.hit("verify_reset_otp")
    }

    async fn reset_password(&self, _req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.hit("reset_password")
    }

    async fn me(&self, _token: &SessionToken) -> Result<UserProfile, ApiError> {
        self.hit("me")?;
        Ok(Self::profile())
    }

    async fn update_me(
        &self,
        _token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.hit("update_me")?;
        Ok(UserProfile {
            name: update.name.clone(),
            weight: Some(update.weight),
            height: Some(update.height),
            ..Self::profile()
        })
    }

    async fn dashboard(
        &self,
        _token: &SessionToken,
        chart_param: &str,
    ) -> Result<DashboardData, ApiError> {
        self.hit("dashboard")?;
        if self.failing_chart == Some(chart_param) {
            return Err(ApiError::Server {
                status: 500,
                detail: None,
            });
        }
        Ok(DashboardData {
            user: DashboardUserStats {
                total_predictions: 3,
                diabetes_count: 1,
                non_diabetes_count: 2,
                ..Default::default()
            },
            recent_user_predictions: vec![record(3, 1)],
            chart_data: vec![ChartPoint {
                date: "2024-11-02".into(),
                value: Some(1.0),
            }],
        })
    }

    async fn predict(
        &self,
        _token: &SessionToken,
        input: &PredictionInput,
    ) -> Result<PredictionRecord, ApiError> {
        self.hit("predict")?;
        Ok(PredictionRecord {
            glucose: Some(input.glucose),
            ..record(4, 1)
        })
    }

    async fn latest_prediction(&self, _token: &SessionToken) -> Result<PredictionRecord, ApiError> {
        self.hit("latest_prediction")?;
        Ok(record(3, 1))
    }

    async fn food_recommendation(&self, _token: &SessionToken) -> Result<Recommendation, ApiError> {
        self.hit("food_recommendation")?;
        Ok(Recommendation {
            status: "success".into(),
            prediction: Some(1),
            probability: Some(70.0),
            recommendations: vec!["Oatmeal".into()],
            created_at: None,
        })
    }

    async fn summary(&self, _token: &SessionToken) -> Result<Summary, ApiError> {
        self.hit("summary")?;
        Ok(Summary::default())
    }

    async fn history(
        &self,
        _token: &SessionToken,
        page: HistoryPage,
    ) -> Result<Vec<PredictionRecord>, ApiError> {
        self.hit("history")?;
        let start = page.offset as usize;
        let end = (start + page.limit as usize).min(self.history_len);
        Ok((start..end)
            .map(|i| record(i as i64 + 1, (i % 2) as i64))
            .collect())
    }

    async fn history_item(
        &self,
        _token: &SessionToken,
        id: i64,
    ) -> Result<PredictionRecord, ApiError> {
        self.hit("history_item")?;
        Ok(record(id, 0))
    }
}
