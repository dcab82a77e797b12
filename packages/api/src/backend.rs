//! The seam between controllers and the network.
//!
//! Every endpoint the client consumes is one method here. [`crate::ApiClient`]
//! is the production implementation; tests supply fakes so controller
//! behaviour (validation short-circuit, 401 handling, partial dashboard
//! failure) can be checked without a server. Authenticated methods take the
//! session token explicitly.

use std::future::Future;

use crate::error::ApiError;
use crate::models::{
    DashboardData, ForgotPasswordRequest, LoginRequest, PredictionInput, PredictionRecord,
    ProfileUpdate, Recommendation, RegisterRequest, ResetPasswordRequest, Summary, TokenResponse,
    UserProfile, VerifyOtpRequest,
};
use crate::session::SessionToken;

/// Default page size of the history list.
pub const HISTORY_PAGE_SIZE: u32 = 10;

/// A window into the prediction history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPage {
    pub limit: u32,
    pub offset: u32,
}

impl Default for HistoryPage {
    fn default() -> Self {
        Self {
            limit: HISTORY_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl HistoryPage {
    pub fn next(self) -> Self {
        Self {
            offset: self.offset + self.limit,
            ..self
        }
    }
}

pub trait Backend {
    fn login(&self, req: &LoginRequest) -> impl Future<Output = Result<TokenResponse, ApiError>>;

    fn register(&self, req: &RegisterRequest) -> impl Future<Output = Result<(), ApiError>>;

    fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn verify_reset_otp(&self, req: &VerifyOtpRequest)
        -> impl Future<Output = Result<(), ApiError>>;

    fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn me(&self, token: &SessionToken) -> impl Future<Output = Result<UserProfile, ApiError>>;

    fn update_me(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>>;

    fn dashboard(
        &self,
        token: &SessionToken,
        chart_param: &str,
    ) -> impl Future<Output = Result<DashboardData, ApiError>>;

    fn predict(
        &self,
        token: &SessionToken,
        input: &PredictionInput,
    ) -> impl Future<Output = Result<PredictionRecord, ApiError>>;

    fn latest_prediction(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<PredictionRecord, ApiError>>;

    fn food_recommendation(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<Recommendation, ApiError>>;

    fn summary(&self, token: &SessionToken) -> impl Future<Output = Result<Summary, ApiError>>;

    fn history(
        &self,
        token: &SessionToken,
        page: HistoryPage,
    ) -> impl Future<Output = Result<Vec<PredictionRecord>, ApiError>>;

    fn history_item(
        &self,
        token: &SessionToken,
        id: i64,
    ) -> impl Future<Output = Result<PredictionRecord, ApiError>>;
}
