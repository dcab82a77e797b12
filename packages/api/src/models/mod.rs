//! Wire models mirrored from the backend's JSON.

mod auth;
mod prediction;
mod report;
mod user;

pub use auth::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, TokenResponse,
    VerifyOtpRequest,
};
pub use prediction::{Outcome, PredictionInput, PredictionRecord};
pub use report::{
    ChartPoint, DashboardData, DashboardUserStats, Recommendation, Summary, SummaryLatest,
};
pub use user::{ProfileUpdate, UserProfile};
