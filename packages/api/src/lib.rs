//! # API crate: everything between the screens and the diabetes-risk backend
//!
//! The web, desktop and mobile frontends render; this crate decides. It owns
//! the wire models, the HTTP client, client-side validation, the session
//! lifecycle and the derived values the screens display.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: typed `reqwest` calls for every backend endpoint |
//! | [`backend`] | [`Backend`] trait the controllers are generic over |
//! | [`error`] | [`ApiError`] / [`ValidationError`] and the UI [`Disposition`] of each |
//! | [`validation`] | Email, password, OTP and number checks |
//! | [`forms`] | One controller per form: validate, then submit |
//! | [`session`] | Token lifecycle: login, logout, restore, JWT expiry |
//! | [`dashboard`] | Concurrent per-parameter chart loading |
//! | [`history`] | Paged prediction history and outcome counts |
//! | [`bmi`] | BMI and its category |
//! | [`format`] | Timestamps, percentages, measurements |
//! | [`models`] | JSON bodies mirrored from the backend |
//!
//! ## Endpoints
//!
//! - **Auth** (no token): `login`, `register`, `forgot_password`, `verify_reset_otp`, `reset_password`
//! - **Profile**: `me`, `update_me`
//! - **Predictions**: `predict`, `latest_prediction`, `history`, `history_item`
//! - **Reports**: `dashboard`, `summary`, `food_recommendation`

pub mod backend;
pub mod bmi;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod forms;
pub mod history;
pub mod models;
pub mod session;
pub mod validation;

#[cfg(test)]
mod testing;

pub use backend::{Backend, HistoryPage};
pub use client::ApiClient;
pub use dashboard::{load_dashboard, ChartParam, DashboardOverview};
pub use error::{ApiError, Disposition, ValidationError};
pub use models::*;
pub use session::{Restored, SessionEvent, SessionState, SessionToken};

pub use store::AppConfig;
