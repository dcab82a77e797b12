//! # HTTP client for the diabetes-risk REST backend
//!
//! [`ApiClient`] is a thin, cloneable wrapper around [`reqwest::Client`] that
//! knows the backend base URL and the JSON conventions of every endpoint:
//!
//! - every request carries `Content-Type: application/json`;
//! - authenticated requests carry `Authorization: Bearer <token>`, with the
//!   token handed in by the caller for each call;
//! - responses are decoded into the typed models in [`crate::models`].
//!
//! ## Status mapping
//!
//! | Response | Authenticated call | `/auth/*` call |
//! |----------|--------------------|----------------|
//! | 2xx | decoded body | decoded body |
//! | 401 | [`ApiError::Unauthorized`] | [`ApiError::Server`] with the backend `detail` ("Invalid credentials") |
//! | 404 | [`ApiError::NotFound`] | [`ApiError::Server`] ("Email not registered") |
//! | other | [`ApiError::Server`] | [`ApiError::Server`] |
//! | transport failure | [`ApiError::Network`] | [`ApiError::Network`] |
//!
//! The `/auth/*` endpoints use 401/404 to reject credentials, not sessions,
//! so they never trigger a forced logout.
//!
//! There is no retry. On native targets the request is bounded by a timeout;
//! in the browser the fetch API governs.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::AppConfig;

use crate::backend::{Backend, HistoryPage};
use crate::error::ApiError;
use crate::models::{
    DashboardData, ForgotPasswordRequest, LoginRequest, PredictionInput, PredictionRecord,
    ProfileUpdate, Recommendation, RegisterRequest, ResetPasswordRequest, Summary, TokenResponse,
    UserProfile, VerifyOtpRequest,
};
use crate::session::SessionToken;

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;
#[cfg(not(target_arch = "wasm32"))]
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Whether a call carries the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth<'a> {
    Anonymous,
    Bearer(&'a SessionToken),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: build_http(),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, auth: Auth<'_>) -> RequestBuilder {
        let req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        match auth {
            Auth::Anonymous => req,
            Auth::Bearer(token) => req.bearer_auth(token.expose()),
        }
    }

    async fn send(&self, req: RequestBuilder, auth: Auth<'_>) -> Result<Response, ApiError> {
        let response = req.send().await.map_err(|e| {
            tracing::warn!("Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let authenticated = matches!(auth, Auth::Bearer(_));
        match status {
            StatusCode::UNAUTHORIZED if authenticated => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND if authenticated => Err(ApiError::NotFound),
            _ => {
                let body = response.text().await.unwrap_or_default();
                tracing::debug!("Backend returned {}: {}", status, body);
                Err(ApiError::Server {
                    status: status.as_u16(),
                    detail: parse_detail(&body),
                })
            }
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        auth: Auth<'_>,
    ) -> Result<T, ApiError> {
        let response = self.send(req, auth).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("Undecodable response: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// For endpoints whose success payload the client does not use.
    async fn send_ignoring_body(&self, req: RequestBuilder, auth: Auth<'_>) -> Result<(), ApiError> {
        self.send(req, auth).await.map(|_| ())
    }

    async fn post_anonymous<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let req = self.request(Method::POST, path, Auth::Anonymous).json(body);
        self.send_ignoring_body(req, Auth::Anonymous).await
    }

    async fn get_authed<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &SessionToken,
    ) -> Result<T, ApiError> {
        let auth = Auth::Bearer(token);
        self.send_json(self.request(Method::GET, path, auth), auth)
            .await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

/// FastAPI error bodies look like `{"detail": "..."}`; validation errors put
/// a list there instead, which is not user-facing text.
fn parse_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: serde_json::Value,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

impl Backend for ApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let http = self
            .request(Method::POST, "/auth/login", Auth::Anonymous)
            .json(req);
        self.send_json(http, Auth::Anonymous).await
    }

    async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        self.post_anonymous("/auth/register", req).await
    }

    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.post_anonymous("/auth/forgot-password", req).await
    }

    async fn verify_reset_otp(&self, req: &VerifyOtpRequest) -> Result<(), ApiError> {
        self.post_anonymous("/auth/verify-reset-otp", req).await
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post_anonymous("/auth/reset-password", req).await
    }

    async fn me(&self, token: &SessionToken) -> Result<UserProfile, ApiError> {
        self.get_authed("/user/me", token).await
    }

    async fn update_me(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let auth = Auth::Bearer(token);
        let req = self.request(Method::PUT, "/user/me", auth).json(update);
        self.send_json(req, auth).await
    }

    async fn dashboard(
        &self,
        token: &SessionToken,
        chart_param: &str,
    ) -> Result<DashboardData, ApiError> {
        let auth = Auth::Bearer(token);
        let req = self
            .request(Method::GET, "/dashboard", auth)
            .query(&[("chart_param", chart_param)]);
        self.send_json(req, auth).await
    }

    async fn predict(
        &self,
        token: &SessionToken,
        input: &PredictionInput,
    ) -> Result<PredictionRecord, ApiError> {
        let auth = Auth::Bearer(token);
        let req = self.request(Method::POST, "/predict", auth).json(input);
        self.send_json(req, auth).await
    }

    async fn latest_prediction(&self, token: &SessionToken) -> Result<PredictionRecord, ApiError> {
        self.get_authed("/predict/latest", token).await
    }

    async fn food_recommendation(&self, token: &SessionToken) -> Result<Recommendation, ApiError> {
        self.get_authed("/recommend/food", token).await
    }

    async fn summary(&self, token: &SessionToken) -> Result<Summary, ApiError> {
        self.get_authed("/summary/", token).await
    }

    async fn history(
        &self,
        token: &SessionToken,
        page: HistoryPage,
    ) -> Result<Vec<PredictionRecord>, ApiError> {
        let auth = Auth::Bearer(token);
        let req = self
            .request(Method::GET, "/history/", auth)
            .query(&[("limit", page.limit), ("offset", page.offset)]);
        self.send_json(req, auth).await
    }

    async fn history_item(
        &self,
        token: &SessionToken,
        id: i64,
    ) -> Result<PredictionRecord, ApiError> {
        self.get_authed(&format!("/history/{id}"), token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token() -> SessionToken {
        SessionToken::new("test-token")
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"email": "ani@gmail.com", "password": "Secret1!"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt-value",
                "token_type": "bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&format!("{}/", server.uri()));
        let res = client
            .login(&LoginRequest {
                email: "ani@gmail.com".into(),
                password: "Secret1!".into(),
            })
            .await
            .unwrap();
        assert_eq!(res.access_token, "jwt-value");
    }

    #[tokio::test]
    async fn test_rejected_login_is_not_a_session_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let err = client
            .login(&LoginRequest {
                email: "ani@gmail.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                detail: Some("Invalid credentials".into())
            }
        );
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_authenticated_call_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/me"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "name": "Ani", "email": "ani@gmail.com",
                "weight": 55.0, "height": 160.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let profile = client.me(&token()).await.unwrap();
        assert_eq!(profile.name, "Ani");
        assert_eq!(profile.bmi(), Some(21.5));
    }

    #[tokio::test]
    async fn test_status_mapping_for_authenticated_calls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recommend/food"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/predict/latest"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        assert_eq!(client.summary(&token()).await.unwrap_err(), ApiError::Unauthorized);
        assert_eq!(
            client.food_recommendation(&token()).await.unwrap_err(),
            ApiError::NotFound
        );
        assert_eq!(
            client.latest_prediction(&token()).await.unwrap_err(),
            ApiError::Server {
                status: 500,
                detail: None
            }
        );
    }

    #[tokio::test]
    async fn test_dashboard_and_history_query_strings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .and(query_param("chart_param", "blood_pressure"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "chart_data": [{"date": "2024-11-01", "value": 80.0}],
                "user": {"total_predictions": 1, "diabetes_count": 0, "non_diabetes_count": 1},
                "recent_user_predictions": []
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/history/"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "prediction": 0, "probability": 10.0}
            ])))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let data = client.dashboard(&token(), "blood_pressure").await.unwrap();
        assert_eq!(data.chart_data[0].value, Some(80.0));
        assert_eq!(data.user.non_diabetes_count, 1);

        let page = HistoryPage::default().next();
        let items = client.history(&token(), page).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, Some(4));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.summary(&token()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summary/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        assert!(matches!(
            client.summary(&token()).await.unwrap_err(),
            ApiError::Decode(_)
        ));
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(
            parse_detail(r#"{"detail": "Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert_eq!(parse_detail(r#"{"detail": [{"loc": ["body"]}]}"#), None);
        assert_eq!(parse_detail("Internal Server Error"), None);
    }
}
