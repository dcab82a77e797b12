//! Request and response bodies of the unauthenticated `/auth/*` endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` success body.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
}
