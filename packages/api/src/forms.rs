//! # Form controllers
//!
//! One struct of raw field strings per screen. `validate()` turns it into the
//! typed request body or the first [`ValidationError`]; the `submit_*`
//! functions validate first and only then touch the [`Backend`], so an
//! invalid form never produces a request.
//!
//! | Form | Endpoint |
//! |------|----------|
//! | [`LoginForm`] | `POST /auth/login` (see [`crate::session::login`]) |
//! | [`RegisterForm`] | `POST /auth/register` |
//! | [`ForgotPasswordForm`] | `POST /auth/forgot-password` |
//! | [`VerifyOtpForm`] | `POST /auth/verify-reset-otp` |
//! | [`ResetPasswordForm`] | `POST /auth/reset-password` |
//! | [`PredictionForm`] | `POST /predict` |
//! | [`ProfileForm`] | `PUT /user/me` |

use crate::backend::Backend;
use crate::error::{ApiError, ValidationError};
use crate::models::{
    ForgotPasswordRequest, LoginRequest, PredictionInput, PredictionRecord, ProfileUpdate,
    RegisterRequest, ResetPasswordRequest, UserProfile, VerifyOtpRequest,
};
use crate::session::SessionToken;
use crate::validation::{
    is_valid_email, is_valid_otp, is_valid_password, parse_number, parse_positive,
};

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn normalized_email(email: &str) -> String {
    email.trim().to_string()
}

fn check_email(email: &str) -> Result<String, ValidationError> {
    if blank(email) {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailDomain);
    }
    Ok(normalized_email(email))
}

fn check_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if blank(&self.email) || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            email: check_email(&self.email)?,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if blank(&self.name)
            || blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        let email = check_email(&self.email)?;
        check_new_password(&self.password, &self.confirm_password)?;
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email,
            password: self.password.clone(),
        })
    }
}

pub async fn submit_register<B: Backend>(backend: &B, form: &RegisterForm) -> Result<(), ApiError> {
    let request = form.validate()?;
    backend.register(&request).await?;
    tracing::info!("Registered {}", request.email);
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<ForgotPasswordRequest, ValidationError> {
        Ok(ForgotPasswordRequest {
            email: check_email(&self.email)?,
        })
    }
}

/// Sends the OTP mail. Returns the normalized email the OTP screen continues with.
pub async fn submit_forgot_password<B: Backend>(
    backend: &B,
    form: &ForgotPasswordForm,
) -> Result<String, ApiError> {
    let request = form.validate()?;
    backend.forgot_password(&request).await?;
    tracing::info!("Requested password reset OTP");
    Ok(request.email)
}

/// Ask for a fresh OTP from the verification screen.
pub async fn resend_otp<B: Backend>(backend: &B, email: &str) -> Result<(), ApiError> {
    if blank(email) {
        return Err(ApiError::from(ValidationError::MissingResetEmail));
    }
    let request = ForgotPasswordRequest {
        email: normalized_email(email),
    };
    backend.forgot_password(&request).await
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyOtpForm {
    /// Carried over from the forgot-password screen.
    pub email: String,
    pub otp: String,
}

impl VerifyOtpForm {
    pub fn validate(&self) -> Result<VerifyOtpRequest, ValidationError> {
        if blank(&self.email) {
            return Err(ValidationError::MissingResetEmail);
        }
        let otp = self.otp.trim();
        if otp.is_empty() {
            return Err(ValidationError::OtpRequired);
        }
        if !is_valid_otp(otp) {
            return Err(ValidationError::OtpLength);
        }
        Ok(VerifyOtpRequest {
            email: normalized_email(&self.email),
            otp: otp.to_string(),
        })
    }
}

pub async fn submit_verify_otp<B: Backend>(
    backend: &B,
    form: &VerifyOtpForm,
) -> Result<(), ApiError> {
    let request = form.validate()?;
    backend.verify_reset_otp(&request).await
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<ResetPasswordRequest, ValidationError> {
        if blank(&self.email) {
            return Err(ValidationError::MissingResetEmail);
        }
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        check_new_password(&self.password, &self.confirm_password)?;
        Ok(ResetPasswordRequest {
            email: normalized_email(&self.email),
            password: self.password.clone(),
        })
    }
}

pub async fn submit_reset_password<B: Backend>(
    backend: &B,
    form: &ResetPasswordForm,
) -> Result<(), ApiError> {
    let request = form.validate()?;
    backend.reset_password(&request).await?;
    tracing::info!("Password reset completed");
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub bmi: String,
    pub dpf: String,
}

impl PredictionForm {
    /// Prefill from the latest stored prediction.
    pub fn from_record(record: &PredictionRecord) -> Self {
        let field = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        Self {
            pregnancies: field(record.pregnancies),
            glucose: field(record.glucose),
            blood_pressure: field(record.blood_pressure),
            bmi: field(record.bmi),
            dpf: field(record.dpf),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<PredictionInput, ValidationError> {
        let fields = [
            &self.pregnancies,
            &self.glucose,
            &self.blood_pressure,
            &self.bmi,
            &self.dpf,
        ];
        if fields.iter().any(|f| blank(f)) {
            return Err(ValidationError::MissingFields);
        }
        Ok(PredictionInput {
            pregnancies: parse_number("Pregnancies", &self.pregnancies)?,
            glucose: parse_number("Glucose", &self.glucose)?,
            blood_pressure: parse_number("Blood pressure", &self.blood_pressure)?,
            bmi: parse_number("BMI", &self.bmi)?,
            dpf: parse_number("DPF", &self.dpf)?,
        })
    }
}

pub async fn submit_prediction<B: Backend>(
    backend: &B,
    token: &SessionToken,
    form: &PredictionForm,
) -> Result<PredictionRecord, ApiError> {
    let input = form.validate()?;
    let record = backend.predict(token, &input).await?;
    tracing::info!(
        "Prediction stored: {} ({:.1}%)",
        record.outcome().label(),
        record.probability
    );
    Ok(record)
}

/// The latest stored prediction, `None` while the user has none (404).
/// Every other error, 401 included, is returned for the caller to report.
pub async fn load_latest_prediction<B: Backend>(
    backend: &B,
    token: &SessionToken,
) -> Result<Option<PredictionRecord>, ApiError> {
    match backend.latest_prediction(token).await {
        Ok(record) => Ok(Some(record)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub weight: String,
    pub height: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let field = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
        Self {
            name: profile.name.clone(),
            weight: field(profile.weight),
            height: field(profile.height),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        if blank(&self.name) {
            return Err(ValidationError::NameRequired);
        }
        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            weight: parse_positive("Weight", &self.weight)?,
            height: parse_positive("Height", &self.height)?,
        })
    }
}

pub async fn submit_profile<B: Backend>(
    backend: &B,
    token: &SessionToken,
    form: &ProfileForm,
) -> Result<UserProfile, ApiError> {
    let update = form.validate()?;
    let profile = backend.update_me(token, &update).await?;
    tracing::info!("Profile updated");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    fn token() -> SessionToken {
        SessionToken::new("t")
    }

    #[test]
    fn test_login_validation() {
        let empty = LoginForm::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingFields));

        let yahoo = LoginForm {
            email: "ani@yahoo.com".into(),
            password: "x".into(),
        };
        assert_eq!(yahoo.validate(), Err(ValidationError::InvalidEmailDomain));

        let ok = LoginForm {
            email: " ani@gmail.com ".into(),
            password: "whatever".into(),
        };
        assert_eq!(ok.validate().unwrap().email, "ani@gmail.com");
    }

    #[test]
    fn test_register_validation_order() {
        let mut form = RegisterForm {
            name: "Ani".into(),
            email: "ani@gmail.com".into(),
            password: "Secret1!".into(),
            confirm_password: "Secret1?".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        form.password = "weakpass".into();
        form.confirm_password = "weakpass".into();
        assert_eq!(form.validate(), Err(ValidationError::WeakPassword));

        form.name = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[tokio::test]
    async fn test_invalid_forms_never_reach_backend() {
        let backend = FakeBackend::default();

        let register = RegisterForm {
            name: "Ani".into(),
            email: "ani@outlook.com".into(),
            password: "Secret1!".into(),
            confirm_password: "Secret1!".into(),
        };
        assert!(submit_register(&backend, &register).await.is_err());

        let forgot = ForgotPasswordForm {
            email: "".into(),
        };
        assert_eq!(
            submit_forgot_password(&backend, &forgot).await,
            Err(ApiError::from(ValidationError::EmailRequired))
        );

        let otp = VerifyOtpForm {
            email: "ani@gmail.com".into(),
            otp: "123".into(),
        };
        assert_eq!(
            submit_verify_otp(&backend, &otp).await,
            Err(ApiError::from(ValidationError::OtpLength))
        );

        let reset = ResetPasswordForm {
            email: "".into(),
            password: "Secret1!".into(),
            confirm_password: "Secret1!".into(),
        };
        assert_eq!(
            submit_reset_password(&backend, &reset).await,
            Err(ApiError::from(ValidationError::MissingResetEmail))
        );

        let prediction = PredictionForm {
            glucose: "148".into(),
            ..Default::default()
        };
        assert!(submit_prediction(&backend, &token(), &prediction).await.is_err());

        let profile = ProfileForm {
            name: "Ani".into(),
            weight: "0".into(),
            height: "160".into(),
        };
        assert_eq!(
            submit_profile(&backend, &token(), &profile).await,
            Err(ApiError::from(ValidationError::NotPositive { field: "Weight" }))
        );

        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_password_reset_flow() {
        let backend = FakeBackend::default();

        let email = submit_forgot_password(
            &backend,
            &ForgotPasswordForm {
                email: " ani@gmail.com".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(email, "ani@gmail.com");

        submit_verify_otp(
            &backend,
            &VerifyOtpForm {
                email: email.clone(),
                otp: "004211".into(),
            },
        )
        .await
        .unwrap();
        resend_otp(&backend, &email).await.unwrap();

        submit_reset_password(
            &backend,
            &ResetPasswordForm {
                email,
                password: "NewSecret1!".into(),
                confirm_password: "NewSecret1!".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                "forgot_password",
                "verify_reset_otp",
                "forgot_password",
                "reset_password"
            ]
        );
    }

    #[tokio::test]
    async fn test_backend_rejection_is_surfaced() {
        let backend = FakeBackend::default().failing(
            "verify_reset_otp",
            ApiError::Server {
                status: 400,
                detail: Some("Invalid OTP".into()),
            },
        );
        let err = submit_verify_otp(
            &backend,
            &VerifyOtpForm {
                email: "ani@gmail.com".into(),
                otp: "000000".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.user_message(), "Invalid OTP");
    }

    #[test]
    fn test_prediction_form() {
        let form = PredictionForm {
            pregnancies: "2".into(),
            glucose: "148".into(),
            blood_pressure: "72".into(),
            bmi: "33,6".into(),
            dpf: "0.627".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.bmi, 33.6);
        assert_eq!(input.blood_pressure, 72.0);

        let bad = PredictionForm {
            dpf: "abc".into(),
            ..form.clone()
        };
        assert_eq!(
            bad.validate(),
            Err(ValidationError::InvalidNumber { field: "DPF" })
        );

        let mut prefilled = PredictionForm::from_record(&PredictionRecord {
            id: Some(1),
            pregnancies: Some(2.0),
            glucose: Some(148.0),
            blood_pressure: None,
            bmi: Some(33.6),
            dpf: Some(0.627),
            prediction: 1,
            probability: 71.3,
            created_at: None,
        });
        assert_eq!(prefilled.glucose, "148");
        assert_eq!(prefilled.blood_pressure, "");
        assert_eq!(prefilled.dpf, "0.627");

        prefilled.reset();
        assert_eq!(prefilled, PredictionForm::default());
    }

    #[tokio::test]
    async fn test_latest_prediction_not_found_is_empty() {
        let backend = FakeBackend::default();
        let latest = load_latest_prediction(&backend, &token()).await.unwrap();
        assert_eq!(latest.map(|r| r.id), Some(Some(3)));

        let none = FakeBackend::default().failing("latest_prediction", ApiError::NotFound);
        assert_eq!(load_latest_prediction(&none, &token()).await, Ok(None));
    }

    #[tokio::test]
    async fn test_latest_prediction_keeps_unauthorized() {
        let backend = FakeBackend::default().failing("latest_prediction", ApiError::Unauthorized);
        assert_eq!(
            load_latest_prediction(&backend, &token()).await,
            Err(ApiError::Unauthorized)
        );
    }

    #[tokio::test]
    async fn test_profile_update() {
        let backend = FakeBackend::default();
        let form = ProfileForm {
            name: " Ani ".into(),
            weight: "65,5".into(),
            height: "160".into(),
        };
        let update = form.validate().unwrap();
        assert_eq!(update.name, "Ani");
        assert_eq!(update.weight, 65.5);

        let profile = submit_profile(&backend, &token(), &form).await.unwrap();
        assert_eq!(profile.weight, Some(65.5));
        assert_eq!(backend.calls(), vec!["update_me"]);
    }
}
