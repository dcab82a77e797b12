//! Error taxonomy for every backend call and every client-side check.
//!
//! Views never look at HTTP status integers. They ask an [`ApiError`] for its
//! [`Disposition`] and react to that: show the message next to the form, drop
//! the session, render an empty state, or raise a blocking alert.

/// A client-side validation failure. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Please enter your email")]
    EmailRequired,

    #[error("Email must use the @gmail.com domain")]
    InvalidEmailDomain,

    #[error("Password must be at least 8 characters and contain upper-case and lower-case letters, a digit and a symbol")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Enter the OTP code")]
    OtpRequired,

    #[error("The OTP code must be 6 digits")]
    OtpLength,

    #[error("Start the password reset from the forgot-password screen")]
    MissingResetEmail,

    #[error("Name must not be empty")]
    NameRequired,

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },
}

/// Errors produced by [`crate::ApiClient`] and the controllers built on it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Rejected client-side; no request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered 401: the token is missing, invalid or expired.
    #[error("Your session has ended. Please sign in again.")]
    Unauthorized,

    /// The backend answered 404: nothing recorded yet.
    #[error("No data yet")]
    NotFound,

    /// Any other non-success status.
    #[error("Server error (status {status})")]
    Server { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

/// How the UI should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Show next to the form; keep the fields.
    Inline,
    /// Clear the token, alert, and return to the login screen.
    ForceLogout,
    /// Render the "no data yet" empty state.
    NoData,
    /// Blocking alert; keep the fields for resubmission.
    Alert,
}

impl ApiError {
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Validation(_) => Disposition::Inline,
            Self::Unauthorized => Disposition::ForceLogout,
            Self::NotFound => Disposition::NoData,
            Self::Server { .. } | Self::Network(_) | Self::Decode(_) => Disposition::Alert,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text for the user. Prefers the backend's `detail` when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispositions_cover_taxonomy() {
        assert_eq!(
            ApiError::from(ValidationError::MissingFields).disposition(),
            Disposition::Inline
        );
        assert_eq!(ApiError::Unauthorized.disposition(), Disposition::ForceLogout);
        assert_eq!(ApiError::NotFound.disposition(), Disposition::NoData);
        assert_eq!(
            ApiError::Server { status: 500, detail: None }.disposition(),
            Disposition::Alert
        );
        assert_eq!(
            ApiError::Network("connection refused".into()).disposition(),
            Disposition::Alert
        );
        assert_eq!(ApiError::Decode("eof".into()).disposition(), Disposition::Alert);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: Some("Email already registered".into()),
        };
        assert_eq!(err.user_message(), "Email already registered");

        let err = ApiError::Server { status: 502, detail: None };
        assert_eq!(err.user_message(), "Server error (status 502)");

        let err = ApiError::from(ValidationError::NotPositive { field: "Weight" });
        assert_eq!(err.user_message(), "Weight must be greater than 0");
    }
}
