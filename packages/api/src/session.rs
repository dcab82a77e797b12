//! # Session lifecycle
//!
//! A session is a single bearer token. It lives in a [`store::TokenStore`]
//! between launches and is handed to [`Backend`] calls as a [`SessionToken`].
//!
//! ```text
//!            LoginStarted              LoginSucceeded
//! Anonymous ─────────────▶ Authenticating ─────────────▶ Authenticated
//!     ▲                         │ LoginFailed                  │
//!     └─────────────────────────┴──────────────────────────────┘
//!                     LoggedOut / Unauthorized (from any state)
//! ```
//!
//! [`SessionState::apply`] is the pure transition function; the async
//! helpers below perform the side effects (network, token store) around it.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use store::TokenStore;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::forms::LoginForm;
use crate::models::UserProfile;

/// Opaque bearer token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw value, for the `Authorization` header and the token store.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(SessionToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoginStarted,
    LoginSucceeded(SessionToken),
    LoginFailed,
    LoggedOut,
    /// Any authenticated call came back 401.
    Unauthorized,
}

impl SessionState {
    pub fn apply(self, event: SessionEvent) -> Self {
        use SessionEvent as E;
        match (self, event) {
            (Self::Anonymous, E::LoginStarted) => Self::Authenticating,
            (Self::Anonymous | Self::Authenticating, E::LoginSucceeded(token)) => {
                Self::Authenticated(token)
            }
            (Self::Authenticating, E::LoginFailed) => Self::Anonymous,
            (_, E::LoggedOut | E::Unauthorized) => Self::Anonymous,
            (state, _) => state,
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Self::Authenticated(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Validate the form, exchange the credentials for a token and persist it.
///
/// Nothing is sent and nothing is stored when validation fails.
pub async fn login<B: Backend, S: TokenStore>(
    backend: &B,
    store: &S,
    form: &LoginForm,
) -> Result<SessionToken, ApiError> {
    let request = form.validate()?;
    let response = backend.login(&request).await?;
    let token = SessionToken::new(response.access_token);
    store.save(token.expose()).await;
    tracing::info!("Signed in as {}", request.email);
    Ok(token)
}

pub async fn logout<S: TokenStore>(store: &S) {
    store.clear().await;
    tracing::info!("Signed out");
}

/// Result of [`restore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Restored {
    Anonymous,
    Authenticated {
        token: SessionToken,
        user: UserProfile,
    },
}

/// Resume the session saved by a previous launch.
///
/// The stored token is checked against `GET /user/me`. An expired JWT, a
/// rejected token or an unreachable backend all discard the token and
/// yield [`Restored::Anonymous`].
pub async fn restore<B: Backend, S: TokenStore>(backend: &B, store: &S) -> Restored {
    let Some(raw) = store.load().await else {
        return Restored::Anonymous;
    };
    let token = SessionToken::new(raw);

    if remaining_validity(&token, Utc::now()).is_some_and(|left| left <= TimeDelta::zero()) {
        tracing::info!("Stored session has expired");
        store.clear().await;
        return Restored::Anonymous;
    }

    match backend.me(&token).await {
        Ok(user) => {
            tracing::info!("Restored session for {}", user.email);
            Restored::Authenticated { token, user }
        }
        Err(e) => {
            tracing::warn!("Discarding stored session: {}", e);
            store.clear().await;
            Restored::Anonymous
        }
    }
}

/// Clears the stored token when `err` is a 401. Returns whether it did.
pub async fn expire_on_unauthorized<S: TokenStore>(store: &S, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    tracing::warn!("Session rejected by the backend");
    store.clear().await;
    true
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// The `exp` claim of a JWT, if the token is one and carries it.
pub fn token_expiry(token: &SessionToken) -> Option<DateTime<Utc>> {
    let mut parts = token.expose().split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

/// Time left before the token expires. Negative once it has.
pub fn remaining_validity(token: &SessionToken, now: DateTime<Utc>) -> Option<TimeDelta> {
    token_expiry(token).map(|exp| exp - now)
}

/// How long to wait before logging out automatically: one second past `exp`,
/// or zero if that moment has already gone. `None` for tokens without `exp`.
pub fn logout_delay(token: &SessionToken, now: DateTime<Utc>) -> Option<std::time::Duration> {
    let left = remaining_validity(token, now)? + TimeDelta::seconds(1);
    Some(left.to_std().unwrap_or_default())
}

/// [`logout_delay`] from the current time.
pub fn time_to_logout(token: &SessionToken) -> Option<std::time::Duration> {
    logout_delay(token, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use store::MemoryStore;

    fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","exp":{exp}}}"#));
        format!("{header}.{payload}.signature")
    }

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_transitions() {
        let token = SessionToken::new("t");
        let s = SessionState::Anonymous.apply(SessionEvent::LoginStarted);
        assert_eq!(s, SessionState::Authenticating);
        let s = s.apply(SessionEvent::LoginFailed);
        assert_eq!(s, SessionState::Anonymous);

        let s = SessionState::Anonymous
            .apply(SessionEvent::LoginStarted)
            .apply(SessionEvent::LoginSucceeded(token.clone()));
        assert_eq!(s.token(), Some(&token));

        // a stray failure does not drop an established session
        let s = s.apply(SessionEvent::LoginFailed);
        assert!(s.is_authenticated());

        assert_eq!(
            s.clone().apply(SessionEvent::Unauthorized),
            SessionState::Anonymous
        );
        assert_eq!(s.apply(SessionEvent::LoggedOut), SessionState::Anonymous);
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = SessionToken::new("very-secret");
        assert_eq!(format!("{token:?}"), "SessionToken(***)");
        let state = SessionState::Authenticated(token);
        assert!(!format!("{state:?}").contains("very-secret"));
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let backend = FakeBackend::default().with_token("issued");
        let store = MemoryStore::new();

        let token = login(&backend, &store, &form("ani@gmail.com", "Secret1!"))
            .await
            .unwrap();
        assert_eq!(token.expose(), "issued");
        assert_eq!(store.load().await.as_deref(), Some("issued"));
        assert_eq!(backend.calls(), vec!["login"]);
    }

    #[tokio::test]
    async fn test_invalid_login_sends_nothing() {
        let backend = FakeBackend::default();
        let store = MemoryStore::new();

        let err = login(&backend, &store, &form("ani@yahoo.com", "Secret1!"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(backend.calls().is_empty());
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let store = MemoryStore::with_token("stale");

        assert!(!expire_on_unauthorized(&store, &ApiError::NotFound).await);
        assert_eq!(store.load().await.as_deref(), Some("stale"));

        assert!(expire_on_unauthorized(&store, &ApiError::Unauthorized).await);
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let store = MemoryStore::with_token("abc");
        logout(&store).await;
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_restore() {
        let backend = FakeBackend::default();

        let empty = MemoryStore::new();
        assert_eq!(restore(&backend, &empty).await, Restored::Anonymous);
        assert!(backend.calls().is_empty());

        let saved = MemoryStore::with_token("opaque");
        match restore(&backend, &saved).await {
            Restored::Authenticated { token, user } => {
                assert_eq!(token.expose(), "opaque");
                assert_eq!(user.email, "ani@gmail.com");
            }
            other => panic!("expected a session, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_restore_discards_rejected_token() {
        let backend = FakeBackend::default().failing("me", ApiError::Unauthorized);
        let store = MemoryStore::with_token("revoked");
        assert_eq!(restore(&backend, &store).await, Restored::Anonymous);
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_restore_skips_expired_jwt() {
        let backend = FakeBackend::default();
        let expired = jwt_with_exp(Utc::now().timestamp() - 60);
        let store = MemoryStore::with_token(&expired);

        assert_eq!(restore(&backend, &store).await, Restored::Anonymous);
        assert!(backend.calls().is_empty());
        assert_eq!(store.load().await, None);
    }

    #[test]
    fn test_jwt_expiry() {
        let token = SessionToken::new(jwt_with_exp(1_700_000_000));
        let exp = token_expiry(&token).unwrap();
        assert_eq!(exp.timestamp(), 1_700_000_000);

        let now = DateTime::from_timestamp(1_699_999_940, 0).unwrap();
        assert_eq!(
            remaining_validity(&token, now),
            Some(TimeDelta::seconds(60))
        );

        assert_eq!(
            logout_delay(&token, now),
            Some(std::time::Duration::from_secs(61))
        );
        let later = DateTime::from_timestamp(1_700_000_100, 0).unwrap();
        assert_eq!(logout_delay(&token, later), Some(std::time::Duration::ZERO));

        assert_eq!(token_expiry(&SessionToken::new("not-a-jwt")), None);
        assert_eq!(token_expiry(&SessionToken::new("a.%%%.c")), None);

        let no_exp = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(b"{}"),
            URL_SAFE_NO_PAD.encode(br#"{"sub":"1"}"#)
        );
        assert_eq!(token_expiry(&SessionToken::new(no_exp)), None);
    }
}
