//! Authentication context and hooks for the UI.

use api::session::{self, Restored};
use api::{ApiClient, ApiError, Disposition, SessionEvent, SessionState, SessionToken, UserProfile};
use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use store::{AppConfig, TokenStore};

use crate::alerts::{show_alert, AlertHost, AlertLevel, AlertQueue};
use crate::token_store::{current_token_store, load_app_config, make_token_store, PlatformStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: SessionState,
    pub user: Option<UserProfile>,
    /// True until the stored session has been checked.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: SessionState::Anonymous,
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn token(&self) -> Option<SessionToken> {
        self.session.token().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn apply(&mut self, event: SessionEvent) {
        let clears_user = matches!(event, SessionEvent::LoggedOut | SessionEvent::Unauthorized);
        self.session = std::mem::take(&mut self.session).apply(event);
        if clears_user {
            self.user = None;
        }
        self.loading = false;
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Record a successful login.
pub fn sign_in(auth: &mut Signal<AuthState>, token: SessionToken, user: Option<UserProfile>) {
    let mut state = auth.write();
    state.apply(SessionEvent::LoginSucceeded(token));
    state.user = user;
}

/// Forget the stored token, then drop the session.
///
/// The state flips only after the store is cleared: flipping it unmounts the
/// signed-in layout, and with it any task still running in that scope.
pub async fn sign_out(mut auth: Signal<AuthState>) {
    let store = current_token_store();
    session::logout(&store).await;
    auth.write().apply(SessionEvent::LoggedOut);
}

/// Routes an [`ApiError`] to the surface its [`Disposition`] names.
///
/// Forced logouts and blocking alerts are handled here; the caller handles
/// `Inline` (show `err.user_message()` next to the form) and `NoData`.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    auth: Signal<AuthState>,
    alerts: Signal<AlertQueue>,
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        auth: use_auth(),
        alerts: use_context::<Signal<AlertQueue>>(),
    }
}

impl ErrorReporter {
    pub fn report(self, err: &ApiError) -> Disposition {
        let Self {
            mut auth,
            mut alerts,
        } = self;
        let disposition = err.disposition();
        match disposition {
            Disposition::ForceLogout => {
                let err = err.clone();
                let store = current_token_store();
                // Same ordering as `sign_out`: clear first, then unmount.
                spawn(async move {
                    session::expire_on_unauthorized(&store, &err).await;
                    auth.write().apply(SessionEvent::Unauthorized);
                    show_alert(
                        &mut alerts,
                        AlertLevel::Error,
                        "Session ended",
                        &ApiError::Unauthorized.to_string(),
                    );
                });
            }
            Disposition::Alert => {
                tracing::error!("Request failed: {}", err);
                show_alert(&mut alerts, AlertLevel::Error, "Error", &err.user_message());
            }
            Disposition::Inline | Disposition::NoData => {}
        }
        disposition
    }

    /// [`Self::report`], returning the message when it belongs next to the form.
    pub fn inline(self, err: &ApiError) -> Option<String> {
        match self.report(err) {
            Disposition::Inline => Some(err.user_message()),
            _ => None,
        }
    }
}

async fn sleep(duration: std::time::Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provider component that manages authentication state.
/// Wrap your app with this component; it also provides the [`ApiClient`],
/// the [`AppConfig`], the platform token store and the alert queue.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(load_app_config);
    let client = use_context_provider(|| ApiClient::from_config(&config));
    let token_store: PlatformStore = use_context_provider(make_token_store);
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    let mut alerts = use_context_provider(|| Signal::new(AlertQueue::default()));

    // Resume the saved session on mount
    let restore_store = token_store.clone();
    let _ = use_resource(move || {
        let client = client.clone();
        let store = restore_store.clone();
        async move {
            let state = match session::restore(&client, &store).await {
                Restored::Authenticated { token, user } => {
                    let mut state = AuthState::default();
                    state.apply(SessionEvent::LoginSucceeded(token));
                    state.user = Some(user);
                    state
                }
                Restored::Anonymous => AuthState {
                    loading: false,
                    ..AuthState::default()
                },
            };
            auth_state.set(state);
        }
    });

    // Log out one second after the token's `exp`
    let auto_logout = config.session.auto_logout;
    let mut expiry_task = use_signal(|| Option::<Task>::None);
    use_effect(move || {
        let token = auth_state().token();
        if let Some(task) = expiry_task.write().take() {
            task.cancel();
        }
        if !auto_logout {
            return;
        }
        let Some(delay) = token.as_ref().and_then(session::time_to_logout) else {
            return;
        };
        tracing::debug!("Session expires in {:?}", delay);
        let store = token_store.clone();
        let task = spawn(async move {
            sleep(delay).await;
            store.clear().await;
            auth_state.write().apply(SessionEvent::Unauthorized);
            show_alert(
                &mut alerts,
                AlertLevel::Info,
                "Session ended",
                "Your session has expired. Please sign in again.",
            );
        });
        expiry_task.set(Some(task));
    });

    rsx! {
        {children}
        AlertHost {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use store::FileStore;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Ending {
        SignOut,
        Unauthorized,
    }

    /// Signed-in tree whose content unmounts once the session is gone, as the
    /// shells' layouts do.
    #[component]
    fn SignedInApp(base: PathBuf, ending: Ending, signed_out: Rc<Cell<bool>>) -> Element {
        use_context_provider(|| FileStore::new(base.clone()));
        use_context_provider(|| Signal::new(AlertQueue::default()));
        let auth = use_context_provider(|| {
            let mut state = AuthState::default();
            state.apply(SessionEvent::LoginSucceeded(SessionToken::new("persisted")));
            Signal::new(state)
        });

        if !auth().is_authenticated() {
            signed_out.set(true);
            return rsx! { "signed out" };
        }
        rsx! { EndSession { ending } }
    }

    #[component]
    fn EndSession(ending: Ending) -> Element {
        let auth = use_auth();
        let reporter = use_error_reporter();
        use_hook(move || match ending {
            Ending::SignOut => {
                spawn(sign_out(auth));
            }
            Ending::Unauthorized => {
                reporter.report(&ApiError::Unauthorized);
            }
        });
        rsx! { "signed in" }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "diabetes_risk_ui_{name}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    /// Run the tree until it has no more work.
    async fn end_session(base: PathBuf, ending: Ending) -> bool {
        let signed_out = Rc::new(Cell::new(false));
        let mut dom = VirtualDom::new_with_props(
            SignedInApp,
            SignedInAppProps {
                base,
                ending,
                signed_out: signed_out.clone(),
            },
        );
        dom.rebuild_in_place();
        for _ in 0..8 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
        signed_out.get()
    }

    #[tokio::test]
    async fn test_sign_out_clears_stored_token_before_unmount() {
        let base = scratch_dir("sign_out");
        FileStore::new(base.clone()).save("persisted").await;

        assert!(end_session(base.clone(), Ending::SignOut).await);
        assert_eq!(FileStore::new(base.clone()).load().await, None);

        let _ = std::fs::remove_dir_all(&base);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_stored_token_before_unmount() {
        let base = scratch_dir("unauthorized");
        FileStore::new(base.clone()).save("persisted").await;

        assert!(end_session(base.clone(), Ending::Unauthorized).await);
        assert_eq!(FileStore::new(base.clone()).load().await, None);

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn test_login_then_unauthorized_clears_user() {
        let mut state = AuthState::default();
        assert!(state.loading);

        state.apply(SessionEvent::LoginSucceeded(SessionToken::new("t")));
        state.user = Some(UserProfile {
            id: Some(1),
            name: "Ani".into(),
            email: "ani@gmail.com".into(),
            weight: None,
            height: None,
            created_at: None,
        });
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.token().unwrap().expose(), "t");

        state.apply(SessionEvent::Unauthorized);
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(state.token().is_none());
    }
}
