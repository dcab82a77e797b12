//! # Token store
//!
//! The client owns exactly one piece of persistent state: the opaque bearer
//! token returned by `POST /auth/login`. [`TokenStore`] abstracts where it is
//! kept so the session logic in the `api` crate runs unchanged against
//! browser `localStorage`, a file in the platform data directory, or memory.
//!
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::file_store`], and `crate::local_storage` on the web).
//!
//! Storage failures are swallowed: a store that cannot be read behaves as
//! "no token", which sends the user back to the login screen rather than
//! crashing the app.

/// Key (or file name) under which the token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Async interface for persisting the session token.
pub trait TokenStore {
    fn load(&self) -> impl std::future::Future<Output = Option<String>>;
    fn save(&self, token: &str) -> impl std::future::Future<Output = ()>;
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
