//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**.
//! The token is kept under the key [`TOKEN_KEY`] so it survives page reloads,
//! the same place a hand-written fetch client would keep it.
//!
//! `web_sys::Storage` is fetched from the window on every call; the struct is
//! zero-sized and `Clone`-friendly. Every failure (no window, storage disabled
//! by privacy settings, quota errors) degrades to "no token".

use crate::token::{TokenStore, TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    async fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    async fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
